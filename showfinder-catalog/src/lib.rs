//! In-memory title catalog: tab-separated export parsing and filter queries.
//!
//! A [`Catalog`] is built once from the full text of a `title.basics`-style
//! export and never changes afterwards. The [`filter`] functions narrow any
//! sequence of records and can be chained; [`ShowQuery`] bundles several
//! criteria into one call.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod query;
pub mod record;
pub mod stats;
pub mod title_type;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use filter::{
    browsable, exclude_adult, filter_by_duration, filter_by_genre, filter_by_title,
    filter_by_type, filter_by_year_range,
};
pub use loader::{LoadReport, parse_catalog, parse_line};
pub use query::ShowQuery;
pub use record::ShowRecord;
pub use stats::{CatalogStats, Tally};
pub use title_type::TitleType;
