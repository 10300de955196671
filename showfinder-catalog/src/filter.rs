//! Catalog filters.
//!
//! Every filter takes any sequence of record references and returns the
//! matching ones in input order, so the output of one filter can be fed
//! straight into the next. All filters except [`filter_by_type`] and
//! [`exclude_adult`] first restrict to browsable title types.

use crate::record::ShowRecord;

fn gated<'a, I>(records: I) -> impl Iterator<Item = &'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
{
    records
        .into_iter()
        .filter(|rec| rec.title_type.is_browsable())
}

/// Keep only records whose title type is browsable.
pub fn browsable<'a, I>(records: I) -> Vec<&'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
{
    gated(records).collect()
}

/// Browsable records whose start year lies in `start_year..=end_year`.
///
/// Unknown start years are stored as `0`, so they only match when the range
/// reaches down to zero.
pub fn filter_by_year_range<'a, I>(records: I, start_year: i32, end_year: i32) -> Vec<&'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
{
    gated(records)
        .filter(|rec| (start_year..=end_year).contains(&rec.start_year))
        .collect()
}

/// Browsable records tagged with at least one of `genres`.
///
/// Genre names compare case-insensitively and must match whole. An empty
/// `genres` matches nothing.
pub fn filter_by_genre<'a, I, S>(records: I, genres: &[S]) -> Vec<&'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
    S: AsRef<str>,
{
    let wanted: Vec<String> = genres.iter().map(|g| g.as_ref().to_lowercase()).collect();
    if wanted.is_empty() {
        return Vec::new();
    }

    gated(records)
        .filter(|rec| rec.has_any_genre_folded(&wanted))
        .collect()
}

/// Browsable records whose primary or original title contains `title`,
/// ignoring case. An empty `title` matches every browsable record.
pub fn filter_by_title<'a, I>(records: I, title: &str) -> Vec<&'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
{
    let needle = title.to_lowercase();
    gated(records)
        .filter(|rec| rec.title_contains_folded(&needle))
        .collect()
}

/// Browsable records whose runtime lies in `min_minutes..=max_minutes`.
///
/// Unknown runtimes are stored as `0`, so they only match when the range
/// reaches down to zero.
pub fn filter_by_duration<'a, I>(records: I, min_minutes: i32, max_minutes: i32) -> Vec<&'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
{
    gated(records)
        .filter(|rec| (min_minutes..=max_minutes).contains(&rec.runtime_minutes))
        .collect()
}

/// Records whose raw title type equals `show_type` exactly.
///
/// Unlike the other filters this does not restrict to browsable types, so
/// tags such as `"tvEpisode"` can be queried directly.
pub fn filter_by_type<'a, I>(records: I, show_type: &str) -> Vec<&'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
{
    records
        .into_iter()
        .filter(|rec| rec.title_type.as_str() == show_type)
        .collect()
}

/// Drop records flagged as adult content. Does not apply the type-gate.
pub fn exclude_adult<'a, I>(records: I) -> Vec<&'a ShowRecord>
where
    I: IntoIterator<Item = &'a ShowRecord>,
{
    records.into_iter().filter(|rec| !rec.is_adult).collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
