pub(crate) mod config;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod types;

use showfinder_catalog::Catalog;

use crate::config::Settings;
use crate::error::CliError;

/// Load the catalog file named by the settings.
pub(crate) fn load_catalog(settings: &Settings) -> Result<Catalog, CliError> {
    let catalog = Catalog::from_path(&settings.catalog)?;
    let report = catalog.report();
    log::debug!(
        "{}: {} titles, {} incomplete lines skipped",
        settings.catalog.display(),
        report.records,
        report.skipped,
    );
    Ok(catalog)
}

/// Truncate a string to a maximum number of characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}
