use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use showfinder_catalog::CatalogStats;

use super::load_catalog;
use crate::config::Settings;
use crate::error::CliError;

/// Entry point for `stats`.
pub(crate) fn run_stats(settings: &Settings, top: usize, json: bool) -> Result<(), CliError> {
    let catalog = load_catalog(settings)?;
    let stats = CatalogStats::collect(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let report = catalog.report();
    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Catalog: {}", settings.catalog.display());
    crate::log_blank();
    log::info!("  Titles:          {:>8}", stats.total);
    log::info!("  Adult:           {:>8}", stats.adult);
    log::info!("  Lines skipped:   {:>8}", report.skipped);
    match (stats.earliest_year, stats.latest_year) {
        (Some(first), Some(last)) => log::info!("  Start years:     {first}–{last}"),
        _ => log::info!("  Start years:     unknown"),
    }
    match stats.average_runtime {
        Some(avg) => log::info!("  Average runtime: {avg:.1} min"),
        None => log::info!("  Average runtime: unknown"),
    }

    crate::log_blank();
    log::info!("{}", "Title types".if_supports_color(Stdout, |t| t.bold()));
    for tally in &stats.by_type {
        log::info!(
            "  {:<16} {:>8}",
            tally.name.if_supports_color(Stdout, |t| t.cyan()),
            tally.count,
        );
    }

    crate::log_blank();
    log::info!(
        "{}",
        format!("Genres (top {top})").if_supports_color(Stdout, |t| t.bold()),
    );
    for tally in stats.by_genre.iter().take(top) {
        log::info!(
            "  {:<16} {:>8}",
            tally.name.if_supports_color(Stdout, |t| t.green()),
            tally.count,
        );
    }
    if stats.by_genre.len() > top {
        log::info!("  ... and {} more", stats.by_genre.len() - top);
    }

    Ok(())
}
