use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use showfinder_catalog::{ShowQuery, ShowRecord};

use super::{load_catalog, truncate_str};
use crate::cli_types::SearchArgs;
use crate::config::Settings;
use crate::error::CliError;

const TITLE_WIDTH: usize = 50;

/// Entry point for `search`.
pub(crate) fn run_search(args: &SearchArgs, settings: &Settings) -> Result<(), CliError> {
    warn_if_inverted("--from-year", "--to-year", args.from_year, args.to_year);
    warn_if_inverted("--min-runtime", "--max-runtime", args.min_runtime, args.max_runtime);

    let catalog = load_catalog(settings)?;

    let mut query = build_query(args, settings);
    let limit = query.limit.take();
    let mut results = query.run(&catalog);
    let total = results.len();
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        log::info!("No titles match.");
        return Ok(());
    }

    for rec in &results {
        log::info!("{}", format_record(rec));
    }
    crate::log_blank();
    if total > results.len() {
        log::info!(
            "Showing {} of {} matches (use --limit to change)",
            results.len(),
            total,
        );
    } else {
        log::info!("{} matches", total);
    }

    Ok(())
}

/// Turn command-line criteria and settings into a query.
pub(crate) fn build_query(args: &SearchArgs, settings: &Settings) -> ShowQuery {
    let mut query = ShowQuery::new().exclude_adult(settings.hide_adult);

    if let Some(show_type) = &args.title_type {
        query = query.title_type(show_type.as_str());
    }
    if let Some((start, end)) = bounds(args.from_year, args.to_year) {
        query = query.years(start, end);
    }
    if let Some(genres) = &args.genre {
        query = query.genres(genres.iter().map(|g| g.trim()).filter(|g| !g.is_empty()));
    }
    if let Some(title) = &args.title {
        query = query.title(title.as_str());
    }
    if let Some((min, max)) = bounds(args.min_runtime, args.max_runtime) {
        query = query.runtime(min, max);
    }
    if settings.limit > 0 {
        query = query.limit(settings.limit);
    }

    query
}

/// An inclusive range from optional bounds; a missing side is unbounded.
fn bounds(low: Option<i32>, high: Option<i32>) -> Option<(i32, i32)> {
    match (low, high) {
        (None, None) => None,
        (low, high) => Some((low.unwrap_or(i32::MIN), high.unwrap_or(i32::MAX))),
    }
}

fn warn_if_inverted(low_flag: &str, high_flag: &str, low: Option<i32>, high: Option<i32>) {
    if let (Some(low), Some(high)) = (low, high) {
        if low > high {
            log::warn!("{low_flag} {low} is greater than {high_flag} {high}; nothing will match");
        }
    }
}

/// One result line: id, type, title with years, runtime, genres.
fn format_record(rec: &ShowRecord) -> String {
    let mut title = format!("{} ({})", rec.primary_title, rec.year_span());
    if rec.original_title != rec.primary_title && !rec.original_title.is_empty() {
        title = format!("{title} [{}]", rec.original_title);
    }
    let title = truncate_str(&title, TITLE_WIDTH);

    let runtime = if rec.runtime_minutes > 0 {
        format!("{} min", rec.runtime_minutes)
    } else {
        "? min".to_string()
    };

    format!(
        "{}  {:<14}  {:<width$}  {:>8}  {}",
        rec.show_id.if_supports_color(Stdout, |t| t.dimmed()),
        rec.title_type.display_name().if_supports_color(Stdout, |t| t.cyan()),
        title.if_supports_color(Stdout, |t| t.bold()),
        runtime,
        rec.genres.join(", ").if_supports_color(Stdout, |t| t.green()),
        width = TITLE_WIDTH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SettingSource, SettingSources};
    use std::path::PathBuf;

    fn settings(limit: usize, hide_adult: bool) -> Settings {
        Settings {
            catalog: PathBuf::from("title.basics.tsv"),
            limit,
            hide_adult,
            sources: SettingSources {
                catalog: SettingSource::Default,
                limit: SettingSource::Default,
                hide_adult: SettingSource::Default,
            },
        }
    }

    #[test]
    fn empty_args_build_empty_query() {
        let query = build_query(&SearchArgs::default(), &settings(0, false));
        assert!(query.is_empty());
        assert_eq!(query.limit, None);
    }

    #[test]
    fn limit_and_adult_come_from_settings() {
        let query = build_query(&SearchArgs::default(), &settings(25, true));
        assert_eq!(query.limit, Some(25));
        assert!(query.exclude_adult);
    }

    #[test]
    fn one_sided_ranges_are_open() {
        let args = SearchArgs {
            from_year: Some(1990),
            max_runtime: Some(120),
            ..SearchArgs::default()
        };
        let query = build_query(&args, &settings(0, false));
        assert_eq!(query.years, Some((1990, i32::MAX)));
        assert_eq!(query.runtime, Some((i32::MIN, 120)));
    }

    #[test]
    fn genres_trimmed_and_blank_dropped() {
        let args = SearchArgs {
            genre: Some(vec![" Drama".to_string(), String::new(), "comedy ".to_string()]),
            ..SearchArgs::default()
        };
        let query = build_query(&args, &settings(0, false));
        assert_eq!(
            query.genres,
            Some(vec!["Drama".to_string(), "comedy".to_string()])
        );
    }

    #[test]
    fn type_and_title_pass_through() {
        let args = SearchArgs {
            title: Some("zone".to_string()),
            title_type: Some("tvEpisode".to_string()),
            ..SearchArgs::default()
        };
        let query = build_query(&args, &settings(0, false));
        assert_eq!(query.title.as_deref(), Some("zone"));
        assert_eq!(query.title_type.as_deref(), Some("tvEpisode"));
    }

    #[test]
    fn bounds_cases() {
        assert_eq!(bounds(None, None), None);
        assert_eq!(bounds(Some(1), Some(2)), Some((1, 2)));
        assert_eq!(bounds(None, Some(2)), Some((i32::MIN, 2)));
    }
}
