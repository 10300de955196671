use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::config::{Settings, config_path, write_default_config};
use crate::error::CliError;

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(settings: &Settings) {
    log::info!(
        "{}",
        "showfinder Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match config_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let limit = if settings.limit == 0 {
        "none".to_string()
    } else {
        settings.limit.to_string()
    };
    let rows = [
        ("catalog", settings.catalog.display().to_string(), &settings.sources.catalog),
        ("limit", limit, &settings.sources.limit),
        ("hide_adult", settings.hide_adult.to_string(), &settings.sources.hide_adult),
    ];
    for (name, value, source) in rows {
        log::info!(
            "  {:<12} {} {}",
            name,
            value.if_supports_color(Stdout, |t| t.bold()),
            format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Write a default config file.
pub(crate) fn run_config_init(force: bool) -> Result<(), CliError> {
    let path = config_path()
        .ok_or_else(|| CliError::config("Could not determine config directory"))?;
    write_default_config(&path, force)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
