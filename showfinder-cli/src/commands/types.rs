use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use showfinder_catalog::TitleType;

/// Entry point for `types`.
pub(crate) fn run_types() {
    log::info!("Browsable title types:");
    crate::log_blank();
    for title_type in TitleType::browsable() {
        log::info!(
            "  {:<14} {}",
            title_type.as_str().if_supports_color(Stdout, |t| t.bold()),
            title_type.display_name(),
        );
    }
    crate::log_blank();
    log::info!("Other types (e.g. tvEpisode) are only returned by `search --type <TYPE>`.");
}
