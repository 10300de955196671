//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "showfinder")]
#[command(about = "Search a tab-separated title catalog", long_about = None)]
pub(crate) struct Cli {
    /// Catalog file (title.basics TSV); overrides SHOWFINDER_CATALOG and the config file
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter criteria for `search`. Unset criteria are not applied.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Title substring (case-insensitive, primary or original title)
    pub title: Option<String>,

    /// Exact raw title type (e.g. movie, tvSeries, tvEpisode)
    #[arg(short = 't', long = "type")]
    pub title_type: Option<String>,

    /// Earliest start year (inclusive)
    #[arg(long)]
    pub from_year: Option<i32>,

    /// Latest start year (inclusive)
    #[arg(long)]
    pub to_year: Option<i32>,

    /// Genres to match, any of (e.g. drama,comedy)
    #[arg(short, long, value_delimiter = ',')]
    pub genre: Option<Vec<String>>,

    /// Minimum runtime in minutes (inclusive)
    #[arg(long)]
    pub min_runtime: Option<i32>,

    /// Maximum runtime in minutes (inclusive)
    #[arg(long)]
    pub max_runtime: Option<i32>,

    /// Leave out adult titles
    #[arg(long)]
    pub no_adult: bool,

    /// Maximum number of results to print (0 for no limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search the catalog
    Search(SearchArgs),

    /// Show catalog statistics
    Stats {
        /// Number of genres to list
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the browsable title types
    Types,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where they came from
    Show,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
