//! showfinder CLI
//!
//! Command-line interface for searching a tab-separated title catalog.

mod cli_types;
mod commands;
mod config;
mod error;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use config::{Overrides, Settings};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Search(args) => {
            let settings = Settings::load(Overrides {
                catalog: cli.catalog,
                limit: args.limit,
                hide_adult: args.no_adult,
            });
            commands::search::run_search(&args, &settings)
        }
        Commands::Stats { top, json } => {
            let settings = Settings::load(Overrides {
                catalog: cli.catalog,
                ..Overrides::default()
            });
            commands::stats::run_stats(&settings, top, json)
        }
        Commands::Types => {
            commands::types::run_types();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let settings = Settings::load(Overrides {
                    catalog: cli.catalog,
                    ..Overrides::default()
                });
                commands::config::run_config_show(&settings);
                Ok(())
            }
            ConfigAction::Init { force } => commands::config::run_config_init(force),
        },
    }
}

/// Install the logger. Normal output goes through `log::info!` to stdout;
/// `--quiet` keeps only warnings and errors. `RUST_LOG` overrides the level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info | log::Level::Debug | log::Level::Trace => {
                writeln!(buf, "{}", record.args())
            }
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }
    builder.parse_default_env();
    builder.init();
}

/// Log an empty line.
pub(crate) fn log_blank() {
    log::info!("");
}
