//! Settings resolution.
//!
//! Priority: command-line flag > environment variable > config file > default.

use std::path::{Path, PathBuf};

use crate::error::CliError;

pub(crate) const DEFAULT_CATALOG: &str = "title.basics.tsv";
pub(crate) const DEFAULT_LIMIT: usize = 25;

const ENV_CATALOG: &str = "SHOWFINDER_CATALOG";
const ENV_LIMIT: &str = "SHOWFINDER_LIMIT";
const ENV_HIDE_ADULT: &str = "SHOWFINDER_HIDE_ADULT";

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub(crate) struct ConfigFile {
    pub catalog: Option<PathBuf>,
    pub limit: Option<usize>,
    pub hide_adult: Option<bool>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub catalog: Option<PathBuf>,
    pub limit: Option<usize>,
    pub hide_adult: bool,
}

/// Provenance of each setting.
#[derive(Debug)]
pub(crate) struct SettingSources {
    pub catalog: SettingSource,
    pub limit: SettingSource,
    pub hide_adult: SettingSource,
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub catalog: PathBuf,
    /// `0` means no limit
    pub limit: usize,
    pub hide_adult: bool,
    pub sources: SettingSources,
}

impl Settings {
    /// Resolve settings from flags, the process environment, and the config file.
    pub(crate) fn load(overrides: Overrides) -> Self {
        let file = config_path()
            .and_then(|p| load_config_file(&p))
            .unwrap_or_default();
        Self::resolve(overrides, |var| std::env::var(var).ok(), file)
    }

    fn resolve(overrides: Overrides, env: impl Fn(&str) -> Option<String>, file: ConfigFile) -> Self {
        let (catalog, catalog_source) = if let Some(path) = overrides.catalog {
            (path, SettingSource::Flag)
        } else if let Some(path) = env(ENV_CATALOG).filter(|v| !v.is_empty()) {
            (PathBuf::from(path), SettingSource::EnvVar(ENV_CATALOG))
        } else if let Some(path) = file.catalog {
            (path, SettingSource::ConfigFile)
        } else {
            (PathBuf::from(DEFAULT_CATALOG), SettingSource::Default)
        };

        let env_limit = env(ENV_LIMIT).and_then(|v| match v.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("Ignoring {ENV_LIMIT}={v:?}: not a number");
                None
            }
        });
        let (limit, limit_source) = if let Some(n) = overrides.limit {
            (n, SettingSource::Flag)
        } else if let Some(n) = env_limit {
            (n, SettingSource::EnvVar(ENV_LIMIT))
        } else if let Some(n) = file.limit {
            (n, SettingSource::ConfigFile)
        } else {
            (DEFAULT_LIMIT, SettingSource::Default)
        };

        let env_hide_adult = env(ENV_HIDE_ADULT).and_then(|v| {
            let parsed = parse_flag(&v);
            if parsed.is_none() {
                log::warn!("Ignoring {ENV_HIDE_ADULT}={v:?}: expected true/false");
            }
            parsed
        });
        let (hide_adult, hide_adult_source) = if overrides.hide_adult {
            (true, SettingSource::Flag)
        } else if let Some(b) = env_hide_adult {
            (b, SettingSource::EnvVar(ENV_HIDE_ADULT))
        } else if let Some(b) = file.hide_adult {
            (b, SettingSource::ConfigFile)
        } else {
            (false, SettingSource::Default)
        };

        Self {
            catalog,
            limit,
            hide_adult,
            sources: SettingSources {
                catalog: catalog_source,
                limit: limit_source,
                hide_adult: hide_adult_source,
            },
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Return the path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("showfinder").join("config.toml"))
}

fn load_config_file(path: &Path) -> Option<ConfigFile> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::debug!("No config file at {}: {e}", path.display());
            return None;
        }
    };
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring malformed config file {}: {e}", path.display());
            None
        }
    }
}

/// Write a config file holding the default settings, creating parent
/// directories as needed. Refuses to replace an existing file unless `force`.
pub(crate) fn write_default_config(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ConfigFile {
        catalog: Some(PathBuf::from(DEFAULT_CATALOG)),
        limit: Some(DEFAULT_LIMIT),
        hide_adult: Some(false),
    };
    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
