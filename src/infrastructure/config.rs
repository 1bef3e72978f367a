//! Configuration management
//!
//! The data directory is resolved in this order:
//!
//! 1. `--data-dir` on the command line
//! 2. `NOTEKEEP_DIR` environment variable
//! 3. `data_dir` in the config file (`NOTEKEEP_CONFIG` or the platform config dir)
//! 4. The platform data directory

use crate::error::{NotekeepError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "NOTEKEEP_DIR";
pub const CONFIG_ENV: &str = "NOTEKEEP_CONFIG";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from a TOML file. A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(NotekeepError::Io(e)),
        };

        Ok(toml::from_str(&contents)?)
    }

    /// Config file location: `NOTEKEEP_CONFIG`, else `<config dir>/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE)))
    }

    /// Load the config from its default location, if one can be determined.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Config::default()),
        }
    }
}

/// Resolve the data directory for this invocation from the process environment.
pub fn data_dir(cli_override: Option<&Path>) -> Result<PathBuf> {
    // The flag wins outright; don't read a config file that would be ignored
    if let Some(dir) = cli_override.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(dir.to_path_buf());
    }

    let env = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    let config = if env.is_some() {
        Config::default()
    } else {
        Config::load()?
    };
    let platform = project_dirs().map(|dirs| dirs.data_dir().to_path_buf());

    resolve_data_dir(None, env, &config, platform)
}

/// Pick the data directory by precedence: flag, environment, config file, platform.
pub fn resolve_data_dir(
    cli_override: Option<&Path>,
    env: Option<PathBuf>,
    config: &Config,
    platform: Option<PathBuf>,
) -> Result<PathBuf> {
    cli_override
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or(env.filter(|p| !p.as_os_str().is_empty()))
        .or_else(|| config.data_dir.clone())
        .or(platform)
        .ok_or_else(|| NotekeepError::Config("Could not determine data directory".to_string()))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "notekeep")
}
