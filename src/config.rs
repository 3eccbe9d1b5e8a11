use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::BenchError;
use crate::types::CommandLine;

/// Timed invocations per version.
pub const NB_CALLS: usize = 3;

/// Upper bound on timed invocations per version.
pub const MAX_TRIALS: usize = 10_000;

pub const DEFAULT_PACKAGE: &str = "bee";

pub const DEFAULT_VERSIONS: &[&str] = &[
    "0.1.0", "0.1.1", "0.2.0", "0.3.0", "0.3.1", "0.4.0", "0.5.0", "0.5.1", "0.5.2", "0.5.3",
    "0.6.0",
];

/// On-disk configuration. Every key is optional; missing keys take the
/// built-in defaults, unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub package: String,
    pub versions: Vec<String>,
    pub trials: usize,
    pub package_manager: Vec<String>,
    pub entry_point: Vec<String>,
    pub tolerate_missing_uninstall: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            package: DEFAULT_PACKAGE.to_string(),
            versions: DEFAULT_VERSIONS.iter().map(|v| v.to_string()).collect(),
            trials: NB_CALLS,
            package_manager: vec!["sudo".to_string(), "gem".to_string()],
            entry_point: vec![DEFAULT_PACKAGE.to_string()],
            tolerate_missing_uninstall: false,
        }
    }
}

/// A configuration that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub package: String,
    pub versions: Vec<String>,
    pub trials: usize,
    pub package_manager: CommandLine,
    pub entry_point: CommandLine,
    pub tolerate_missing_uninstall: bool,
}

impl Config {
    /// `<config_dir>/verbench/config.toml`, e.g. `~/.config/verbench/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("verbench").join("config.toml"))
    }

    /// Loads `explicit` if given (it must exist), else the default path if a
    /// file is there, else the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config, BenchError> {
        if let Some(path) = explicit {
            return Config::from_file(path);
        }
        match Config::default_path() {
            Some(path) if path.is_file() => Config::from_file(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Config, BenchError> {
        let text = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&text, path)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Config, BenchError> {
        toml::from_str(text).map_err(|e| BenchError::ConfigParse {
            path: path.to_path_buf(),
            detail: e.message().to_string(),
        })
    }

    pub fn into_settings(self) -> Result<Settings, BenchError> {
        if self.package.trim().is_empty() {
            return Err(invalid("package name is empty"));
        }
        if self.versions.is_empty() {
            return Err(invalid("version list is empty"));
        }

        let mut seen = BTreeSet::new();
        for version in &self.versions {
            if version.trim().is_empty() {
                return Err(invalid("version list contains an empty version"));
            }
            if !seen.insert(version.as_str()) {
                return Err(invalid(format!("version '{}' is listed more than once", version)));
            }
        }

        if self.trials == 0 {
            return Err(invalid("trials must be at least 1"));
        }
        if self.trials > MAX_TRIALS {
            return Err(invalid(format!("trials must be at most {}", MAX_TRIALS)));
        }

        let package_manager = CommandLine::from_argv(&self.package_manager)
            .ok_or_else(|| invalid("package_manager command is empty"))?;
        let entry_point = CommandLine::from_argv(&self.entry_point)
            .ok_or_else(|| invalid("entry_point command is empty"))?;

        Ok(Settings {
            package: self.package,
            versions: self.versions,
            trials: self.trials,
            package_manager,
            entry_point,
            tolerate_missing_uninstall: self.tolerate_missing_uninstall,
        })
    }
}

fn invalid(detail: impl Into<String>) -> BenchError {
    BenchError::InvalidConfig {
        detail: detail.into(),
    }
}
