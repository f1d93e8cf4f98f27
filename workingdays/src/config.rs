//! Configuration file loading.
//!
//! The config file only carries default jurisdiction values:
//!
//! ```toml
//! [defaults]
//! country = "GB"
//! subdivision = "England"
//! ```
//!
//! It is read from `--config PATH` when given, otherwise from
//! `<config dir>/workingdays/config.toml` if that file exists.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use wd_core::Settings;

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },
}

/// Parsed config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default jurisdiction.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// The `[defaults]` table.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Default country identifier.
    pub country: Option<String>,
    /// Default subdivision identifier, or `"None"`.
    pub subdivision: Option<String>,
}

impl ConfigFile {
    /// Parse TOML text. `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse(&text, path)
    }

    /// Load `explicit` if given (it must exist), else the default location
    /// if a file is there, else an empty config.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/workingdays/config.toml`, if the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("workingdays").join("config.toml"))
    }

    /// Settings with the file's values over the built-in defaults.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(country) = &self.defaults.country {
            settings = settings.with_country(country.as_str());
        }
        if let Some(subdivision) = &self.defaults.subdivision {
            settings = settings.with_subdivision(subdivision.as_str());
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ConfigFile> {
        ConfigFile::parse(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_keeps_builtin_defaults() {
        assert_eq!(parse("").unwrap().settings(), Settings::default());
    }

    #[test]
    fn defaults_table_overrides_each_field() {
        let cfg = parse("[defaults]\ncountry = \"Turkey\"\nsubdivision = \"None\"\n").unwrap();
        assert_eq!(cfg.settings(), Settings::new("Turkey", "None"));

        let cfg = parse("[defaults]\nsubdivision = \"Scotland\"\n").unwrap();
        assert_eq!(cfg.settings(), Settings::new("GB", "Scotland"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = parse("[defaults]\ncountri = \"GB\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config file test.toml"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = ConfigFile::discover(Some(Path::new("/nonexistent/workingdays.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
