//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SRMERGE_` prefix, `__` between sections,
//!    e.g. `SRMERGE_MERGE__PARALLEL_READS=false`
//! 3. Config file: `--config FILE` (must exist) or [`AppConfig::config_path`]
//!    (optional)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "SRMERGE";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
    /// Merge pipeline settings.
    #[serde(default)]
    pub merge: MergeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// One of `auto`, `human`, `plain`, `json`. Used when `--output-format`
    /// is left at `auto`.
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Read fragments on worker threads.
    pub parallel_reads: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            parallel_reads: true,
        }
    }
}

impl AppConfig {
    /// Load configuration by layering file and environment over defaults.
    ///
    /// `config_file` is the path passed via `--config`; when given it must
    /// exist. Otherwise the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .with_context(|| match config_file {
                Some(path) => format!("Invalid configuration in {}", path.display()),
                None => "Invalid configuration".to_owned(),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for the platform config directory,
    /// falling back to `.srmerge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "srmerge", "srmerge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".srmerge.toml"))
    }

    /// Look up a dotted key, as accepted by `srmerge config get`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone()),
            "merge.parallel_reads" => Some(self.merge.parallel_reads.to_string()),
            _ => None,
        }
    }

    /// Every key [`Self::get`] understands.
    pub fn keys() -> &'static [&'static str] {
        &["output.no_color", "output.format", "merge.parallel_reads"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_read_in_parallel() {
        let cfg = AppConfig::default();
        assert!(cfg.merge.parallel_reads);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("srmerge.toml");
        fs::write(&path, "[merge]\nparallel_reads = false\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(!cfg.merge.parallel_reads);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[merge]\nparallel_reads = \"sometimes\"\n").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("bad.toml"));
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("merge.parallel_reads").as_deref(), Some("true"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert!(cfg.get("does.not.exist").is_none());
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in AppConfig::keys() {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
