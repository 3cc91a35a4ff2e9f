//! Configuration management for zstatus.
//!
//! Loads configuration from ${ZSTATUS_HOME}/config.toml, falling back to
//! built-in defaults when no file exists.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::collectors::Collector;
use crate::registry::{ModuleDescriptor, Registry};
use crate::template::Template;

pub mod paths {
    //! Path resolution for zstatus configuration.
    //!
    //! ZSTATUS_HOME resolution order:
    //! 1. ZSTATUS_HOME environment variable (if set)
    //! 2. ~/.config/zstatus (default)

    use std::path::PathBuf;

    use anyhow::{Context, Result};

    /// Returns the zstatus home directory.
    pub fn zstatus_home() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("ZSTATUS_HOME") {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("zstatus"))
            .context("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(zstatus_home()?.join("config.toml"))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Poll interval in milliseconds
    pub interval_ms: u64,

    /// Status buffer capacity in bytes, including the terminator slot
    pub max_len: usize,

    /// Text shown for a module whose collector has no value
    pub unknown: String,

    /// Optional file to mirror log output into
    pub log_file: Option<PathBuf>,

    /// Ordered module list, left to right
    pub modules: Vec<ModuleDescriptor>,
}

impl Config {
    const DEFAULT_INTERVAL_MS: u64 = 1000;
    const DEFAULT_MAX_LEN: usize = 2048;
    const DEFAULT_UNKNOWN: &str = "n/a";

    /// Loads configuration from the default config path.
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = paths::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads and validates configuration from a specific path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.interval_ms > 0, "interval_ms must be greater than 0");
        ensure!(self.max_len >= 1, "max_len must be at least 1");
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn registry(&self) -> Registry {
        Registry::new(self.modules.clone())
    }

    fn default_modules() -> Vec<ModuleDescriptor> {
        DEFAULT_MODULES
            .iter()
            .map(|&(collector, arg, prefix, suffix, slow)| {
                ModuleDescriptor::new(collector, arg, Template::new(prefix, suffix), slow)
            })
            .collect()
    }
}

/// Built-in module list: collector, argument, template prefix and suffix, slow.
const DEFAULT_MODULES: &[(Collector, Option<&str>, &str, &str, bool)] = &[
    (Collector::KernelRelease, None, "", " | ", true),
    (Collector::RamPerc, None, "RAM ", "% | ", false),
    (Collector::LoadAvg, None, "", " | ", false),
    (Collector::BatteryPerc, Some("BAT0"), "BAT ", "% | ", false),
    (Collector::Datetime, Some("%F %T"), "", "", false),
];

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            max_len: Self::DEFAULT_MAX_LEN,
            unknown: Self::DEFAULT_UNKNOWN.to_string(),
            log_file: None,
            modules: Self::default_modules(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.interval(), Duration::from_secs(1));
        assert_eq!(config.max_len, 2048);
        assert_eq!(config.unknown, "n/a");
        assert_eq!(config.registry().len(), 5);
        assert_eq!(config.registry().slow().count(), 1);
    }

    #[test]
    fn test_default_templates_render() {
        let rendered: Vec<String> = Config::default()
            .modules
            .iter()
            .map(|m| m.format.render("v"))
            .collect();
        assert_eq!(rendered, ["v | ", "RAM v% | ", "v | ", "BAT v% | ", "v"]);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "interval_ms = 250\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.interval_ms, 250);
        assert_eq!(config.max_len, 2048); // default preserved
        assert_eq!(config.modules, Config::default().modules);
    }

    #[test]
    fn test_load_modules() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"unknown = "?"

[[modules]]
collector = "battery_perc"
arg = "BAT1"
format = "BAT:%s "
slow = true

[[modules]]
collector = "datetime"
format = "%s"
"#,
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        let registry = config.registry();
        assert_eq!(config.unknown, "?");
        assert_eq!(registry.len(), 2);
        let first = &registry.modules()[0];
        assert_eq!(first.collector, Collector::BatteryPerc);
        assert_eq!(first.arg.as_deref(), Some("BAT1"));
        assert!(first.slow);
        assert!(!registry.modules()[1].slow);
        assert_eq!(registry.modules()[1].arg, None);
    }

    #[test]
    fn test_bad_template_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[[modules]]\ncollector = \"uptime\"\nformat = \"up\"\n",
        )
        .unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("no %s"));
    }

    #[test]
    fn test_unknown_collector_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[[modules]]\ncollector = \"wifi_essid\"\nformat = \"%s\"\n",
        )
        .unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "interval_ms = 0\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("interval_ms"));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("nope.toml")).is_err());
    }
}
