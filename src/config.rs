//! Layered configuration for metadata generation.
//!
//! Sources, lowest precedence first:
//! - compiled-in defaults
//! - `component-metadata.toml` at the project root (or an explicit `--config` file)
//! - environment variables
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `COMPONENT_METADATA_` and use
//! double underscores to separate nested levels:
//! - `COMPONENT_METADATA_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `COMPONENT_METADATA_WATCH__IGNORED=[node_modules,dist]` sets `watch.ignored`
//!
//! The input layout and output path are fixed conventions and are not configurable.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "component-metadata.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "COMPONENT_METADATA_";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Watch mode configuration
    #[serde(default)]
    pub watch: WatchConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level for all targets
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target level overrides
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WatchConfig {
    /// Directory names whose events never trigger a rebuild
    #[serde(default = "default_ignored_dirs")]
    pub ignored: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ignored_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            ignored: default_ignored_dirs(),
        }
    }
}

impl Settings {
    /// Load configuration for a project root.
    ///
    /// Uses `explicit` when given, otherwise `<root>/component-metadata.toml`.
    /// A missing file leaves the defaults in place.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, Box<figment::Error>> {
        let config_path = explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| Self::default_path(root));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file plus the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Default configuration path for a project root.
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.logging.default, "info");
        assert!(settings.logging.modules.is_empty());
        assert_eq!(settings.watch.ignored, vec!["node_modules"]);
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let toml_content = r#"
[logging]
default = "warn"

[logging.modules]
"component_metadata::pairing" = "debug"

[watch]
ignored = ["node_modules", "dist"]
"#;
        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.logging.default, "warn");
        assert_eq!(
            settings.logging.modules["component_metadata::pairing"],
            "debug"
        );
        assert_eq!(settings.watch.ignored, vec!["node_modules", "dist"]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[logging]\ndefault = \"error\"\n").unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.logging.default, "error");
        assert_eq!(settings.watch.ignored, vec!["node_modules"]);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let settings = Settings::load(temp_dir.path(), None).unwrap();
        assert_eq!(settings.logging.default, "info");
        assert_eq!(settings.watch.ignored, vec!["node_modules"]);
    }

    #[test]
    fn test_explicit_path_wins_over_root_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[logging]\ndefault = \"warn\"\n",
        )
        .unwrap();
        let explicit = temp_dir.path().join("other.toml");
        fs::write(&explicit, "[logging]\ndefault = \"trace\"\n").unwrap();

        let settings = Settings::load(temp_dir.path(), Some(&explicit)).unwrap();
        assert_eq!(settings.logging.default, "trace");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[watch]\nignored = 42\n").unwrap();

        assert!(Settings::load_from(&config_path).is_err());
    }
}
