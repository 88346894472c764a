//! Application settings loaded from file and environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    models::{ConfigOverrides, MarketConfig},
    xml::WriteOptions,
};

/// Directory under `~/.config` holding the settings file.
pub const DEFAULT_CONFIG_DIR: &str = "market-tracker";
/// File name of the settings file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Prefix of environment variables overriding file settings.
pub const ENV_PREFIX: &str = "MARKET_TRACKER";

/// Settings shared by every frontend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used for new markets instead of the built-in defaults.
    pub defaults: ConfigOverrides,
    /// Formatting of written documents.
    pub output: WriteOptions,
}

impl AppConfig {
    /// Default location under the user's config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_CONFIG_DIR)
            .join(CONFIG_FILE_NAME)
    }

    /// Load settings from the default location and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path())
    }

    /// Load settings from `path` (if it exists), then apply
    /// `MARKET_TRACKER_*` environment overrides such as
    /// `MARKET_TRACKER_DEFAULTS__DRAFT=4`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_layered(path.as_ref(), environment())
    }

    fn load_layered(path: &Path, env: ::config::Environment) -> Result<Self> {
        debug!("loading settings from {}", path.display());

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(env)
            .build()
            .with_context(|| format!("failed to read settings {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse settings {}", path.display()))
    }

    /// Market configuration for a new market under these settings.
    pub fn market_config(&self) -> MarketConfig {
        MarketConfig::with_overrides(&self.defaults)
    }
}

/// `MARKET_TRACKER_` followed by `__`-separated keys.
fn environment() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn env_with(vars: &[(&str, &str)]) -> ::config::Environment {
        let vars: ::config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        environment().source(Some(vars))
    }

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join(CONFIG_FILE_NAME))?;
        assert_eq!(config.output, WriteOptions::default());
        assert_eq!(config.market_config(), MarketConfig::default());
        Ok(())
    }

    #[test]
    fn file_overrides_market_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"
[defaults]
draft = 4
sell_char = 2

[output]
indent = 0
"#,
        )?;

        let config = AppConfig::load_from(&path)?;
        let market = config.market_config();
        assert_eq!(market.draft, 4);
        assert_eq!(market.sell_char, Some(2));
        assert_eq!(market.banish_char, 5);
        assert_eq!(config.output.indent, 0);
        assert!(config.output.declaration);
        Ok(())
    }

    #[test]
    fn environment_overrides_nested_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_layered(
            &dir.path().join(CONFIG_FILE_NAME),
            env_with(&[
                ("MARKET_TRACKER_DEFAULTS__DRAFT", "4"),
                ("MARKET_TRACKER_OUTPUT__DECLARATION", "false"),
            ]),
        )?;
        assert_eq!(config.defaults.draft, Some(4));
        assert_eq!(config.market_config().draft, 4);
        assert!(!config.output.declaration);
        Ok(())
    }

    #[test]
    fn environment_wins_over_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults]\ndraft = 2\nante = 3\n")?;

        let config =
            AppConfig::load_layered(&path, env_with(&[("MARKET_TRACKER_DEFAULTS__DRAFT", "6")]))?;
        assert_eq!(config.defaults.draft, Some(6));
        assert_eq!(config.defaults.ante, Some(3));
        Ok(())
    }

    #[test]
    fn malformed_file_is_reported() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults\ndraft = ")?;
        assert!(AppConfig::load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn default_path_ends_with_config_file() {
        let path = AppConfig::default_path();
        assert!(path.ends_with(Path::new(DEFAULT_CONFIG_DIR).join(CONFIG_FILE_NAME)));
    }
}
