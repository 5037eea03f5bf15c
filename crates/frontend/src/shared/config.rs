use contracts::contact::ConfirmationCopy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub confirmation: ConfirmationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SubmissionConfig {
    /// Duration of the simulated submission, milliseconds
    pub delay_ms: u32,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ConfirmationConfig {
    #[serde(default)]
    pub copy: ConfirmationCopy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid contact.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration embedded in the bundle (crates/frontend/contact.toml)
const EMBEDDED_CONFIG: &str = include_str!("../../contact.toml");

pub fn parse_config(source: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load the embedded configuration.
///
/// Falls back to built-in defaults if contact.toml does not parse, so a
/// bad edit never takes the page down.
pub fn load_config() -> Config {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            log::debug!("Loaded contact config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("{}; using defaults", e);
            Config::default()
        }
    }
}
