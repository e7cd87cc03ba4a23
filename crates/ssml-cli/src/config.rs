//! # CLI Configuration
//!
//! Settings shared by every subcommand. Values come from an optional YAML
//! file given with `--config`; command-line flags override the file.
//!
//! ```yaml
//! profile: alexa
//! log_format: json
//! log_level: info
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use ssml_schema::Profile;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Resolved CLI settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Tag table to validate and render against.
    pub profile: Profile,
    /// Log output format.
    pub log_format: LogFormat,
    /// `tracing` filter directive used when no `-v` flag is given.
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or holds unknown keys or values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, profile: Option<Profile>, log_format: Option<LogFormat>) -> Self {
        if let Some(profile) = profile {
            self.profile = profile;
        }
        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }
        self
    }

    /// Filter directive for the log subscriber.
    ///
    /// Each `-v` raises the level one step from `warn`; without `-v` the
    /// configured `log_level` applies, then `warn`.
    pub fn filter_directive(&self, verbose: u8) -> String {
        match verbose {
            0 => self.log_level.clone().unwrap_or_else(|| "warn".to_string()),
            1 => "info".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CliConfig::default();
        assert_eq!(config.profile, Profile::Standard);
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.filter_directive(0), "warn");
    }

    #[test]
    fn loads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ssml.yaml");
        std::fs::write(&path, "profile: alexa\nlog_format: json\nlog_level: debug\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.profile, Profile::Alexa);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.filter_directive(0), "debug");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ssml.yaml");
        std::fs::write(&path, "profile: alexa\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.profile, Profile::Alexa);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ssml.yaml");
        std::fs::write(&path, "profiel: alexa\n").unwrap();
        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = CliConfig {
            profile: Profile::Alexa,
            log_format: LogFormat::Json,
            log_level: None,
        }
        .with_overrides(Some(Profile::Standard), None);
        assert_eq!(config.profile, Profile::Standard);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn verbosity_beats_configured_level() {
        let config = CliConfig {
            log_level: Some("error".to_string()),
            ..CliConfig::default()
        };
        assert_eq!(config.filter_directive(0), "error");
        assert_eq!(config.filter_directive(1), "info");
        assert_eq!(config.filter_directive(2), "debug");
        assert_eq!(config.filter_directive(7), "trace");
    }
}
