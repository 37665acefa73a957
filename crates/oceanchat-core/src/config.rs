use crate::error::{OceanChatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for OceanChat
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Points per generated mock series (trailing daily window)
    pub series_window: ConfigValue<usize>,

    /// Seed for the engine's random source; unset means OS entropy
    pub seed: ConfigValue<Option<u64>>,

    /// Whether replies are spoken through the speech sink
    pub voice: ConfigValue<bool>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            series_window: ConfigValue::new(30, ConfigSource::Default),
            seed: ConfigValue::new(None, ConfigSource::Default),
            voice: ConfigValue::new(false, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| OceanChatError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| OceanChatError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        // Update values from file
        if let Some(series_window) = file_config.series_window {
            validate_series_window(series_window)?;
            self.series_window.update(series_window, ConfigSource::File);
        }

        if let Some(seed) = file_config.seed {
            self.seed.update(Some(seed), ConfigSource::File);
        }

        if let Some(voice) = file_config.voice {
            self.voice.update(voice, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // OCEANCHAT_SERIES_WINDOW
        if let Ok(window_str) = env::var("OCEANCHAT_SERIES_WINDOW") {
            match window_str.parse::<usize>() {
                Ok(window) if validate_series_window(window).is_ok() => {
                    self.series_window.update(window, ConfigSource::Environment)
                }
                _ => tracing::warn!(
                    "Invalid OCEANCHAT_SERIES_WINDOW value '{}': expected integer >= 2",
                    window_str
                ),
            }
        }

        // OCEANCHAT_SEED
        if let Ok(seed_str) = env::var("OCEANCHAT_SEED") {
            match seed_str.parse::<u64>() {
                Ok(seed) => self.seed.update(Some(seed), ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid OCEANCHAT_SEED value '{}': expected unsigned integer",
                    seed_str
                ),
            }
        }

        // OCEANCHAT_VOICE
        if let Ok(voice_str) = env::var("OCEANCHAT_VOICE") {
            match parse_voice(&voice_str) {
                Ok(voice) => self.voice.update(voice, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid OCEANCHAT_VOICE value '{}': expected true or false",
                    voice_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(series_window) = overrides.series_window {
            self.series_window.update(series_window, ConfigSource::Cli);
        }

        if let Some(seed) = overrides.seed {
            self.seed.update(Some(seed), ConfigSource::Cli);
        }

        if let Some(voice) = overrides.voice {
            self.voice.update(voice, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "series_window".to_string(),
            (self.series_window.value.to_string(), self.series_window.source),
        );

        map.insert(
            "seed".to_string(),
            (
                self.seed.value.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
                self.seed.source,
            ),
        );

        map.insert("voice".to_string(), (self.voice.value.to_string(), self.voice.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    series_window: Option<usize>,
    seed: Option<u64>,
    voice: Option<bool>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub series_window: Option<usize>,
    pub seed: Option<u64>,
    pub voice: Option<bool>,
}

/// A series needs at least two points to draw a trend
pub fn validate_series_window(window: usize) -> Result<()> {
    if window < 2 {
        return Err(OceanChatError::ConfigInvalid {
            key: "series_window".to_string(),
            reason: format!("Invalid series window: {}. Use at least 2 points", window),
        });
    }
    Ok(())
}

/// Parse a voice flag from string
pub fn parse_voice(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(OceanChatError::ConfigInvalid {
            key: "voice".to_string(),
            reason: format!("Invalid voice flag: {}. Use true or false", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.series_window.value, 30);
        assert_eq!(config.series_window.source, ConfigSource::Default);
        assert_eq!(config.seed.value, None);
        assert!(!config.voice.value);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400); // Still CLI value
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
series_window = 12
seed = 1234
voice = true
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.series_window.value, 12);
        assert_eq!(config.series_window.source, ConfigSource::File);
        assert_eq!(config.seed.value, Some(1234));
        assert!(config.voice.value);
    }

    #[test]
    fn test_file_rejects_degenerate_window() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "series_window = 1").unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            series_window: Some(12),
            seed: Some(42),
            voice: None,
        };

        config.update_from_cli(overrides);

        assert_eq!(config.series_window.value, 12);
        assert_eq!(config.series_window.source, ConfigSource::Cli);
        assert_eq!(config.seed.value, Some(42));
        assert_eq!(config.seed.source, ConfigSource::Cli);
        // This should still be the default
        assert_eq!(config.voice.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_voice() {
        assert!(parse_voice("true").unwrap());
        assert!(parse_voice("ON").unwrap());
        assert!(!parse_voice("false").unwrap());
        assert!(!parse_voice("0").unwrap());
        assert!(parse_voice("loud").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("series_window"));
        assert!(map.contains_key("seed"));
        assert!(map.contains_key("voice"));

        let (seed_value, seed_source) = &map["seed"];
        assert_eq!(seed_value, "entropy");
        assert_eq!(*seed_source, ConfigSource::Default);
    }
}
