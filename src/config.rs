use std::path::Path;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use crate::console::DisplayConfig;
use crate::error::ConfigError;

/// Logging settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace".
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.level).map_err(|_| {
            ConfigError::Validation(format!(
                "logging.level '{}' is not one of off, error, warn, info, debug, trace",
                self.level
            ))
        })
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        for (name, glyph) in [
            ("display.red_glyph", &display.red_glyph),
            ("display.yellow_glyph", &display.yellow_glyph),
            ("display.empty_glyph", &display.empty_glyph),
        ] {
            if glyph.chars().count() != 1 {
                return Err(ConfigError::Validation(format!(
                    "{name} must be exactly one character"
                )));
            }
        }
        if display.empty_glyph == display.red_glyph || display.empty_glyph == display.yellow_glyph
        {
            return Err(ConfigError::Validation(
                "display.empty_glyph must differ from the piece glyphs".into(),
            ));
        }
        // Without color the glyph is all that tells the players apart
        if !display.color && display.red_glyph == display.yellow_glyph {
            return Err(ConfigError::Validation(
                "display.red_glyph and display.yellow_glyph must differ when display.color is false"
                    .into(),
            ));
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
