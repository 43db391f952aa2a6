//! Configuration loading and typed config structures.
//!
//! The optional configuration file is `tamagotchi.yaml`. Every section and
//! every field has a default, so an empty or partial file is valid and the
//! game runs with no file at all.
//!
//! ```yaml
//! pet:
//!   stage_duration_secs: 30
//!   decay_interval_secs: 5
//! logging:
//!   level: debug
//! session:
//!   default_species: Cat
//!   default_name: Tom
//! ```

use std::path::Path;

use serde::Deserialize;
use tamagotchi_pet::PetConfig;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tamagotchi.yaml";

/// Environment variable overriding [`SessionConfig::default_species`].
pub const SPECIES_ENV: &str = "TAMAGOTCHI_SPECIES";

/// Environment variable overriding [`SessionConfig::default_name`].
pub const NAME_ENV: &str = "TAMAGOTCHI_NAME";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Rule constants for the pet.
    #[serde(default)]
    pub pet: PetConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fallbacks for the driver's start-up prompts.
    #[serde(default)]
    pub session: SessionConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override session values:
    /// - `TAMAGOTCHI_SPECIES` overrides `session.default_species`
    /// - `TAMAGOTCHI_NAME` overrides `session.default_name`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.session.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter used when `RUST_LOG` is unset
    /// (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Values the driver falls back to when the player gives none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Species used when the player enters nothing.
    #[serde(default = "default_species")]
    pub default_species: String,

    /// Name used when the player enters nothing.
    #[serde(default = "default_name")]
    pub default_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_species: default_species(),
            default_name: default_name(),
        }
    }
}

impl SessionConfig {
    /// Replace defaults with values from `lookup` (normally the process
    /// environment). Blank values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(species) = lookup(SPECIES_ENV).filter(|v| !v.trim().is_empty()) {
            self.default_species = species;
        }
        if let Some(name) = lookup(NAME_ENV).filter(|v| !v.trim().is_empty()) {
            self.default_name = name;
        }
    }
}

fn default_log_level() -> String {
    "warn".to_owned()
}

fn default_species() -> String {
    "Dog".to_owned()
}

fn default_name() -> String {
    "Pet".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.pet, PetConfig::default());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.session.default_species, "Dog");
        assert_eq!(config.session.default_name, "Pet");
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
pet:
  eat_hunger_relief: 15
  eat_happiness_gain: 4
  eat_weight_gain: 3
  sleep_happiness_gain: 6
  play_happiness_gain: 12
  exercise_hunger_cost: 6
  exercise_training_gain: 7
  exercise_happiness_gain: 2
  exercise_weight_loss: 2
  clean_sickness_relief: 25
  decay_interval_secs: 5
  decay_hunger: 3
  decay_happiness: 4
  decay_sickness: 2
  decay_training: 1
  stage_duration_secs: 30
  senior_lifespan_secs: 90
  initial_hunger: 40
  initial_happiness: 60
  initial_sickness: 5
  initial_training: 10
  initial_weight: 2

logging:
  level: "debug"

session:
  default_species: "Cat"
  default_name: "Tom"
"#;

        let config = GameConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.pet.eat_hunger_relief, 15);
        assert_eq!(config.pet.stage_duration_secs, 30);
        assert_eq!(config.pet.senior_lifespan_secs, 90);
        assert_eq!(config.pet.initial_weight, 2);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.session.default_species, "Cat");
        assert_eq!(config.session.default_name, "Tom");
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "pet:\n  decay_interval_secs: 3\n";
        let config = GameConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_default();

        // Interval is overridden
        assert_eq!(config.pet.decay_interval_secs, 3);
        // Everything else uses defaults
        assert_eq!(config.pet.stage_duration_secs, 60);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.session.default_species, "Dog");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = GameConfig::parse("");
        assert!(config.is_ok());
        assert_eq!(config.ok(), Some(GameConfig::default()));
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let config = GameConfig::parse("pet:\n  decay_interval_secs: soon\n");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/definitely/not/here/tamagotchi.yaml");
        assert!(matches!(
            GameConfig::from_file(path),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn overrides_replace_non_blank_values() {
        let mut session = SessionConfig::default();
        session.apply_overrides(|key| match key {
            SPECIES_ENV => Some(String::from("Cat")),
            NAME_ENV => Some(String::from("  ")),
            _ => None,
        });
        assert_eq!(session.default_species, "Cat");
        assert_eq!(session.default_name, "Pet");
    }
}
