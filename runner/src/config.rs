use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_common::games::snake::SnakeSettings;

pub const CONFIG_FILE: &str = "snake_runner_config.yaml";

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: SnakeSettings,
    pub run: RunConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.run.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunConfig {
    /// Fixed seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
    pub max_ticks: u64,
    pub max_games: u32,
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_ticks == 0 {
            return Err("max_ticks must be greater than 0".to_string());
        }
        if self.max_games == 0 {
            return Err("max_games must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: SnakeSettings::default(),
            run: RunConfig {
                seed: None,
                max_ticks: 1000,
                max_games: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigSerializer, InMemoryConfigProvider};
    use snake_common::games::snake::WallCollisionMode;

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_manager_reads_yaml_overrides() {
        let mut config = Config::default();
        config.game.wall_collision_mode = WallCollisionMode::Death;
        config.run.seed = Some(99);
        let yaml = YamlConfigSerializer::new().serialize(&config).unwrap();

        let manager: ConfigManager<InMemoryConfigProvider, Config, YamlConfigSerializer> =
            ConfigManager::new(InMemoryConfigProvider::new(Some(yaml)), YamlConfigSerializer::new());
        let loaded = manager.get_config().unwrap();
        assert_eq!(loaded.game.wall_collision_mode, WallCollisionMode::Death);
        assert_eq!(loaded.run.seed, Some(99));
    }

    #[test]
    fn test_zero_ticks_is_rejected() {
        let mut config = Config::default();
        config.run.max_ticks = 0;
        assert!(config.validate().is_err());
    }
}
