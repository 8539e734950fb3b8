use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config. A missing source yields
/// `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;
    use crate::games::snake::{SnakeSettings, WallCollisionMode};

    fn create_manager(
        content: Option<&str>,
    ) -> ConfigManager<InMemoryConfigProvider, SnakeSettings, YamlConfigSerializer> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_falls_back_to_default() {
        let manager = create_manager(None);
        assert_eq!(manager.get_config(), Ok(SnakeSettings::default()));
    }

    #[test]
    fn test_set_then_get_returns_stored_config() {
        let manager = create_manager(None);
        let settings = SnakeSettings {
            wall_collision_mode: WallCollisionMode::Death,
            field_width: 12,
            field_height: 12,
            ..SnakeSettings::default()
        };

        assert!(manager.set_config(&settings).is_ok());
        assert_eq!(manager.get_config(), Ok(settings));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = create_manager(None);
        let settings = SnakeSettings {
            fruit_score: 0,
            ..SnakeSettings::default()
        };

        let error = manager.set_config(&settings).unwrap_err();
        assert!(error.starts_with("Config validation error"));
    }

    #[test]
    fn test_stored_invalid_yaml_fails_validation() {
        let settings = SnakeSettings {
            field_width: 2,
            ..SnakeSettings::default()
        };
        let yaml = serde_yaml_ng::to_string(&settings).unwrap();

        let manager = create_manager(Some(&yaml));
        assert!(manager.get_config().is_err());
    }
}
