use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{SnakeSettings, WallCollisionMode};

    #[test]
    fn test_settings_survive_yaml() {
        let settings = SnakeSettings {
            wall_collision_mode: WallCollisionMode::Death,
            ..SnakeSettings::default()
        };
        let serializer = YamlConfigSerializer::new();
        let yaml = serializer.serialize(&settings).unwrap();
        let parsed: SnakeSettings = serializer.deserialize(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<SnakeSettings, String> = serializer.deserialize("field_width: [");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }
}
