use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub struct YamlConfigSerializer;

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

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
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize YAML: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize YAML: {}", e))
    }
}

/// Pretty-printed JSON, tolerant of unknown keys on read.
pub struct JsonConfigSerializer;

impl Default for JsonConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for JsonConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_json::to_string_pretty(config).map_err(|e| format!("Failed to serialize JSON: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to deserialize JSON: {}", e))
    }
}
