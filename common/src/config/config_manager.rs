use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Typed settings backed by a content provider. The first successful read is
/// cached; a missing source yields `TConfig::default()` without caching it.
pub struct ConfigManager<TContentProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
    cached: Mutex<Option<TConfig>>,
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

impl<TContentProvider, TConfig, TSerializer> ConfigManager<TContentProvider, TConfig, TSerializer>
where
    TContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.lock_cache()?;
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        Self::check(&config)?;
        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        Self::check(config)?;
        let content = self.serializer.serialize(config)?;
        self.content_provider.set_config_content(&content)?;
        *self.lock_cache()? = Some(config.clone());
        Ok(())
    }

    fn check(config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.cached
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }
}
