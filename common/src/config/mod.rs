mod app_dir;
mod config_content_provider;
mod config_manager;
mod config_serializer;
mod validate;

pub use app_dir::{APP_DIR_NAME, app_data_dir};
pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider, MemoryContentProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, JsonConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
