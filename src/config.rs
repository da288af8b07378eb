use crate::error::Error;
use crate::platform::ZONE_IDENTIFIER_SUFFIX;
use config::{Config, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_root_path")]
    pub root_path: String,
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_root_path() -> String {
    ".".to_string()
}

fn default_suffix() -> String {
    ZONE_IDENTIFIER_SUFFIX.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            suffix: default_suffix(),
        }
    }
}

impl AppConfig {
    /// Replace configured values with those given on the command line.
    pub fn with_overrides(mut self, root_path: Option<String>, suffix: Option<String>) -> Self {
        if let Some(root_path) = root_path {
            self.root_path = root_path;
        }
        if let Some(suffix) = suffix {
            self.suffix = suffix;
        }
        self
    }
}

/// Load `Config.toml` (or `Config.json`, `Config.yaml`, ...) from the working
/// directory. A missing file yields the defaults.
pub fn load_configuration() -> Result<AppConfig, Error> {
    load_configuration_from("Config")
}

pub fn load_configuration_from(name: &str) -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(name).required(false))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}
