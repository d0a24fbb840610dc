use std::fs;
use std::path::Path;
use crate::shared::types::GuardConfig;
use crate::shared::errors::AppError;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file such as `Config.toml`
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GuardConfig, AppError> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e)))?;

        Self::from_toml_str(&config_content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file {}: {}", path.display(), e)))
    }

    /// Parse configuration text; missing sections and fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<GuardConfig, toml::de::Error> {
        toml::from_str(content)
    }
}
