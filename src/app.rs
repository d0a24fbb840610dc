// src/app.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use transfer_guard::application::{CommandExecutor, Commands};
use transfer_guard::domain::transfer::EmptinessRule;
use transfer_guard::shared::config::ConfigLoader;
use transfer_guard::shared::types::GuardConfig;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub guard: GuardConfig,
}

impl AppCfg {
    /// Start from the config file, then apply CLI overrides (CLI has higher priority)
    pub fn from_config(
        cfg: GuardConfig,
        emptiness: Option<EmptinessRule>,
        legacy_keys: bool,
    ) -> Self {
        let mut guard = cfg;

        if let Some(emptiness) = emptiness {
            guard.validation.emptiness = emptiness;
        }
        if legacy_keys {
            guard.validation.accept_legacy_keys = true;
        }

        Self { guard }
    }

    /// Load the config file when one is given, defaults otherwise
    pub fn load(
        config_path: Option<&Path>,
        emptiness: Option<EmptinessRule>,
        legacy_keys: bool,
    ) -> Result<Self> {
        let base_config = match config_path {
            Some(path) => ConfigLoader::load_config(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => GuardConfig::default(),
        };

        Ok(Self::from_config(base_config, emptiness, legacy_keys))
    }
}

/// Runs `command`; `Ok(false)` means the request was rejected.
pub async fn run(app_cfg: AppCfg, command: Commands) -> Result<bool> {
    info!(
        emptiness = %app_cfg.guard.validation.emptiness,
        legacy_keys = app_cfg.guard.validation.accept_legacy_keys,
        "Starting transfer guard"
    );

    let accepted = CommandExecutor::execute(command, app_cfg.guard).await?;
    Ok(accepted)
}
