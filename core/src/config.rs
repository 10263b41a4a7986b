//! Settings persistence
//!
//! Re-exports the shared settings types from tiertip-types and stores them
//! with confy as TOML.

use std::path::Path;

pub use tiertip_types::{
    Color, DebugSettings, FastModsAnchor, ItemLevelSettings, ItemModsSettings, TooltipSettings,
    tooltip_colors,
};

use crate::error::ConfigError;

const APP_NAME: &str = "tiertip";
const CONFIG_NAME: &str = "config";

/// Extension trait for TooltipSettings persistence
pub trait TooltipSettingsExt: Sized {
    /// Load from the user config dir, defaults when missing or unreadable
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
}

impl TooltipSettingsExt for TooltipSettings {
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Using default settings");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Ok(confy::load_path(path)?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }
}
