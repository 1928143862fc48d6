use crate::errors::{ PortalError, PortalResult };
use crate::libs::avatar::{ UserImageOptions, UserImageSize };
use crate::state::paths;
use crate::utils::data;
use crate::utils::time::Locale;
use crate::{ always_eprint, debug_print };
use chrono::{ DateTime, Utc };
use serde::{ Deserialize, Serialize };
use std::io::ErrorKind;
use std::path::Path;

/// Profile shown by the showcase window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar: UserImageOptions,
    /// Date-like string, see `utils::time::parse_date`
    pub last_modified: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: Some("Brion Silva".to_string()),
            email: None,
            avatar: UserImageOptions {
                avatar: true,
                size: UserImageSize::Tiny,
                ..Default::default()
            },
            last_modified: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    // Metadata
    pub version: String,
    pub last_updated: DateTime<Utc>,
    // UI settings
    pub locale: Locale,
    pub profile: ProfileConfig,
    // System settings
    pub debug_logging: bool,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::load_from(&paths::data::config_json())
    }

    /// Loads config from `path` without any fallback
    pub fn try_load_from(path: &Path) -> PortalResult<Self> {
        data::load_json_from_file::<AppConfig>(path)
    }

    /// Loads config from `path`, falling back to defaults.
    /// Defaults are only written when the file does not exist; an unreadable
    /// or invalid file is left untouched so user edits are never lost.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => {
                debug_print!("📄 Loaded config from {}", path.display());
                config
            }
            Err(PortalError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug_print!("📄 No config at {}, writing defaults", path.display());
                let default_config = Self::default();
                if let Err(e) = default_config.save_to(path) {
                    always_eprint!("Warning: Could not write default config: {}", e);
                }
                default_config
            }
            Err(e) => {
                always_eprint!("Warning: Failed to load config file: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> PortalResult<()> {
        self.save_to(&paths::data::config_json())
    }

    pub fn save_to(&self, path: &Path) -> PortalResult<()> {
        data::save_json_to_file(self, path)
    }

    /// Avatar options with the profile name filled in when the avatar has none
    pub fn avatar_options(&self) -> UserImageOptions {
        let mut options = self.profile.avatar.clone();
        if options.name.is_none() {
            options.name = self.profile.display_name.clone();
        }
        options
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: crate::utils::constants::APP_VERSION.to_string(),
            last_updated: Utc::now(),
            locale: Locale::En,
            profile: ProfileConfig::default(),
            debug_logging: false,
        }
    }
}
