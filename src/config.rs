// Static application configuration
//
// Built once at start-up and passed explicitly to whoever needs it. Defaults
// are the values the game ships with; a TOML file may override any field.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Native library holding the game engine
pub const DEFAULT_LIBRARY_NAME: &str = "BulletTime";

/// Advertising unit the release build serves
pub const DEFAULT_AD_UNIT_ID: &str = "ca-app-pub-1474300545363558/7866251820";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Game language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    De,
    Es,
    It,
    Pt,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::It,
        Language::Pt,
    ];

    /// Numeric code understood by the native engine
    pub fn code(&self) -> u8 {
        match self {
            Language::En => 0,
            Language::Fr => 1,
            Language::De => 2,
            Language::Es => 3,
            Language::It => 4,
            Language::Pt => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

/// Android permissions the game declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permissions {
    pub camera: bool,
    pub microphone: bool,
    /// Also covers network state access
    pub internet: bool,
    pub storage: bool,
    pub bluetooth: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        Self {
            camera: true,
            microphone: true,
            internet: true,
            storage: true,
            bluetooth: false,
        }
    }
}

impl Permissions {
    /// Manifest permission names implied by the enabled flags
    pub fn android_permissions(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.camera {
            names.push("android.permission.CAMERA");
        }
        if self.microphone {
            names.push("android.permission.RECORD_AUDIO");
        }
        if self.internet {
            names.push("android.permission.INTERNET");
            names.push("android.permission.ACCESS_NETWORK_STATE");
        }
        if self.storage {
            names.push("android.permission.WRITE_EXTERNAL_STORAGE");
        }
        if self.bluetooth {
            names.push("android.permission.BLUETOOTH");
            names.push("android.permission.BLUETOOTH_ADMIN");
        }
        names
    }
}

/// Font rendering mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Upload the font atlas as luminance instead of RGBA
    pub grayscale: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdConfig {
    /// Serve ads at all. Paid and demo builds ship without advertising.
    pub enabled: bool,
    /// Full-screen interstitial instead of a banner view
    pub interstitial: bool,
    /// Request test ads. Must be off in release builds.
    pub test_mode: bool,
    pub unit_id: String,
}

impl Default for AdConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interstitial: false,
            test_mode: false,
            unit_id: DEFAULT_AD_UNIT_ID.to_string(),
        }
    }
}

/// Optional Facebook profile fields requested at login
///
/// Name and gender are always requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub facebook_birthday: bool,
    pub facebook_location: bool,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            facebook_birthday: true,
            facebook_location: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub library_name: String,
    pub language: Language,
    pub permissions: Permissions,
    pub font: FontConfig,
    pub advertising: AdConfig,
    pub social: SocialConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            language: Language::default(),
            permissions: Permissions::default(),
            font: FontConfig::default(),
            advertising: AdConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Saves configuration to a TOML file, creating the parent directory
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
