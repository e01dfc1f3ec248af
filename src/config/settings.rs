//! Settings loading from config.toml
//!
//! Every section is optional. A missing file yields the built-in defaults, which
//! match the shop's production setup.

use crate::{
    core::auth::DEFAULT_STAFF_ROLE_IDS,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Pastel pink used for quote embeds.
pub const PASTEL_PINK: u32 = 0x00F8_C8DC;

const UNIBUN_THUMBNAIL_URL: &str = "https://cdn.discordapp.com/attachments/1400237180135411885/\
1438740770013184071/Untitled32_20251112212618.png?ex=6917fb42&is=6916a9c2&\
hm=36dc9c3f14106172de264786228da2ffbb134b522fc53c21b7ee9d9202dec55a";

const BANNER_IMAGE_URL: &str = "https://media.discordapp.net/attachments/1431892425034567721/\
1431892425248604210/image.png?ex=691774fd&is=6916237d&\
hm=587cbc418d82d4938b829788dcbb75bbd69892543c8c3b07301ef55b00f8318f&\
&format=webp&quality=lossless&width=1235&height=579";

/// Structure of the whole config.toml file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Who may use the pricing commands
    pub staff: StaffSettings,
    /// Look of the quote embeds
    pub appearance: Appearance,
    /// Discord registration options
    pub discord: DiscordSettings,
}

/// `[staff]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StaffSettings {
    /// Role IDs that mark a member as staff
    pub role_ids: Vec<u64>,
}

impl Default for StaffSettings {
    fn default() -> Self {
        Self {
            role_ids: DEFAULT_STAFF_ROLE_IDS.to_vec(),
        }
    }
}

/// `[appearance]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Embed side color as `0xRRGGBB`
    pub color: u32,
    /// Small image in the top right of the embed
    pub thumbnail_url: Option<String>,
    /// Large image at the bottom of the embed
    pub image_url: Option<String>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: PASTEL_PINK,
            thumbnail_url: Some(UNIBUN_THUMBNAIL_URL.to_string()),
            image_url: Some(BANNER_IMAGE_URL.to_string()),
        }
    }
}

/// `[discord]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscordSettings {
    /// Register commands in this guild only (instant updates) instead of globally
    pub guild_id: Option<u64>,
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid TOML for [`Settings`].
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    parse_settings(&contents)
}

/// Loads settings from `path`, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    if path.as_ref().exists() {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}

/// Parses settings from TOML text
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}
