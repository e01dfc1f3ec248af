//! Environment variable overrides.
//!
//! Values here win over config.toml so deployments can change staff roles or the
//! registration guild without editing the file.

use crate::{
    config::settings::Settings,
    errors::{Error, Result},
};
use std::path::PathBuf;

/// Bot token variable.
pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Alternative token variable name.
pub const FALLBACK_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
/// Comma-separated staff role IDs.
pub const STAFF_ROLE_IDS_VAR: &str = "STAFF_ROLE_IDS";
/// Guild to register commands in.
pub const GUILD_ID_VAR: &str = "GUILD_ID";
/// Location of config.toml.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Reads the bot token from `DISCORD_TOKEN`, then `DISCORD_BOT_TOKEN`.
///
/// # Errors
/// Returns [`Error::EnvVar`] if neither variable is set.
pub fn discord_token() -> Result<String> {
    std::env::var(TOKEN_VAR)
        .or_else(|_| std::env::var(FALLBACK_TOKEN_VAR))
        .map_err(Error::EnvVar)
}

/// Path of the settings file, `config.toml` unless `CONFIG_PATH` is set.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR).map_or_else(|_| PathBuf::from("config.toml"), PathBuf::from)
}

/// Parses a comma-separated list of role IDs. Blank entries are skipped.
///
/// # Errors
/// Returns [`Error::Config`] naming the first entry that is not a valid ID.
pub fn parse_role_ids(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<u64>().map_err(|e| Error::Config {
                message: format!("Invalid role ID '{entry}' in {STAFF_ROLE_IDS_VAR}: {e}"),
            })
        })
        .collect()
}

/// Parses a guild ID.
///
/// # Errors
/// Returns [`Error::Config`] if the value is not a valid ID.
pub fn parse_guild_id(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|e| Error::Config {
        message: format!("Invalid guild ID '{raw}' in {GUILD_ID_VAR}: {e}"),
    })
}

/// Applies override values on top of file settings.
///
/// # Errors
/// Returns [`Error::Config`] if an override cannot be parsed.
pub fn apply_overrides(
    mut settings: Settings,
    staff_role_ids: Option<&str>,
    guild_id: Option<&str>,
) -> Result<Settings> {
    if let Some(raw) = staff_role_ids {
        settings.staff.role_ids = parse_role_ids(raw)?;
    }
    if let Some(raw) = guild_id.filter(|raw| !raw.trim().is_empty()) {
        settings.discord.guild_id = Some(parse_guild_id(raw)?);
    }
    Ok(settings)
}

/// Applies `STAFF_ROLE_IDS` and `GUILD_ID` from the process environment.
///
/// # Errors
/// Returns [`Error::Config`] if a variable is set but cannot be parsed.
pub fn apply_env_overrides(settings: Settings) -> Result<Settings> {
    let staff_role_ids = std::env::var(STAFF_ROLE_IDS_VAR).ok();
    let guild_id = std::env::var(GUILD_ID_VAR).ok();
    apply_overrides(settings, staff_role_ids.as_deref(), guild_id.as_deref())
}
