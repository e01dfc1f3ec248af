//! Application configuration, loaded once at startup.

/// Environment variable overrides and the bot token
pub mod environment;

/// config.toml loading
pub mod settings;

pub use settings::{Appearance, Settings};

use crate::{
    core::{PriceTable, StaffRoles},
    errors::Result,
};
use std::sync::Arc;
use tracing::info;

/// Everything the bot needs, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Price tables shared with the engine
    pub price_table: Arc<PriceTable>,
    /// Staff role allow-list
    pub staff_roles: StaffRoles,
    /// Embed look
    pub appearance: Appearance,
    /// Guild for command registration, global when `None`
    pub guild_id: Option<u64>,
}

impl AppConfig {
    /// Builds the runtime configuration from parsed settings and the standard price list.
    ///
    /// # Errors
    /// Returns an error if the price table fails validation.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let price_table = PriceTable::standard();
        price_table.validate()?;

        Ok(Self {
            price_table: Arc::new(price_table),
            staff_roles: StaffRoles::new(settings.staff.role_ids),
            appearance: settings.appearance,
            guild_id: settings.discord.guild_id,
        })
    }
}

/// Loads config.toml (if present), applies environment overrides and builds the [`AppConfig`].
///
/// # Errors
/// Returns an error if the file or an override is malformed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = environment::config_path();
    let settings = settings::load_settings_or_default(&path)?;
    info!("Loaded settings (config file: {})", path.display());

    let settings = environment::apply_env_overrides(settings)?;
    let config = AppConfig::from_settings(settings)?;

    if config.staff_roles.is_empty() {
        tracing::warn!("Staff role allow-list is empty; nobody can use the pricing commands");
    } else {
        info!("{} staff roles configured", config.staff_roles.len());
    }

    Ok(config)
}
