//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the pricing core into poise: shared bot data, slash commands,
//! the staff gate, embed rendering and framework startup.

/// Staff gate for the pricing commands
pub mod access;
/// Discord command implementations (pricing, general)
pub mod commands;
/// Quote to embed rendering
pub mod embed;

use crate::{
    config::{AppConfig, Appearance},
    core::{PricingEngine, StaffRoles},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
/// Everything in here is read-only after startup.
#[derive(Debug)]
pub struct BotData {
    /// Pricing engine over the shared price table
    pub engine: PricingEngine,
    /// Staff role allow-list
    pub staff_roles: StaffRoles,
    /// Embed look
    pub appearance: Appearance,
}

impl BotData {
    /// Creates a new `BotData` from the loaded configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine: PricingEngine::new(Arc::clone(&config.price_table)),
            staff_roles: config.staff_roles.clone(),
            appearance: config.appearance.clone(),
        }
    }
}

/// Poise context used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {error:?}");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            let reply = poise::CreateReply::default()
                .content(format!("An error occurred: {error}"))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                error!("Failed to send error message: {e}");
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {e}");
            }
        }
    }
}

/// All commands the bot registers.
#[must_use]
pub fn commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::necklace(),
        commands::ugc(),
        commands::ping(),
        commands::help(),
    ]
}

/// Connects to Discord, registers the slash commands and runs until the client stops.
///
/// # Errors
/// Returns an error if the client cannot be built or the gateway connection fails.
#[instrument(skip(token, config))]
pub async fn run_bot(token: String, config: AppConfig) -> Result<()> {
    let data = BotData::new(&config);
    let guild_id = config.guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild_id) = guild_id {
                    let guild_id = serenity::GuildId::new(guild_id);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id)
                        .await?;
                    info!("Registered commands in guild {guild_id}");
                } else {
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                    info!("Registered commands globally");
                }
                Ok(data)
            })
        })
        .build();

    // Slash commands only; no message content needed
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {e:?}"))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {e:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_pricing_and_utility_commands() {
        let names: Vec<String> = commands().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["necklace", "ugc", "ping", "help"]);
    }

    #[test]
    fn test_bot_data_shares_config_table() {
        let config = AppConfig::from_settings(crate::config::Settings::default());
        let Ok(config) = config else {
            panic!("default settings should build");
        };
        let data = BotData::new(&config);
        assert_eq!(data.engine.table(), &*config.price_table);
        assert_eq!(data.staff_roles, config.staff_roles);
    }
}
