use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unibun_pricing::{bot, config, errors::Result};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load configuration: config.toml, env overrides, price tables
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!("Successfully processed application configuration.");

    // 4. Run the bot; the token is read here, not stored in AppConfig
    let token = config::environment::discord_token()
        .inspect_err(|e| error!("DISCORD_TOKEN not found: {e}"))?;

    bot::run_bot(token, app_config).await
}
