//! General Discord commands - ping and help.
//! These need no staff role and touch none of the pricing state.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Summary shown by `/help`.
    pub const HELP_TEXT: &str = "**Unibun Pricing Help**\n\
        Price calculators for staff. Quotes are posted in the channel.\n\n\
        **Pricing Commands** (staff only)\n\
        • `/necklace <style> <upload> <fast_pass> [beaded] [quantity] [discount] [notes]` - Prices a necklace.\n\
        • `/ugc <item> <addon> <upload> <fast_pass> [quantity] [discount] [notes]` - Prices bows, bracelets, hair clips or head signs.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        Quantity is 1-10, discount is 0-100%. Upload and fast pass fees are charged once per order.";

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(HELP_TEXT).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        for command in ["/necklace", "/ugc", "/ping", "/help"] {
            assert!(HELP_TEXT.contains(command), "help is missing {command}");
        }
    }
}
