//! Pricing Discord commands - `necklace` and `ugc`.
//!
//! Both commands are staff-only. They translate the picked options into a
//! pricing request, run it through the engine and reply with a public embed.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData, access,
            commands::choices::{FastPassChoice, NecklaceStyle, UgcAddon, UgcItem, UploadChoice},
            embed,
        },
        core::{PricingBreakdown, PricingRequest, format_breakdown, pricing::MIN_QUANTITY},
        errors::{Error, Result},
    };
    use tracing::info;

    /// Necklace price calculator (upload + fast pass + discount)
    ///
    /// Prices a necklace style with optional beading, an upload option, a fast pass
    /// and a percentage discount.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command)]
    pub async fn necklace(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Choose necklace style"] style: NecklaceStyle,
        #[description = "Upload option"] upload: UploadChoice,
        #[description = "Fast pass option"] fast_pass: FastPassChoice,
        #[description = "Add beaded +100r (name necklaces only)"] beaded: Option<bool>,
        #[description = "How many?"]
        #[min = 1]
        #[max = 10]
        quantity: Option<u32>,
        #[description = "Discount % (0–100)"]
        #[min = 0]
        #[max = 100]
        discount: Option<u32>,
        #[description = "Optional notes (for you only)"]
        #[max_length = 1024]
        notes: Option<String>,
    ) -> Result<()> {
        if !access::ensure_staff(ctx).await? {
            return Ok(());
        }

        let request = PricingRequest::necklace(style.identifier(), upload.into(), fast_pass.into())
            .beaded(beaded.unwrap_or(false))
            .quantity(quantity.unwrap_or(MIN_QUANTITY))
            .discount(discount.unwrap_or(0))
            .notes(notes);

        let breakdown = ctx.data().engine.price_necklace(&request)?;
        send_quote(ctx, &breakdown).await
    }

    /// UGC price calculator (bows, bracelets, hair clips, head signs)
    ///
    /// Prices a UGC item with an optional add-on, an upload option, a fast pass and
    /// a percentage discount. Add-ons the item does not offer are ignored.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command)]
    pub async fn ugc(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Choose the UGC item"] item: UgcItem,
        #[description = "Add-on (if allowed)"] addon: UgcAddon,
        #[description = "Upload option"] upload: UploadChoice,
        #[description = "Fast pass"] fast_pass: FastPassChoice,
        #[description = "How many?"]
        #[min = 1]
        #[max = 10]
        quantity: Option<u32>,
        #[description = "Discount % (0–100)"]
        #[min = 0]
        #[max = 100]
        discount: Option<u32>,
        #[description = "Optional notes"]
        #[max_length = 1024]
        notes: Option<String>,
    ) -> Result<()> {
        if !access::ensure_staff(ctx).await? {
            return Ok(());
        }

        let request = PricingRequest::ugc(item.identifier(), upload.into(), fast_pass.into())
            .addon(addon.identifier())
            .quantity(quantity.unwrap_or(MIN_QUANTITY))
            .discount(discount.unwrap_or(0))
            .notes(notes);

        let breakdown = ctx.data().engine.price_ugc(&request)?;
        send_quote(ctx, &breakdown).await
    }

    async fn send_quote(
        ctx: poise::Context<'_, BotData, Error>,
        breakdown: &PricingBreakdown,
    ) -> Result<()> {
        info!(
            command = %ctx.command().name,
            user = %ctx.author().name,
            style = %breakdown.style_label,
            quantity = breakdown.quantity,
            final_r = breakdown.final_total.r,
            "Sending quote"
        );

        let quote = format_breakdown(breakdown);
        let quote_embed = embed::quote_embed(&quote, &ctx.data().appearance);
        ctx.send(poise::CreateReply::default().embed(quote_embed))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
