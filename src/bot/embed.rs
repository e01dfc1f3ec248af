//! Renders a [`Quote`] as a Discord embed.

use crate::{config::Appearance, core::Quote};
use poise::serenity_prelude as serenity;

/// Builds the quote embed with the configured color and images.
#[must_use]
pub fn quote_embed(quote: &Quote, appearance: &Appearance) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::default()
        .title(quote.title.as_str())
        .description(quote.description.as_str())
        .color(appearance.color)
        .fields(
            quote
                .fields
                .iter()
                .map(|field| (field.name.as_str(), field.value.as_str(), field.inline)),
        );

    if let Some(url) = appearance.thumbnail_url.as_deref() {
        embed = embed.thumbnail(url);
    }
    if let Some(url) = appearance.image_url.as_deref() {
        embed = embed.image(url);
    }
    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QuoteField;

    fn sample_quote() -> Quote {
        Quote {
            title: "/unibun".to_string(),
            description: "Prices".to_string(),
            fields: vec![QuoteField {
                name: "Final Total".to_string(),
                value: "**100r** ≈ **$1.00**".to_string(),
                inline: false,
            }],
        }
    }

    #[test]
    fn test_embed_carries_quote_and_appearance() {
        let appearance = Appearance {
            color: 0x00AB_CDEF,
            thumbnail_url: Some("https://example.com/t.png".to_string()),
            image_url: None,
        };

        let rendered = format!("{:?}", quote_embed(&sample_quote(), &appearance));

        assert!(rendered.contains("\"/unibun\""));
        assert!(rendered.contains("\"Prices\""));
        assert!(rendered.contains("Final Total"));
        assert!(rendered.contains("**100r** ≈ **$1.00**"));
        assert!(rendered.contains("https://example.com/t.png"));
        assert!(rendered.contains(&0x00AB_CDEF_u32.to_string()));
    }

    #[test]
    fn test_default_appearance_adds_both_images() {
        let appearance = Appearance::default();
        let rendered = format!("{:?}", quote_embed(&sample_quote(), &appearance));
        assert!(rendered.contains("Untitled32_20251112212618.png"));
        assert!(rendered.contains("1431892425248604210/image.png"));
    }
}
