//! Quote formatting - turns a [`PricingBreakdown`] into labeled fields.
//!
//! The output is plain data; the bot layer maps it onto a Discord embed.

use crate::core::{
    catalog::ItemCategory,
    money::Price,
    pricing::{FeeLine, PricingBreakdown},
};

/// One labeled line of a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteField {
    /// Field heading
    pub name: String,
    /// Field body, may contain Discord markdown
    pub value: String,
    /// Whether the field may share a row with its neighbours
    pub inline: bool,
}

impl QuoteField {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// A rendered price quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Heading of the quote
    pub title: String,
    /// Short description under the heading
    pub description: String,
    /// Ordered fields
    pub fields: Vec<QuoteField>,
}

impl Quote {
    /// Finds a field by heading.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&QuoteField> {
        self.fields.iter().find(|field| field.name == name)
    }
}

struct Headings {
    title: &'static str,
    item: &'static str,
    calc: &'static str,
    subtotal: &'static str,
    addon: &'static str,
}

const fn headings(category: ItemCategory) -> Headings {
    match category {
        ItemCategory::Necklace => Headings {
            title: "/unibun",
            item: "Style",
            calc: "Necklace calc",
            subtotal: "Necklace subtotal",
            addon: "beaded",
        },
        ItemCategory::OtherUgc => Headings {
            title: "/unibun UGC",
            item: "Item",
            calc: "UGC calc",
            subtotal: "UGC subtotal",
            addon: "add-on",
        },
    }
}

/// Formats an amount as `{r}r ≈ ${usd}`.
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("{}r ≈ ${}", price.r, price.usd)
}

fn format_fee(fee: &FeeLine) -> String {
    format!("{}\nCost: {}", fee.label, format_price(fee.cost))
}

/// Builds the calculation line, e.g. `base 500r + beaded 100r × 2`.
#[must_use]
pub fn format_calculation(breakdown: &PricingBreakdown) -> String {
    let mut calc = format!("base {}r", breakdown.unit_base.r);
    if breakdown.addon_surcharge.r > 0 {
        calc.push_str(&format!(
            " + {} {}r",
            headings(breakdown.category).addon,
            breakdown.addon_surcharge.r
        ));
    }
    calc.push_str(&format!(" × {}", breakdown.quantity));
    calc
}

/// Lays out a breakdown as an ordered list of quote fields.
///
/// The discount line only appears for a non-zero discount, and the notes line only
/// when the notes contain something other than whitespace.
#[must_use]
pub fn format_breakdown(breakdown: &PricingBreakdown) -> Quote {
    let headings = headings(breakdown.category);

    let mut fields = vec![
        QuoteField::new(headings.item, breakdown.style_label.as_str()),
        QuoteField::new(headings.calc, format_calculation(breakdown)),
        QuoteField::new(headings.subtotal, format_price(breakdown.item_subtotal)),
        QuoteField::new("Upload option", format_fee(&breakdown.upload)),
        QuoteField::new("Fast pass", format_fee(&breakdown.fast_pass)),
        QuoteField::new(
            "Subtotal (before discount)",
            format_price(breakdown.pre_discount_subtotal),
        ),
    ];

    if breakdown.discount_percent > 0 {
        fields.push(QuoteField::new(
            "Discount Applied",
            format!(
                "{}% → -{}r ≈ -${}",
                breakdown.discount_percent, breakdown.discount.r, breakdown.discount.usd
            ),
        ));
    }

    fields.push(QuoteField::new(
        "Final Total",
        format!(
            "**{}r** ≈ **${}**",
            breakdown.final_total.r, breakdown.final_total.usd
        ),
    ));

    if let Some(notes) = breakdown.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        fields.push(QuoteField::new("Notes", notes));
    }

    Quote {
        title: headings.title.to_string(),
        description: "Prices".to_string(),
        fields,
    }
}
