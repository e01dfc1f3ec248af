//! Price tables - necklace styles, UGC items, upload tiers and fast-pass tiers.
//!
//! The table is built once at startup and shared read-only with the pricing
//! engine. Every lookup is by identifier and fails with
//! [`Error::InvalidSelection`] when the identifier is not present.

use crate::{
    core::money::{Price, Usd},
    errors::{Error, Result},
};
use std::collections::BTreeMap;

/// The two families of goods that can be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    /// Name, pearl, basic and cuban necklaces
    Necklace,
    /// Bows, bracelets, hair clips and head signs
    OtherUgc,
}

impl ItemCategory {
    /// Name of the backing table, used in error messages and logs.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Necklace => "necklace",
            Self::OtherUgc => "ugc",
        }
    }
}

/// Upload fee options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadTier {
    /// Customer uploads the item themselves
    #[default]
    None,
    /// Limited upload
    LimitedUpload,
    /// Normal upload
    NormalUpload,
}

impl UploadTier {
    /// Identifier used as the table key.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::LimitedUpload => "limited-upload",
            Self::NormalUpload => "normal-upload",
        }
    }

    /// Every tier, in display order.
    pub const ALL: [Self; 3] = [Self::None, Self::LimitedUpload, Self::NormalUpload];
}

/// Fast-pass fee options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FastPassTier {
    /// Regular delivery
    #[default]
    None,
    /// Delivery within a week
    Week,
    /// Delivery within a day
    Day,
}

impl FastPassTier {
    /// Identifier used as the table key.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Week => "fast-pass-week",
            Self::Day => "fast-pass-day",
        }
    }

    /// Every tier, in display order.
    pub const ALL: [Self; 3] = [Self::None, Self::Week, Self::Day];
}

/// A priced style or item together with the add-ons it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    /// Stable identifier, e.g. `two-name`
    pub identifier: String,
    /// Display name, e.g. `two-name (500r)`
    pub label: String,
    /// Unit cost in R
    pub base_cost_r: u64,
    /// Add-on identifier to surcharge in R
    pub addons: BTreeMap<String, u64>,
}

impl StyleDefinition {
    fn new(identifier: &str, label: &str, base_cost_r: u64) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: label.to_string(),
            base_cost_r,
            addons: BTreeMap::new(),
        }
    }

    fn with_addon(mut self, addon: &str, surcharge_r: u64) -> Self {
        self.addons.insert(addon.to_string(), surcharge_r);
        self
    }

    /// Surcharge for `addon`, or `None` if this style does not accept it.
    #[must_use]
    pub fn addon_surcharge(&self, addon: &str) -> Option<u64> {
        self.addons.get(addon).copied()
    }
}

/// A flat fee whose USD value is tabulated separately from its R cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeDefinition {
    /// Stable identifier, e.g. `limited-upload`
    pub identifier: String,
    /// Display name, e.g. `Limited upload (1700r)`
    pub label: String,
    /// Cost in R
    pub cost_r: u64,
    /// Cost in USD, not derived from `cost_r`
    pub cost_usd: Usd,
}

impl FeeDefinition {
    fn new(identifier: &str, label: &str, cost_r: u64, cost_usd: u64) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: label.to_string(),
            cost_r,
            cost_usd: Usd::from_dollars(cost_usd),
        }
    }

    /// The fee as a [`Price`] carrying its tabulated USD value.
    #[must_use]
    pub const fn price(&self) -> Price {
        Price::tabulated(self.cost_r, self.cost_usd)
    }
}

/// Addon identifier for the beaded necklace option.
pub const BEADED_ADDON: &str = "beaded";

/// All price tables used by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceTable {
    necklaces: BTreeMap<String, StyleDefinition>,
    ugc_items: BTreeMap<String, StyleDefinition>,
    uploads: BTreeMap<String, FeeDefinition>,
    fast_passes: BTreeMap<String, FeeDefinition>,
}

fn keyed<T, F>(entries: Vec<T>, key: F) -> BTreeMap<String, T>
where
    F: Fn(&T) -> &str,
{
    entries
        .into_iter()
        .map(|entry| (key(&entry).to_string(), entry))
        .collect()
}

impl PriceTable {
    /// Builds a table from explicit entries.
    #[must_use]
    pub fn new(
        necklaces: Vec<StyleDefinition>,
        ugc_items: Vec<StyleDefinition>,
        uploads: Vec<FeeDefinition>,
        fast_passes: Vec<FeeDefinition>,
    ) -> Self {
        Self {
            necklaces: keyed(necklaces, |s| s.identifier.as_str()),
            ugc_items: keyed(ugc_items, |s| s.identifier.as_str()),
            uploads: keyed(uploads, |f| f.identifier.as_str()),
            fast_passes: keyed(fast_passes, |f| f.identifier.as_str()),
        }
    }

    /// The shop's current price list.
    #[must_use]
    pub fn standard() -> Self {
        let necklaces = vec![
            StyleDefinition::new("one-name", "one-name (400r)", 400).with_addon(BEADED_ADDON, 100),
            StyleDefinition::new("two-name", "two-name (500r)", 500).with_addon(BEADED_ADDON, 100),
            StyleDefinition::new("three-name", "three-name (600r)", 600)
                .with_addon(BEADED_ADDON, 100),
            StyleDefinition::new("pearl-small", "pearl small (400r)", 400),
            StyleDefinition::new("pearl-jumbo", "pearl jumbo (500r)", 500),
            StyleDefinition::new("basic-necklace", "basic necklace (100r)", 100),
            StyleDefinition::new("cuban-chains", "cuban chains (500r)", 500),
        ];

        let ugc_items = vec![
            StyleDefinition::new("bows", "bows (150r)", 150).with_addon("add-name", 50),
            StyleDefinition::new("bracelet", "bracelet (250r)", 250)
                .with_addon("add-charm-or-name", 50),
            StyleDefinition::new("hair-clips", "hair clips (100r)", 100)
                .with_addon("add-charm-or-name", 50),
            StyleDefinition::new("head-sign", "head sign (200r)", 200),
        ];

        let uploads = vec![
            FeeDefinition::new("none", "I'll upload it myself (no fee)", 0, 0),
            FeeDefinition::new("limited-upload", "Limited upload (1700r)", 1700, 12),
            FeeDefinition::new("normal-upload", "Normal upload (2500r)", 2500, 18),
        ];

        let fast_passes = vec![
            FeeDefinition::new("none", "No fast pass", 0, 0),
            FeeDefinition::new("fast-pass-week", "Fast pass week (500r)", 500, 5),
            FeeDefinition::new("fast-pass-day", "Fast pass day (1000r)", 1000, 10),
        ];

        Self::new(necklaces, ugc_items, uploads, fast_passes)
    }

    /// Looks up a necklace style or UGC item by identifier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSelection`] if the identifier is not in the category's table.
    pub fn style(&self, category: ItemCategory, identifier: &str) -> Result<&StyleDefinition> {
        let table = match category {
            ItemCategory::Necklace => &self.necklaces,
            ItemCategory::OtherUgc => &self.ugc_items,
        };
        table.get(identifier).ok_or_else(|| Error::InvalidSelection {
            table: category.table_name(),
            identifier: identifier.to_string(),
        })
    }

    /// Looks up the fee for an upload tier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSelection`] if the tier has no entry.
    pub fn upload(&self, tier: UploadTier) -> Result<&FeeDefinition> {
        lookup_fee(&self.uploads, "upload", tier.identifier())
    }

    /// Looks up the fee for a fast-pass tier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSelection`] if the tier has no entry.
    pub fn fast_pass(&self, tier: FastPassTier) -> Result<&FeeDefinition> {
        lookup_fee(&self.fast_passes, "fast pass", tier.identifier())
    }

    /// Styles of a category in identifier order.
    pub fn styles(&self, category: ItemCategory) -> impl Iterator<Item = &StyleDefinition> {
        match category {
            ItemCategory::Necklace => self.necklaces.values(),
            ItemCategory::OtherUgc => self.ugc_items.values(),
        }
    }

    /// Checks that every fee tier has an entry and every category has at least one style.
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first gap found.
    pub fn validate(&self) -> Result<()> {
        for tier in UploadTier::ALL {
            self.upload(tier).map_err(|e| Error::Config {
                message: e.to_string(),
            })?;
        }
        for tier in FastPassTier::ALL {
            self.fast_pass(tier).map_err(|e| Error::Config {
                message: e.to_string(),
            })?;
        }
        for category in [ItemCategory::Necklace, ItemCategory::OtherUgc] {
            if self.styles(category).next().is_none() {
                return Err(Error::Config {
                    message: format!("The {} table has no entries", category.table_name()),
                });
            }
        }
        Ok(())
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn lookup_fee<'a>(
    table: &'a BTreeMap<String, FeeDefinition>,
    table_name: &'static str,
    identifier: &str,
) -> Result<&'a FeeDefinition> {
    table.get(identifier).ok_or_else(|| Error::InvalidSelection {
        table: table_name,
        identifier: identifier.to_string(),
    })
}
