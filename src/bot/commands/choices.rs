//! Enumerated slash command options.
//!
//! Discord shows the `#[name]` text in the picker; each choice maps onto a price
//! table identifier or fee tier of the core.

// Variant names mirror the picker text
#![allow(missing_docs)]

use crate::core::{FastPassTier, UploadTier};

/// Necklace styles offered by `/necklace`
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum NecklaceStyle {
    #[name = "one-name (400r)"]
    OneName,
    #[name = "two-name (500r)"]
    TwoName,
    #[name = "three-name (600r)"]
    ThreeName,
    #[name = "pearl small (400r)"]
    PearlSmall,
    #[name = "pearl jumbo (500r)"]
    PearlJumbo,
    #[name = "basic necklace (100r)"]
    BasicNecklace,
    #[name = "cuban chains (500r)"]
    CubanChains,
}

impl NecklaceStyle {
    /// Price table identifier of the style
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::OneName => "one-name",
            Self::TwoName => "two-name",
            Self::ThreeName => "three-name",
            Self::PearlSmall => "pearl-small",
            Self::PearlJumbo => "pearl-jumbo",
            Self::BasicNecklace => "basic-necklace",
            Self::CubanChains => "cuban-chains",
        }
    }
}

/// Items offered by `/ugc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum UgcItem {
    #[name = "bows (150r)"]
    Bows,
    #[name = "bracelet (250r)"]
    Bracelet,
    #[name = "hair clips (100r)"]
    HairClips,
    #[name = "head sign (200r)"]
    HeadSign,
}

impl UgcItem {
    /// Price table identifier of the item
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Bows => "bows",
            Self::Bracelet => "bracelet",
            Self::HairClips => "hair-clips",
            Self::HeadSign => "head-sign",
        }
    }
}

/// Add-ons offered by `/ugc`; the engine ignores ones the item does not accept
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum UgcAddon {
    #[name = "none"]
    None,
    #[name = "add name (bows) +50r"]
    AddName,
    #[name = "add charm or name (bracelet/hair) +50r"]
    AddCharmOrName,
}

impl UgcAddon {
    /// Add-on identifier, `None` for no add-on
    #[must_use]
    pub const fn identifier(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::AddName => Some("add-name"),
            Self::AddCharmOrName => Some("add-charm-or-name"),
        }
    }
}

/// Upload options
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum UploadChoice {
    #[name = "I'll upload it myself (no fee)"]
    None,
    #[name = "Limited upload (1700r)"]
    LimitedUpload,
    #[name = "Normal upload (2500r)"]
    NormalUpload,
}

impl From<UploadChoice> for UploadTier {
    fn from(choice: UploadChoice) -> Self {
        match choice {
            UploadChoice::None => Self::None,
            UploadChoice::LimitedUpload => Self::LimitedUpload,
            UploadChoice::NormalUpload => Self::NormalUpload,
        }
    }
}

/// Fast-pass options
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum FastPassChoice {
    #[name = "No fast pass"]
    None,
    #[name = "Fast pass week (500r)"]
    Week,
    #[name = "Fast pass day (1000r)"]
    Day,
}

impl From<FastPassChoice> for FastPassTier {
    fn from(choice: FastPassChoice) -> Self {
        match choice {
            FastPassChoice::None => Self::None,
            FastPassChoice::Week => Self::Week,
            FastPassChoice::Day => Self::Day,
        }
    }
}
