//! Shared test utilities.
//!
//! Helpers for building engines, configs and requests with sensible defaults.

use crate::{
    config::Settings,
    core::{FastPassTier, PriceTable, PricingEngine, PricingRequest, UploadTier},
};
use std::sync::Arc;

/// An engine over the standard price list.
#[must_use]
pub fn standard_engine() -> PricingEngine {
    PricingEngine::new(Arc::new(PriceTable::standard()))
}

/// A necklace request with no fees.
#[must_use]
pub fn plain_necklace(style: &str) -> PricingRequest {
    PricingRequest::necklace(style, UploadTier::None, FastPassTier::None)
}

/// A UGC request with no fees.
#[must_use]
pub fn plain_ugc(item: &str) -> PricingRequest {
    PricingRequest::ugc(item, UploadTier::None, FastPassTier::None)
}

/// Parses settings from a TOML snippet, panicking on bad input.
#[allow(clippy::unwrap_used)]
pub fn settings_from_toml(toml_str: &str) -> Settings {
    toml::from_str(toml_str).unwrap()
}
