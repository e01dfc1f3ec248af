//! Core business logic - framework-agnostic pricing, authorization and formatting.
//!
//! Nothing in here talks to Discord. The bot layer resolves user input into a
//! [`pricing::PricingRequest`], checks [`auth::StaffRoles`], prices the request and
//! renders the [`format::Quote`].

/// Staff role allow-list
pub mod auth;
/// Price tables for styles, items and fee tiers
pub mod catalog;
/// Breakdown to quote formatting
pub mod format;
/// R and USD amounts
pub mod money;
/// The pricing engine
pub mod pricing;

pub use auth::StaffRoles;
pub use catalog::{FastPassTier, ItemCategory, PriceTable, UploadTier};
pub use format::{Quote, QuoteField, format_breakdown};
pub use pricing::{PricingBreakdown, PricingEngine, PricingRequest};
