//! Pricing engine - turns a request into a full cost breakdown.
//!
//! Necklaces and UGC items share one algorithm:
//! 1. resolve the unit cost of the style,
//! 2. add the style's surcharge for the requested add-on (unknown add-ons are ignored),
//! 3. multiply by quantity,
//! 4. add the upload and fast-pass fees once,
//! 5. apply the percentage discount, rounding half-up to a whole R.
//!
//! Item amounts convert to USD at the nominal rate. Upload and fast-pass fees keep
//! the USD values tabulated in the price table.

use crate::{
    core::{
        catalog::{BEADED_ADDON, FastPassTier, ItemCategory, PriceTable, UploadTier},
        money::Price,
    },
    errors::{Error, Result},
};
use std::sync::Arc;
use tracing::debug;

/// Smallest quantity that can be priced.
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity that can be priced.
pub const MAX_QUANTITY: u32 = 10;
/// Largest discount percentage.
pub const MAX_DISCOUNT_PERCENT: u32 = 100;

/// Everything needed to price one order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRequest {
    /// Which table `style_id` refers to
    pub category: ItemCategory,
    /// Style or item identifier
    pub style_id: String,
    /// Requested add-on identifier, if any
    pub addon: Option<String>,
    /// Number of items, 1 to 10
    pub quantity: u32,
    /// Upload fee tier
    pub upload: UploadTier,
    /// Fast-pass fee tier
    pub fast_pass: FastPassTier,
    /// Discount in percent, 0 to 100
    pub discount_percent: u32,
    /// Free-text notes echoed back in the response
    pub notes: Option<String>,
}

impl PricingRequest {
    /// A necklace request with quantity 1, no beading and no discount.
    #[must_use]
    pub fn necklace(style_id: &str, upload: UploadTier, fast_pass: FastPassTier) -> Self {
        Self::new(ItemCategory::Necklace, style_id, upload, fast_pass)
    }

    /// A UGC request with quantity 1, no add-on and no discount.
    #[must_use]
    pub fn ugc(item_id: &str, upload: UploadTier, fast_pass: FastPassTier) -> Self {
        Self::new(ItemCategory::OtherUgc, item_id, upload, fast_pass)
    }

    fn new(
        category: ItemCategory,
        style_id: &str,
        upload: UploadTier,
        fast_pass: FastPassTier,
    ) -> Self {
        Self {
            category,
            style_id: style_id.to_string(),
            addon: None,
            quantity: MIN_QUANTITY,
            upload,
            fast_pass,
            discount_percent: 0,
            notes: None,
        }
    }

    /// Requests (or clears) the beaded add-on.
    #[must_use]
    pub fn beaded(mut self, beaded: bool) -> Self {
        self.addon = beaded.then(|| BEADED_ADDON.to_string());
        self
    }

    /// Requests an add-on by identifier.
    #[must_use]
    pub fn addon(mut self, addon: Option<&str>) -> Self {
        self.addon = addon.map(str::to_string);
        self
    }

    /// Sets the quantity.
    #[must_use]
    pub const fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the discount percentage.
    #[must_use]
    pub const fn discount(mut self, discount_percent: u32) -> Self {
        self.discount_percent = discount_percent;
        self
    }

    /// Attaches notes.
    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

/// A fee line with the option's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeLine {
    /// Display name of the chosen option
    pub label: String,
    /// Fee with its tabulated USD value
    pub cost: Price,
}

/// The priced result of a [`PricingRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingBreakdown {
    /// Category that was priced
    pub category: ItemCategory,
    /// Display name of the style or item
    pub style_label: String,
    /// Add-on that was actually applied
    pub applied_addon: Option<String>,
    /// Number of items
    pub quantity: u32,
    /// Unit cost of one item
    pub unit_base: Price,
    /// Add-on surcharge per item, zero when no add-on applied
    pub addon_surcharge: Price,
    /// `(unit_base + addon_surcharge) * quantity`
    pub item_subtotal: Price,
    /// Upload fee
    pub upload: FeeLine,
    /// Fast-pass fee
    pub fast_pass: FeeLine,
    /// Item subtotal plus both fees
    pub pre_discount_subtotal: Price,
    /// Discount in percent
    pub discount_percent: u32,
    /// Amount taken off by the discount
    pub discount: Price,
    /// Amount due
    pub final_total: Price,
    /// Notes from the request
    pub notes: Option<String>,
}

/// Prices requests against an immutable [`PriceTable`].
#[derive(Debug, Clone)]
pub struct PricingEngine {
    table: Arc<PriceTable>,
}

impl PricingEngine {
    /// Creates an engine over a shared table.
    #[must_use]
    pub const fn new(table: Arc<PriceTable>) -> Self {
        Self { table }
    }

    /// The table this engine prices against.
    #[must_use]
    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Prices a necklace request.
    ///
    /// # Errors
    /// - [`Error::InvalidSelection`] if the request is not a necklace request or the style is unknown
    /// - [`Error::OutOfRange`] if quantity or discount is outside its bounds
    pub fn price_necklace(&self, request: &PricingRequest) -> Result<PricingBreakdown> {
        self.price(ItemCategory::Necklace, request)
    }

    /// Prices a UGC item request.
    ///
    /// # Errors
    /// - [`Error::InvalidSelection`] if the request is not a UGC request or the item is unknown
    /// - [`Error::OutOfRange`] if quantity or discount is outside its bounds
    pub fn price_ugc(&self, request: &PricingRequest) -> Result<PricingBreakdown> {
        self.price(ItemCategory::OtherUgc, request)
    }

    fn price(&self, category: ItemCategory, request: &PricingRequest) -> Result<PricingBreakdown> {
        if request.category != category {
            return Err(Error::InvalidSelection {
                table: category.table_name(),
                identifier: request.style_id.clone(),
            });
        }
        validate_bounds(request)?;

        let style = self.table.style(category, &request.style_id)?;
        let upload = self.table.upload(request.upload)?;
        let fast_pass = self.table.fast_pass(request.fast_pass)?;

        // Add-ons the style does not list are dropped without error
        let (applied_addon, surcharge_r) = request
            .addon
            .as_deref()
            .and_then(|addon| {
                style
                    .addon_surcharge(addon)
                    .map(|surcharge| (Some(addon.to_string()), surcharge))
            })
            .unwrap_or((None, 0));

        let item_subtotal_r = (style.base_cost_r + surcharge_r) * u64::from(request.quantity);
        let pre_discount_r = item_subtotal_r + upload.cost_r + fast_pass.cost_r;
        let final_r = apply_discount(pre_discount_r, request.discount_percent);
        let discount_r = pre_discount_r - final_r;

        debug!(
            category = category.table_name(),
            style = %style.identifier,
            surcharge_r,
            item_subtotal_r,
            pre_discount_r,
            final_r,
            "Priced request"
        );

        Ok(PricingBreakdown {
            category,
            style_label: style.label.clone(),
            applied_addon,
            quantity: request.quantity,
            unit_base: Price::from_r(style.base_cost_r),
            addon_surcharge: Price::from_r(surcharge_r),
            item_subtotal: Price::from_r(item_subtotal_r),
            upload: FeeLine {
                label: upload.label.clone(),
                cost: upload.price(),
            },
            fast_pass: FeeLine {
                label: fast_pass.label.clone(),
                cost: fast_pass.price(),
            },
            pre_discount_subtotal: Price::from_r(pre_discount_r),
            discount_percent: request.discount_percent,
            discount: Price::from_r(discount_r),
            final_total: Price::from_r(final_r),
            notes: request.notes.clone(),
        })
    }
}

fn validate_bounds(request: &PricingRequest) -> Result<()> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&request.quantity) {
        return Err(Error::OutOfRange {
            field: "quantity",
            value: request.quantity,
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
        });
    }
    if request.discount_percent > MAX_DISCOUNT_PERCENT {
        return Err(Error::OutOfRange {
            field: "discount",
            value: request.discount_percent,
            min: 0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }
    Ok(())
}

/// Applies a percentage discount, rounding exact halves up.
///
/// `discount_percent` must be at most 100.
#[must_use]
pub const fn apply_discount(amount_r: u64, discount_percent: u32) -> u64 {
    if discount_percent == 0 {
        return amount_r;
    }
    let kept_percent = (MAX_DISCOUNT_PERCENT - discount_percent) as u64;
    (amount_r * kept_percent + 50) / 100
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::money::Usd,
        test_utils::{plain_necklace, plain_ugc, standard_engine},
    };

    #[test]
    fn test_two_name_beaded_limited_upload_with_discount() {
        let engine = standard_engine();
        let request = PricingRequest::necklace("two-name", UploadTier::LimitedUpload, FastPassTier::None)
            .beaded(true)
            .quantity(2)
            .discount(10);

        let breakdown = engine.price_necklace(&request).unwrap();

        assert_eq!(breakdown.item_subtotal.r, 1200);
        assert_eq!(breakdown.pre_discount_subtotal.r, 2900);
        assert_eq!(breakdown.final_total.r, 2610);
        assert_eq!(breakdown.discount.r, 290);
        assert_eq!(breakdown.final_total.usd.to_string(), "26.10");
        assert_eq!(breakdown.upload.cost.usd, Usd::from_dollars(12));
        assert_eq!(breakdown.applied_addon.as_deref(), Some("beaded"));
    }

    #[test]
    fn test_head_sign_with_day_fast_pass() {
        let engine = standard_engine();
        let request = PricingRequest::ugc("head-sign", UploadTier::None, FastPassTier::Day);

        let breakdown = engine.price_ugc(&request).unwrap();

        assert_eq!(breakdown.item_subtotal.r, 200);
        assert_eq!(breakdown.pre_discount_subtotal.r, 1200);
        assert_eq!(breakdown.final_total.r, 1200);
        assert_eq!(breakdown.discount.r, 0);
        assert_eq!(breakdown.final_total.usd.to_string(), "12.00");
        assert_eq!(breakdown.fast_pass.cost.usd, Usd::from_dollars(10));
    }

    #[test]
    fn test_mismatched_ugc_addon_is_ignored() {
        let engine = standard_engine();
        let request = plain_ugc("bracelet")
            .addon(Some("add-name"));

        let breakdown = engine.price_ugc(&request).unwrap();

        assert_eq!(breakdown.addon_surcharge.r, 0);
        assert_eq!(breakdown.applied_addon, None);
        assert_eq!(breakdown.item_subtotal.r, 250);
    }

    #[test]
    fn test_matching_ugc_addon_applies_per_item() {
        let engine = standard_engine();
        let request = plain_ugc("bows")
            .addon(Some("add-name"))
            .quantity(3);

        let breakdown = engine.price_ugc(&request).unwrap();

        assert_eq!(breakdown.addon_surcharge.r, 50);
        assert_eq!(breakdown.item_subtotal.r, 600);
    }

    #[test]
    fn test_head_sign_never_takes_an_addon() {
        let engine = standard_engine();
        for addon in ["add-name", "add-charm-or-name", "beaded"] {
            let request = plain_ugc("head-sign")
                .addon(Some(addon));
            let breakdown = engine.price_ugc(&request).unwrap();
            assert_eq!(breakdown.addon_surcharge.r, 0, "addon {addon}");
            assert_eq!(breakdown.item_subtotal.r, 200);
        }
    }

    #[test]
    fn test_beaded_applies_only_to_name_styles() {
        let engine = standard_engine();
        for style in engine.table().styles(ItemCategory::Necklace) {
            let request = plain_necklace(&style.identifier)
                .beaded(true);
            let breakdown = engine.price_necklace(&request).unwrap();
            let expected = match style.identifier.as_str() {
                "one-name" | "two-name" | "three-name" => 100,
                _ => 0,
            };
            assert_eq!(breakdown.addon_surcharge.r, expected, "style {}", style.identifier);
        }
    }

    #[test]
    fn test_unbeaded_name_necklace_has_no_surcharge() {
        let engine = standard_engine();
        let request = plain_necklace("three-name");
        let breakdown = engine.price_necklace(&request).unwrap();
        assert_eq!(breakdown.addon_surcharge.r, 0);
        assert_eq!(breakdown.item_subtotal.r, 600);
    }

    #[test]
    fn test_fees_do_not_scale_with_quantity() {
        let engine = standard_engine();
        let request = PricingRequest::necklace("basic-necklace", UploadTier::NormalUpload, FastPassTier::Week)
            .quantity(10);
        let breakdown = engine.price_necklace(&request).unwrap();
        assert_eq!(breakdown.item_subtotal.r, 1000);
        assert_eq!(breakdown.pre_discount_subtotal.r, 1000 + 2500 + 500);
    }

    #[test]
    fn test_subtotal_usd_is_derived_not_summed() {
        let engine = standard_engine();
        let request = PricingRequest::necklace("basic-necklace", UploadTier::LimitedUpload, FastPassTier::None);
        let breakdown = engine.price_necklace(&request).unwrap();
        // 1800r -> $18.00, although the tabulated fee alone is $12
        assert_eq!(breakdown.pre_discount_subtotal.usd.to_string(), "18.00");
        assert_eq!(breakdown.upload.cost.usd.to_string(), "12.00");
    }

    #[test]
    fn test_final_never_exceeds_subtotal() {
        let engine = standard_engine();
        for discount in 0..=MAX_DISCOUNT_PERCENT {
            for quantity in MIN_QUANTITY..=MAX_QUANTITY {
                let request = PricingRequest::ugc("bows", UploadTier::LimitedUpload, FastPassTier::Week)
                    .quantity(quantity)
                    .discount(discount);
                let b = engine.price_ugc(&request).unwrap();
                if discount == 0 {
                    assert_eq!(b.final_total.r, b.pre_discount_subtotal.r);
                } else {
                    assert!(b.final_total.r < b.pre_discount_subtotal.r);
                }
                assert_eq!(b.discount.r + b.final_total.r, b.pre_discount_subtotal.r);
            }
        }
    }

    #[test]
    fn test_full_discount_is_free() {
        let engine = standard_engine();
        let request = PricingRequest::necklace("cuban-chains", UploadTier::None, FastPassTier::Day)
            .discount(100);
        let breakdown = engine.price_necklace(&request).unwrap();
        assert_eq!(breakdown.final_total.r, 0);
        assert_eq!(breakdown.discount.r, 1500);
    }

    #[test]
    fn test_apply_discount_rounds_half_up() {
        // 150 * 0.97 = 145.5
        assert_eq!(apply_discount(150, 3), 146);
        // 2900 * 0.90 = 2610
        assert_eq!(apply_discount(2900, 10), 2610);
        // 250 * 0.99 = 247.5
        assert_eq!(apply_discount(250, 1), 248);
        assert_eq!(apply_discount(777, 0), 777);
    }

    #[test]
    fn test_quantity_out_of_range_is_rejected() {
        let engine = standard_engine();
        for quantity in [0, 11] {
            let request = plain_ugc("bows")
                .quantity(quantity);
            assert!(matches!(
                engine.price_ugc(&request),
                Err(Error::OutOfRange { field: "quantity", .. })
            ));
        }
    }

    #[test]
    fn test_discount_over_one_hundred_is_rejected() {
        let engine = standard_engine();
        let request = plain_necklace("one-name")
            .discount(101);
        assert!(matches!(
            engine.price_necklace(&request),
            Err(Error::OutOfRange { field: "discount", value: 101, .. })
        ));
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        let engine = standard_engine();
        let request = plain_necklace("four-name");
        assert!(matches!(
            engine.price_necklace(&request),
            Err(Error::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_category_mismatch_is_rejected() {
        let engine = standard_engine();
        let request = plain_ugc("bows");
        assert!(matches!(
            engine.price_necklace(&request),
            Err(Error::InvalidSelection { table: "necklace", .. })
        ));
    }

    #[test]
    fn test_notes_are_carried_through() {
        let engine = standard_engine();
        let request = plain_ugc("hair-clips")
            .notes(Some("pink clips please".to_string()));
        let breakdown = engine.price_ugc(&request).unwrap();
        assert_eq!(breakdown.notes.as_deref(), Some("pink clips please"));
    }
}
