//! Currency amounts in R and their USD equivalents.
//!
//! Item costs convert at a fixed nominal rate of 100 R per dollar. Upload and
//! fast-pass fees carry their own tabulated USD values, so a [`Price`] can be
//! built either way.

use std::fmt;

/// Number of R that make up one US dollar for item costs.
pub const R_PER_USD: u64 = 100;

/// A US dollar amount held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Usd {
    cents: u64,
}

impl Usd {
    /// Builds an amount from whole cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Builds an amount from whole dollars.
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.cents
    }
}

/// Renders as dollars with exactly two decimals, e.g. `26.10`.
impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Converts an R amount to USD at the nominal rate, rounded half-up to the cent.
#[must_use]
pub const fn r_to_usd(r: u64) -> Usd {
    Usd::from_cents((r * 100 + R_PER_USD / 2) / R_PER_USD)
}

/// An amount in R together with the USD value shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Price {
    /// Amount in R
    pub r: u64,
    /// Amount in USD
    pub usd: Usd,
}

impl Price {
    /// A price whose USD value is derived from R at the nominal rate.
    #[must_use]
    pub const fn from_r(r: u64) -> Self {
        Self { r, usd: r_to_usd(r) }
    }

    /// A price whose USD value is looked up rather than derived.
    #[must_use]
    pub const fn tabulated(r: u64, usd: Usd) -> Self {
        Self { r, usd }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_to_usd_is_r_over_one_hundred() {
        assert_eq!(r_to_usd(2610), Usd::from_cents(2610));
        assert_eq!(r_to_usd(0), Usd::default());
        assert_eq!(r_to_usd(150).to_string(), "1.50");
    }

    #[test]
    fn test_usd_display_pads_cents() {
        assert_eq!(Usd::from_cents(1205).to_string(), "12.05");
        assert_eq!(Usd::from_dollars(12).to_string(), "12.00");
        assert_eq!(Usd::from_cents(7).to_string(), "0.07");
    }

    #[test]
    fn test_tabulated_price_keeps_its_own_usd() {
        // 1700r would derive to $17.00, the table says $12
        let price = Price::tabulated(1700, Usd::from_dollars(12));
        assert_eq!(price.usd.to_string(), "12.00");
        assert_ne!(price, Price::from_r(1700));
    }
}
