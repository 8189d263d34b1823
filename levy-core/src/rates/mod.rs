//! Rate configuration seam.
//!
//! The portal owns its settings store; the engine only ever reads named
//! percentage rates through [`RateProvider`]. A lookup can never fail a
//! calculation: missing keys, parse errors, and an unavailable provider all
//! degrade to the statutory default passed by the caller.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

/// Rate keys the engine consults.
pub mod keys {
    pub const GST_RATE: &str = "gst_rate";
    pub const ANNUAL_INTEREST_RATE: &str = "annual_interest_rate";
    pub const MINIMUM_TAX_RATE: &str = "minimum_tax_rate";
    pub const MINIMUM_ALTERNATE_TAX_RATE: &str = "minimum_alternate_tax_rate";
    pub const CORPORATE_INCOME_TAX_RATE: &str = "corporate_income_tax_rate";
}

/// Statutory default for every key in [`keys`], as decimal fractions.
pub mod defaults {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    pub const GST_RATE: Decimal = dec!(0.15);
    pub const ANNUAL_INTEREST_RATE: Decimal = dec!(0.15);
    pub const MINIMUM_TAX_RATE: Decimal = dec!(0.005);
    pub const MINIMUM_ALTERNATE_TAX_RATE: Decimal = dec!(0.03);
    pub const CORPORATE_INCOME_TAX_RATE: Decimal = dec!(0.25);
}

/// Read-only source of configured percentage rates.
///
/// Implementations must be infallible: whatever goes wrong, return `default`.
pub trait RateProvider {
    /// Returns the configured rate for `key`, or `default` when the key is
    /// not configured.
    fn percent(&self, key: &str, default: Decimal) -> Decimal;
}

/// Provider that knows nothing and always answers with the statutory
/// default. The engine is fully functional with this alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatutoryRates;

impl RateProvider for StatutoryRates {
    fn percent(&self, _key: &str, default: Decimal) -> Decimal {
        default
    }
}

/// In-memory rate table for callers that load portal settings up front.
#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    rates: HashMap<String, Decimal>,
}

impl StaticRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces the rate for `key`.
    pub fn set(&mut self, key: impl Into<String>, rate: Decimal) {
        self.rates.insert(key.into(), rate);
    }
}

impl FromIterator<(String, Decimal)> for StaticRates {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

impl RateProvider for StaticRates {
    fn percent(&self, key: &str, default: Decimal) -> Decimal {
        match self.rates.get(key) {
            Some(rate) => *rate,
            None => {
                debug!(key, %default, "rate not configured, using statutory default");
                default
            }
        }
    }
}

/// Sanity bound used by provider-side validation: rates are fractions.
pub fn is_plausible_rate(rate: Decimal) -> bool {
    rate >= Decimal::ZERO && rate <= dec!(1)
}
