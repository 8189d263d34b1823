use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The single authoritative output of a liability calculation.
///
/// Entirely derived, produced fresh per call and owned by the caller;
/// invoicing, compliance status, and reporting all key off this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Base statutory tax after the minimum-tax floor has been applied.
    pub base_tax: Decimal,

    /// Turnover-based minimum tax; zero when not applicable.
    pub minimum_tax: Decimal,

    /// Minimum alternate tax; computed and exposed for corporate filers but
    /// never folded into the applied floor (statutory behavior, not an
    /// oversight).
    pub minimum_alternate_tax: Decimal,

    /// Late-payment penalty; zero when the obligation is not late.
    pub penalty: Decimal,

    /// Simple interest accrued on the base tax; zero when not late.
    pub interest: Decimal,

    /// `base_tax + penalty + interest`.
    pub total_liability: Decimal,

    /// When this calculation was performed.
    pub calculated_at: DateTime<Utc>,
}
