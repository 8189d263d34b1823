use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating inputs or constructing a band table.
///
/// Rate lookups never appear here: a missing or unreadable rate degrades to
/// its statutory default and cannot fail a calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The taxable amount was negative. The engine does not clamp.
    #[error("taxable amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// The annual turnover was negative.
    #[error("annual turnover must not be negative, got {0}")]
    NegativeTurnover(Decimal),

    /// A band table must contain at least one band.
    #[error("band table must contain at least one band")]
    EmptyBandTable,

    /// Band upper thresholds must be strictly increasing from zero.
    #[error("band thresholds must be strictly increasing, got {found} after {previous}")]
    NonAscendingBands { previous: Decimal, found: Decimal },

    /// Only the final band may be unbounded.
    #[error("only the final band may have no upper threshold")]
    UnboundedInnerBand,

    /// The final band must be unbounded so every income has a marginal rate.
    #[error("the final band must be unbounded, got upper threshold {0}")]
    BoundedTailBand(Decimal),
}
