use serde::{Deserialize, Serialize};

/// The penalty regimes the engine can assess. Each kind has its own formula,
/// implemented in [`crate::calculations::penalty`] and dispatched through
/// [`PenaltyKind::assess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyKind {
    /// Flat deterrent once a return is filed late, with a statutory floor.
    LateFiling,
    /// Tiered by days late, applied to the full unpaid amount.
    LatePayment,
    /// Flat percentage of the under-declared additional tax.
    UnderDeclaration,
    /// Heavier variant of the late-filing deterrent for returns never filed.
    NonFiling,
}
