//! Pure tax and penalty formulas.
//!
//! Every function here is a pure function of its arguments: no rate lookups,
//! no clock reads. The [`crate::composer::LiabilityComposer`] resolves rates
//! and dates and feeds these formulas.

pub mod common;
pub mod gst;
pub mod income;
pub mod minimum;
pub mod penalty;
pub mod withholding;

pub use common::{max, round_half_up};
pub use gst::gst;
pub use income::{flat_corporate_income_tax, paye, progressive_income_tax};
pub use minimum::{applicable_tax, applicable_tax_with_mat, minimum_alternate_tax, minimum_tax};
pub use penalty::{
    days_late, late_filing_penalty, late_payment_penalty, non_filing_penalty, simple_interest,
    under_declaration_penalty,
};
pub use withholding::withholding_tax;
