//! Penalty and interest formulas.
//!
//! Late-payment penalties are tiered by days late, applied to the full
//! unpaid amount; a higher tier replaces the lower one rather than adding to
//! it:
//!
//! | Days late | Rate |
//! |-----------|------|
//! | 1 – 30    | 5%   |
//! | 31 – 60   | 10%  |
//! | over 60   | 15%  |
//!
//! Late-filing and non-filing penalties are flat deterrents with statutory
//! floors, independent of how late the return is. Interest accrues daily,
//! simple (non-compounding), on a 365-day year.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{max, round_half_up};
use crate::models::PenaltyKind;

const LATE_FILING_RATE: Decimal = dec!(0.05);
const LATE_FILING_FLOOR: Decimal = dec!(50_000);
const NON_FILING_RATE: Decimal = dec!(0.10);
const NON_FILING_FLOOR: Decimal = dec!(100_000);
const UNDER_DECLARATION_RATE: Decimal = dec!(0.20);
const DAYS_PER_YEAR: Decimal = dec!(365);

/// Whole days between the due date and the evaluation date, floored at zero.
///
/// The evaluation date is the recorded filing/payment date when one exists,
/// otherwise "now" — an outstanding obligation keeps accruing lateness on
/// every call.
pub fn days_late(due_date: NaiveDate, evaluation_date: NaiveDate) -> i64 {
    evaluation_date.signed_duration_since(due_date).num_days().max(0)
}

/// Late-filing penalty: 5% of the tax due, no less than the statutory floor.
pub fn late_filing_penalty(tax_amount: Decimal) -> Decimal {
    round_half_up(max(tax_amount * LATE_FILING_RATE, LATE_FILING_FLOOR))
}

/// Tiered late-payment penalty on the full unpaid amount. Zero when not
/// late.
pub fn late_payment_penalty(unpaid_amount: Decimal, days_late: i64) -> Decimal {
    if days_late <= 0 {
        return Decimal::ZERO;
    }
    let rate = if days_late <= 30 {
        dec!(0.05)
    } else if days_late <= 60 {
        dec!(0.10)
    } else {
        dec!(0.15)
    };
    round_half_up(unpaid_amount * rate)
}

/// Flat 20% of the additional tax uncovered by an audit or amended return.
pub fn under_declaration_penalty(additional_tax: Decimal) -> Decimal {
    round_half_up(additional_tax * UNDER_DECLARATION_RATE)
}

/// Non-filing penalty: 10% of the assessed tax, no less than its floor.
pub fn non_filing_penalty(assessed_tax: Decimal) -> Decimal {
    round_half_up(max(assessed_tax * NON_FILING_RATE, NON_FILING_FLOOR))
}

/// Simple daily interest: `principal × rate / 365 × days`. Zero when not
/// late.
pub fn simple_interest(principal: Decimal, days_late: i64, annual_rate: Decimal) -> Decimal {
    if days_late <= 0 {
        return Decimal::ZERO;
    }
    round_half_up(principal * annual_rate * Decimal::from(days_late) / DAYS_PER_YEAR)
}

impl PenaltyKind {
    /// Dispatches to the formula for this penalty kind.
    ///
    /// `basis` is the amount the formula applies to: tax due for filing
    /// penalties, the unpaid amount for late payment, the additional tax for
    /// under-declaration. `days_late` only matters for late payment.
    pub fn assess(self, basis: Decimal, days_late: i64) -> Decimal {
        match self {
            Self::LateFiling => late_filing_penalty(basis),
            Self::LatePayment => late_payment_penalty(basis, days_late),
            Self::UnderDeclaration => under_declaration_penalty(basis),
            Self::NonFiling => non_filing_penalty(basis),
        }
    }
}
