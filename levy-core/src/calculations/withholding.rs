//! Withholding tax on scheduled income categories.
//!
//! The schedule is a fixed statutory table, not portal-configurable:
//!
//! | Category          | Rate |
//! |-------------------|------|
//! | Dividends         | 10%  |
//! | Management fees   | 15%  |
//! | Professional fees | 10%  |
//! | Lottery winnings  | 10%  |
//! | Royalties         | 25%  |
//! | Interest          | 15%  |
//! | Rent              | 10%  |
//! | Commissions       | 5%   |
//! | anything else     | 15%  |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_half_up;
use crate::models::WithholdingCategory;

/// Default rate for categories outside the schedule.
pub const DEFAULT_WITHHOLDING_RATE: Decimal = dec!(0.15);

/// Withholding tax on a payment.
///
/// `_is_resident` is accepted for parity with the statutory schedule's
/// signature but no category currently differentiates by residency; the
/// flag must stay a no-op until the schedule says otherwise.
pub fn withholding_tax(
    amount: Decimal,
    category: WithholdingCategory,
    _is_resident: bool,
) -> Decimal {
    round_half_up(amount * scheduled_rate(category))
}

fn scheduled_rate(category: WithholdingCategory) -> Decimal {
    match category {
        WithholdingCategory::Dividends => dec!(0.10),
        WithholdingCategory::ManagementFees => dec!(0.15),
        WithholdingCategory::ProfessionalFees => dec!(0.10),
        WithholdingCategory::LotteryWinnings => dec!(0.10),
        WithholdingCategory::Royalties => dec!(0.25),
        WithholdingCategory::Interest => dec!(0.15),
        WithholdingCategory::Rent => dec!(0.10),
        WithholdingCategory::Commissions => dec!(0.05),
        WithholdingCategory::Other => DEFAULT_WITHHOLDING_RATE,
    }
}
