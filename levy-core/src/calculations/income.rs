//! Income-tax formulas: the progressive individual schedule, the flat
//! corporate rate, and PAYE.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::BandTable;

/// Computes individual income tax by walking the progressive bands.
///
/// Each band taxes `min(remaining, band_width)` at its marginal rate, so the
/// result is continuous at every band boundary and monotonic non-decreasing
/// in income. A boundary amount belongs to the lower band.
///
/// Callers must pass a non-negative income; the composer validates inputs
/// before routing here.
///
/// ```
/// use rust_decimal_macros::dec;
/// use levy_core::calculations::progressive_income_tax;
/// use levy_core::models::BandTable;
///
/// let bands = BandTable::sle_2024();
/// assert_eq!(progressive_income_tax(dec!(600_000), &bands), dec!(0));
/// // 600,000 untaxed, then 600,000 at 15%.
/// assert_eq!(progressive_income_tax(dec!(1_200_000), &bands), dec!(90_000));
/// ```
pub fn progressive_income_tax(taxable_income: Decimal, bands: &BandTable) -> Decimal {
    let mut remaining = taxable_income;
    let mut lower = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for band in bands.bands() {
        let slice = match band.upper {
            Some(upper) => (upper - lower).min(remaining),
            None => remaining,
        };
        tax += slice * band.rate;
        remaining -= slice;
        if remaining <= Decimal::ZERO {
            break;
        }
        if let Some(upper) = band.upper {
            lower = upper;
        }
    }

    round_half_up(tax)
}

/// Corporate income tax: a single flat rate on the full amount, no bands.
pub fn flat_corporate_income_tax(taxable_income: Decimal, rate: Decimal) -> Decimal {
    round_half_up(taxable_income * rate)
}

/// PAYE payroll withholding: the individual progressive schedule applied to
/// gross salary plus allowances.
pub fn paye(gross_salary: Decimal, allowances: Decimal, bands: &BandTable) -> Decimal {
    progressive_income_tax(gross_salary + allowances, bands)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_income_owes_nothing() {
        let bands = BandTable::sle_2024();

        assert_eq!(progressive_income_tax(dec!(0), &bands), dec!(0));
    }

    #[test]
    fn income_inside_the_free_band_owes_nothing() {
        let bands = BandTable::sle_2024();

        assert_eq!(progressive_income_tax(dec!(450_000), &bands), dec!(0));
    }

    #[test]
    fn boundary_amount_belongs_to_the_lower_band() {
        let bands = BandTable::sle_2024();

        assert_eq!(progressive_income_tax(dec!(600_000), &bands), dec!(0));
    }

    #[test]
    fn second_band_taxes_only_the_excess() {
        let bands = BandTable::sle_2024();

        // 600,000 free, 400,000 at 15%.
        let result = progressive_income_tax(dec!(1_000_000), &bands);

        assert_eq!(result, dec!(60_000));
    }

    #[test]
    fn tax_at_the_second_boundary_matches_the_marginal_sum() {
        let bands = BandTable::sle_2024();

        let result = progressive_income_tax(dec!(1_200_000), &bands);

        assert_eq!(result, dec!(90_000));
    }

    #[test]
    fn top_band_applies_to_everything_above_the_last_threshold() {
        let bands = BandTable::sle_2024();

        // 0 + 90,000 + 120,000 + 150,000 for the bounded bands, then
        // 600,000 at 30% in the tail.
        let result = progressive_income_tax(dec!(3_000_000), &bands);

        assert_eq!(result, dec!(540_000));
    }

    #[test]
    fn tax_is_continuous_across_every_boundary() {
        let bands = BandTable::sle_2024();
        let step = dec!(0.01);

        for boundary in [
            dec!(600_000),
            dec!(1_200_000),
            dec!(1_800_000),
            dec!(2_400_000),
        ] {
            let below = progressive_income_tax(boundary - step, &bands);
            let at = progressive_income_tax(boundary, &bands);

            assert!(at >= below, "tax decreased at boundary {boundary}");
            assert!(
                at - below <= step,
                "tax jumped by {} at boundary {boundary}",
                at - below
            );
        }
    }

    #[test]
    fn tax_is_monotonic_in_income() {
        let bands = BandTable::sle_2024();
        let mut previous = dec!(0);

        for income in (0..=3_000_000i64).step_by(75_000) {
            let tax = progressive_income_tax(Decimal::from(income), &bands);

            assert!(tax >= previous, "tax decreased at income {income}");
            previous = tax;
        }
    }

    #[test]
    fn flat_corporate_rate_covers_the_full_amount() {
        let result = flat_corporate_income_tax(dec!(1_000_000), dec!(0.25));

        assert_eq!(result, dec!(250_000));
    }

    #[test]
    fn paye_delegates_to_the_progressive_schedule() {
        let bands = BandTable::sle_2024();

        let combined = progressive_income_tax(dec!(950_000), &bands);
        let result = paye(dec!(800_000), dec!(150_000), &bands);

        assert_eq!(result, combined);
        assert_eq!(result, dec!(52_500));
    }

    #[test]
    fn paye_with_no_allowances_taxes_the_salary_alone() {
        let bands = BandTable::sle_2024();

        assert_eq!(paye(dec!(1_200_000), dec!(0), &bands), dec!(90_000));
    }
}
