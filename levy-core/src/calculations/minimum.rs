//! Turnover-based floor taxes and the statutory greater-of rules.

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up};

/// Minimum tax: a flat fraction of annual turnover that floors corporate
/// income tax.
pub fn minimum_tax(annual_turnover: Decimal, rate: Decimal) -> Decimal {
    round_half_up(annual_turnover * rate)
}

/// Minimum alternate tax, also turnover-based. Computed and reported
/// alongside minimum tax but not part of the applied floor.
pub fn minimum_alternate_tax(annual_turnover: Decimal, rate: Decimal) -> Decimal {
    round_half_up(annual_turnover * rate)
}

/// The statutory greater-of rule: the taxpayer owes the computed tax or the
/// minimum tax, whichever is larger.
pub fn applicable_tax(computed: Decimal, minimum: Decimal) -> Decimal {
    max(computed, minimum)
}

/// Greater-of rule with MAT folded in as a third candidate. Available to
/// callers; the composer deliberately does not use it (see
/// [`crate::composer`]).
pub fn applicable_tax_with_mat(computed: Decimal, minimum: Decimal, mat: Decimal) -> Decimal {
    max(max(computed, minimum), mat)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::rates::defaults;

    #[test]
    fn minimum_tax_is_half_a_percent_of_turnover_by_default() {
        let result = minimum_tax(dec!(50_000_000), defaults::MINIMUM_TAX_RATE);

        assert_eq!(result, dec!(250_000));
    }

    #[test]
    fn minimum_alternate_tax_is_three_percent_by_default() {
        let result = minimum_alternate_tax(dec!(50_000_000), defaults::MINIMUM_ALTERNATE_TAX_RATE);

        assert_eq!(result, dec!(1_500_000));
    }

    #[test]
    fn minimum_tax_overrides_a_smaller_computed_tax() {
        assert_eq!(applicable_tax(dec!(200_000), dec!(300_000)), dec!(300_000));
    }

    #[test]
    fn computed_tax_stands_when_it_exceeds_the_minimum() {
        assert_eq!(applicable_tax(dec!(400_000), dec!(300_000)), dec!(400_000));
    }

    #[test]
    fn equal_computed_and_minimum_tax_tie_harmlessly() {
        assert_eq!(applicable_tax(dec!(250_000), dec!(250_000)), dec!(250_000));
    }

    #[test]
    fn mat_variant_considers_all_three_candidates() {
        assert_eq!(
            applicable_tax_with_mat(dec!(200_000), dec!(300_000), dec!(450_000)),
            dec!(450_000)
        );
        assert_eq!(
            applicable_tax_with_mat(dec!(500_000), dec!(300_000), dec!(450_000)),
            dec!(500_000)
        );
    }
}
