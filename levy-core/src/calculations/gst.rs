//! Goods and services tax.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::GstCategory;

/// GST on a supply. Exempt and zero-rated supplies owe nothing; everything
/// else is taxed at the configured standard rate.
pub fn gst(taxable_amount: Decimal, category: GstCategory, standard_rate: Decimal) -> Decimal {
    match category {
        GstCategory::Exempt | GstCategory::ZeroRated => Decimal::ZERO,
        GstCategory::Standard => round_half_up(taxable_amount * standard_rate),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::rates::defaults;

    #[test]
    fn standard_supply_is_taxed_at_the_configured_rate() {
        let result = gst(dec!(100_000), GstCategory::Standard, defaults::GST_RATE);

        assert_eq!(result, dec!(15_000));
    }

    #[test]
    fn exempt_supply_owes_nothing() {
        assert_eq!(
            gst(dec!(100_000), GstCategory::Exempt, defaults::GST_RATE),
            dec!(0)
        );
    }

    #[test]
    fn zero_rated_supply_owes_nothing() {
        assert_eq!(
            gst(dec!(100_000), GstCategory::ZeroRated, defaults::GST_RATE),
            dec!(0)
        );
    }

    #[test]
    fn unknown_label_is_taxed_as_standard() {
        let category = GstCategory::parse("imported-luxury");

        assert_eq!(gst(dec!(100_000), category, defaults::GST_RATE), dec!(15_000));
    }
}
