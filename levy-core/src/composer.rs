//! Liability composition: one call, one authoritative figure.
//!
//! # Example
//!
//! The corporate scenario from the firm's acceptance checklist: 1,000,000
//! taxable income, 50,000,000 turnover, evaluated 90 days past the due date
//! with nothing paid.
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use levy_core::composer::LiabilityComposer;
//! use levy_core::models::{BandTable, FilerKind, TaxKind, TaxableFact, TaxpayerCategory};
//! use levy_core::rates::StatutoryRates;
//!
//! let bands = BandTable::sle_2024();
//! let rates = StatutoryRates;
//! let composer = LiabilityComposer::new(&rates, &bands);
//!
//! let fact = TaxableFact::new(
//!     dec!(1_000_000),
//!     TaxKind::IncomeTax,
//!     TaxpayerCategory::Corporate,
//!     FilerKind::Entity,
//!     NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
//! )
//! .with_turnover(dec!(50_000_000));
//!
//! let eval = NaiveDate::from_ymd_opt(2024, 7, 29).unwrap();
//! let result = composer.calculate_as_of(&fact, eval).unwrap();
//!
//! assert_eq!(result.base_tax, dec!(250_000));
//! assert_eq!(result.minimum_tax, dec!(250_000));
//! assert_eq!(result.penalty, dec!(150_000));
//! assert_eq!(result.interest, dec!(9_246.58));
//! assert_eq!(result.total_liability, dec!(409_246.58));
//! ```

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::{
    applicable_tax, days_late, flat_corporate_income_tax, gst, late_payment_penalty,
    minimum_alternate_tax, minimum_tax, paye, progressive_income_tax, round_half_up,
    simple_interest, withholding_tax,
};
use crate::error::EngineError;
use crate::models::{
    BandTable, FilerKind, TaxCalculationResult, TaxKind, TaxableFact, WithholdingCategory,
};
use crate::rates::{RateProvider, defaults, keys};

/// Orchestrates the tax and penalty calculators into a single
/// [`TaxCalculationResult`].
///
/// Borrows its rate provider and band table, so one composer can serve any
/// number of independent, concurrent calculations.
#[derive(Debug, Clone)]
pub struct LiabilityComposer<'a, R: RateProvider> {
    rates: &'a R,
    bands: &'a BandTable,
}

impl<'a, R: RateProvider> LiabilityComposer<'a, R> {
    pub fn new(rates: &'a R, bands: &'a BandTable) -> Self {
        Self { rates, bands }
    }

    /// Computes the full liability for `fact`, evaluating lateness as of
    /// today.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the taxable amount or turnover is
    /// negative. Rate lookups cannot fail.
    pub fn calculate(&self, fact: &TaxableFact) -> Result<TaxCalculationResult, EngineError> {
        self.calculate_as_of(fact, Utc::now().date_naive())
    }

    /// Same as [`calculate`](Self::calculate) with an explicit evaluation
    /// date, for deterministic tests and back-dated recalculations.
    pub fn calculate_as_of(
        &self,
        fact: &TaxableFact,
        evaluation_date: NaiveDate,
    ) -> Result<TaxCalculationResult, EngineError> {
        validate(fact)?;

        let computed = self.base_tax(fact);

        // The turnover floor applies to corporate income tax only. MAT is
        // computed and reported but excluded from the applied comparison;
        // the statute folds in minimum tax alone.
        let (minimum, mat) = match (fact.kind, fact.filer, fact.annual_turnover) {
            (TaxKind::IncomeTax, FilerKind::Entity, Some(turnover)) if turnover > Decimal::ZERO => {
                let minimum_rate = self
                    .rates
                    .percent(keys::MINIMUM_TAX_RATE, defaults::MINIMUM_TAX_RATE);
                let mat_rate = self.rates.percent(
                    keys::MINIMUM_ALTERNATE_TAX_RATE,
                    defaults::MINIMUM_ALTERNATE_TAX_RATE,
                );
                (
                    minimum_tax(turnover, minimum_rate),
                    minimum_alternate_tax(turnover, mat_rate),
                )
            }
            _ => (Decimal::ZERO, Decimal::ZERO),
        };
        let base = applicable_tax(computed, minimum);

        let clock_stop = fact.actual_date.unwrap_or(evaluation_date);
        let late = days_late(fact.due_date, clock_stop);

        let (penalty, interest) = if late > 0 {
            // Intentional statutory asymmetry: income tax is penalised on
            // the original taxable amount, every other kind on the computed
            // tax. Do not unify the basis without product sign-off.
            let penalty_basis = match fact.kind {
                TaxKind::IncomeTax => fact.amount,
                _ => computed,
            };
            let annual_rate = self
                .rates
                .percent(keys::ANNUAL_INTEREST_RATE, defaults::ANNUAL_INTEREST_RATE);
            debug!(days_late = late, %penalty_basis, "obligation past due");
            (
                late_payment_penalty(penalty_basis, late),
                simple_interest(base, late, annual_rate),
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        Ok(TaxCalculationResult {
            base_tax: base,
            minimum_tax: minimum,
            minimum_alternate_tax: mat,
            penalty,
            interest,
            total_liability: round_half_up(base + penalty + interest),
            calculated_at: Utc::now(),
        })
    }

    fn base_tax(&self, fact: &TaxableFact) -> Decimal {
        match fact.kind {
            TaxKind::IncomeTax => match fact.filer {
                FilerKind::Individual => progressive_income_tax(fact.amount, self.bands),
                FilerKind::Entity => {
                    let rate = self.rates.percent(
                        keys::CORPORATE_INCOME_TAX_RATE,
                        defaults::CORPORATE_INCOME_TAX_RATE,
                    );
                    flat_corporate_income_tax(fact.amount, rate)
                }
            },
            TaxKind::Gst => {
                let rate = self.rates.percent(keys::GST_RATE, defaults::GST_RATE);
                gst(fact.amount, fact.gst_category.unwrap_or_default(), rate)
            }
            TaxKind::WithholdingTax => withholding_tax(
                fact.amount,
                fact.withholding.unwrap_or(WithholdingCategory::Other),
                true,
            ),
            TaxKind::Paye => paye(fact.amount, Decimal::ZERO, self.bands),
        }
    }
}

fn validate(fact: &TaxableFact) -> Result<(), EngineError> {
    if fact.amount < Decimal::ZERO {
        return Err(EngineError::NegativeAmount(fact.amount));
    }
    if let Some(turnover) = fact.annual_turnover {
        if turnover < Decimal::ZERO {
            return Err(EngineError::NegativeTurnover(turnover));
        }
    }
    Ok(())
}
