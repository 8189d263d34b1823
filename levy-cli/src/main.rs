use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use levy_core::models::{
    BandTable, FilerKind, GstCategory, TaxKind, TaxableFact, TaxpayerCategory, WithholdingCategory,
};
use levy_core::rates::{StaticRates, is_plausible_rate};
use levy_core::LiabilityComposer;

/// Compute a tax liability the way the portal's invoicing module would.
///
/// Prints the full calculation result as JSON on stdout. Lateness is
/// evaluated as of today unless --as-of or --actual-date is given.
#[derive(Parser, Debug)]
#[command(name = "levy")]
#[command(version, about, long_about = None)]
struct Args {
    /// Taxable amount in SLE (income, supply value, payment, or gross salary)
    #[arg(long)]
    amount: Decimal,

    /// Tax regime to assess under
    #[arg(long, value_enum)]
    kind: KindArg,

    /// Taxpayer category
    #[arg(long, value_enum, default_value_t = CategoryArg::Individual)]
    category: CategoryArg,

    /// Whether the filer is assessed as an individual or an entity
    #[arg(long, value_enum, default_value_t = FilerArg::Individual)]
    filer: FilerArg,

    /// Statutory due date (YYYY-MM-DD)
    #[arg(long)]
    due_date: NaiveDate,

    /// Date the obligation was actually filed/paid, if it has been
    #[arg(long)]
    actual_date: Option<NaiveDate>,

    /// Annual turnover in SLE, enables the corporate minimum-tax floor
    #[arg(long)]
    turnover: Option<Decimal>,

    /// GST item category label (exempt, zero-rated, standard); unknown
    /// labels are standard-rated
    #[arg(long)]
    gst_category: Option<String>,

    /// Withholding schedule category
    #[arg(long, value_enum)]
    withholding: Option<WithholdingArg>,

    /// Evaluate lateness as of this date instead of today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Override a configured rate, e.g. --rate gst_rate=0.18 (repeatable)
    #[arg(long = "rate", value_parser = parse_rate_override)]
    rates: Vec<(String, Decimal)>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Income,
    Gst,
    Withholding,
    Paye,
}

impl From<KindArg> for TaxKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => TaxKind::IncomeTax,
            KindArg::Gst => TaxKind::Gst,
            KindArg::Withholding => TaxKind::WithholdingTax,
            KindArg::Paye => TaxKind::Paye,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CategoryArg {
    Individual,
    SmallBusiness,
    Corporate,
    Partnership,
    Ngo,
}

impl From<CategoryArg> for TaxpayerCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Individual => TaxpayerCategory::Individual,
            CategoryArg::SmallBusiness => TaxpayerCategory::SmallBusiness,
            CategoryArg::Corporate => TaxpayerCategory::Corporate,
            CategoryArg::Partnership => TaxpayerCategory::Partnership,
            CategoryArg::Ngo => TaxpayerCategory::Ngo,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FilerArg {
    Individual,
    Entity,
}

impl From<FilerArg> for FilerKind {
    fn from(arg: FilerArg) -> Self {
        match arg {
            FilerArg::Individual => FilerKind::Individual,
            FilerArg::Entity => FilerKind::Entity,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum WithholdingArg {
    Dividends,
    ManagementFees,
    ProfessionalFees,
    LotteryWinnings,
    Royalties,
    Interest,
    Rent,
    Commissions,
    Other,
}

impl From<WithholdingArg> for WithholdingCategory {
    fn from(arg: WithholdingArg) -> Self {
        match arg {
            WithholdingArg::Dividends => WithholdingCategory::Dividends,
            WithholdingArg::ManagementFees => WithholdingCategory::ManagementFees,
            WithholdingArg::ProfessionalFees => WithholdingCategory::ProfessionalFees,
            WithholdingArg::LotteryWinnings => WithholdingCategory::LotteryWinnings,
            WithholdingArg::Royalties => WithholdingCategory::Royalties,
            WithholdingArg::Interest => WithholdingCategory::Interest,
            WithholdingArg::Rent => WithholdingCategory::Rent,
            WithholdingArg::Commissions => WithholdingCategory::Commissions,
            WithholdingArg::Other => WithholdingCategory::Other,
        }
    }
}

fn parse_rate_override(s: &str) -> Result<(String, Decimal), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=RATE, got '{s}'"))?;
    let rate: Decimal = value
        .parse()
        .map_err(|_| format!("'{value}' is not a decimal rate"))?;
    Ok((key.to_string(), rate))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut rates = StaticRates::new();
    for (key, rate) in &args.rates {
        if !is_plausible_rate(*rate) {
            bail!("rate override {key}={rate} is not a fraction between 0 and 1");
        }
        rates.set(key.clone(), *rate);
    }

    let mut fact = TaxableFact::new(
        args.amount,
        args.kind.into(),
        args.category.into(),
        args.filer.into(),
        args.due_date,
    );
    if let Some(turnover) = args.turnover {
        fact = fact.with_turnover(turnover);
    }
    if let Some(actual) = args.actual_date {
        fact = fact.with_actual_date(actual);
    }
    if let Some(label) = &args.gst_category {
        let category = GstCategory::parse(label);
        if category == GstCategory::Standard && label != "standard" {
            warn!(%label, "unknown GST category label, treating as standard");
        }
        fact = fact.with_gst_category(category);
    }
    if let Some(withholding) = args.withholding {
        fact = fact.with_withholding(withholding.into());
    }

    let bands = BandTable::sle_2024();
    let composer = LiabilityComposer::new(&rates, &bands);

    let result = match args.as_of {
        Some(eval_date) => composer.calculate_as_of(&fact, eval_date),
        None => composer.calculate(&fact),
    }
    .context("liability calculation failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rate_override_parses_key_and_fraction() {
        let parsed = parse_rate_override("gst_rate=0.18").unwrap();

        assert_eq!(parsed, ("gst_rate".to_string(), dec!(0.18)));
    }

    #[test]
    fn rate_override_rejects_missing_separator() {
        assert!(parse_rate_override("gst_rate").is_err());
    }

    #[test]
    fn rate_override_rejects_non_decimal_value() {
        assert!(parse_rate_override("gst_rate=abc").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;

        Args::command().debug_assert();
    }
}
