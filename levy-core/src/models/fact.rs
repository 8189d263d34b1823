use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tax regime a fact is assessed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxKind {
    IncomeTax,
    Gst,
    WithholdingTax,
    /// Pay-As-You-Earn payroll withholding, computed via the individual
    /// progressive schedule.
    Paye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxpayerCategory {
    Individual,
    SmallBusiness,
    Corporate,
    Partnership,
    Ngo,
}

/// Whether the filer is assessed as an individual or as an entity.
/// Income tax routes on this: individuals use the progressive schedule,
/// entities the flat corporate rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilerKind {
    Individual,
    Entity,
}

/// GST treatment of a supply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstCategory {
    Exempt,
    ZeroRated,
    #[default]
    Standard,
}

impl GstCategory {
    /// Parses a category label. Unknown labels are standard-rated.
    pub fn parse(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "exempt" => Self::Exempt,
            "zero-rated" | "zero_rated" | "zerorated" => Self::ZeroRated,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::ZeroRated => "zero-rated",
            Self::Standard => "standard",
        }
    }
}

/// Income categories subject to withholding tax.
///
/// Each category carries a fixed statutory rate; `Other` covers anything
/// outside the schedule and attracts the default rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithholdingCategory {
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

/// Immutable input to one liability calculation.
///
/// Amounts are SLE and must be non-negative; the composer rejects negative
/// values rather than clamping. A missing `actual_date` means the obligation
/// is still outstanding and lateness is evaluated as of "now", so the
/// penalty grows on every call until a filing/payment date is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxableFact {
    /// The taxable amount: income, supply value, payment, or gross salary,
    /// depending on `kind`.
    pub amount: Decimal,
    pub kind: TaxKind,
    pub category: TaxpayerCategory,
    pub filer: FilerKind,
    /// Annual turnover, required for the minimum-tax floor on corporate
    /// income tax.
    pub annual_turnover: Option<Decimal>,
    pub due_date: NaiveDate,
    /// Date the obligation was actually filed/paid, if it has been.
    pub actual_date: Option<NaiveDate>,
    /// GST treatment of the supply; `None` is standard-rated.
    pub gst_category: Option<GstCategory>,
    /// Withholding schedule category; `None` attracts the default rate.
    pub withholding: Option<WithholdingCategory>,
}

impl TaxableFact {
    pub fn new(
        amount: Decimal,
        kind: TaxKind,
        category: TaxpayerCategory,
        filer: FilerKind,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            kind,
            category,
            filer,
            annual_turnover: None,
            due_date,
            actual_date: None,
            gst_category: None,
            withholding: None,
        }
    }

    pub fn with_turnover(mut self, turnover: Decimal) -> Self {
        self.annual_turnover = Some(turnover);
        self
    }

    pub fn with_actual_date(mut self, date: NaiveDate) -> Self {
        self.actual_date = Some(date);
        self
    }

    pub fn with_gst_category(mut self, category: GstCategory) -> Self {
        self.gst_category = Some(category);
        self
    }

    pub fn with_withholding(mut self, category: WithholdingCategory) -> Self {
        self.withholding = Some(category);
        self
    }
}
