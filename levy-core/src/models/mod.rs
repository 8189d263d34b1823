mod band;
mod fact;
mod penalty;
mod result;

pub use band::{Band, BandTable};
pub use fact::{
    FilerKind, GstCategory, TaxKind, TaxableFact, TaxpayerCategory, WithholdingCategory,
};
pub use penalty::PenaltyKind;
pub use result::TaxCalculationResult;
