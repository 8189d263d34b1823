//! Tax & Penalty Calculation Engine for the Sierra Leone client portal.
//!
//! Given a taxpayer's financial facts and filing/payment dates, the engine
//! computes statutory tax liability, the turnover-based minimum/alternate
//! taxes, late penalties, and accrued interest, producing a single
//! authoritative [`TaxCalculationResult`]. All arithmetic is exact decimal
//! (`rust_decimal`), rounded to two places half-away-from-zero.
//!
//! The engine is a pure function of its inputs and the configured rates: it
//! performs no I/O, holds no state between calls, and is safe to invoke
//! concurrently. Persistence, rendering, and notification of results belong
//! to callers.

pub mod calculations;
pub mod composer;
pub mod error;
pub mod models;
pub mod rates;

pub use composer::LiabilityComposer;
pub use error::EngineError;
pub use models::*;
pub use rates::{RateProvider, StaticRates, StatutoryRates};
