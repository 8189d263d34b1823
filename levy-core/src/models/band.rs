use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One progressive income-tax band: everything between the previous band's
/// upper threshold and this one is taxed at `rate`.
///
/// `upper` is the inclusive upper bound of the band; `None` marks the
/// unbounded tail band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl Band {
    pub fn bounded(upper: Decimal, rate: Decimal) -> Self {
        Self {
            upper: Some(upper),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self { upper: None, rate }
    }
}

/// Immutable, validated table of progressive bands.
///
/// Bands are contiguous starting at zero and ordered ascending by upper
/// threshold; the final band is always unbounded, so every non-negative
/// income falls into exactly one marginal rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTable {
    bands: Vec<Band>,
}

impl BandTable {
    /// Validates and wraps a band list.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the list is empty, thresholds are not
    /// strictly increasing from zero, an inner band is unbounded, or the
    /// final band is bounded.
    pub fn new(bands: Vec<Band>) -> Result<Self, EngineError> {
        let last = match bands.last() {
            Some(band) => band,
            None => return Err(EngineError::EmptyBandTable),
        };
        if let Some(upper) = last.upper {
            return Err(EngineError::BoundedTailBand(upper));
        }

        let mut previous = Decimal::ZERO;
        for band in &bands[..bands.len() - 1] {
            match band.upper {
                Some(upper) if upper > previous => previous = upper,
                Some(upper) => {
                    return Err(EngineError::NonAscendingBands {
                        previous,
                        found: upper,
                    });
                }
                None => return Err(EngineError::UnboundedInnerBand),
            }
        }

        Ok(Self { bands })
    }

    /// The 2024 individual income-tax schedule (amounts in SLE).
    ///
    /// | Band                  | Rate |
    /// |-----------------------|------|
    /// | 0 – 600,000           | 0%   |
    /// | 600,000 – 1,200,000   | 15%  |
    /// | 1,200,000 – 1,800,000 | 20%  |
    /// | 1,800,000 – 2,400,000 | 25%  |
    /// | above 2,400,000       | 30%  |
    pub fn sle_2024() -> Self {
        // Known-valid statutory table, constructed directly.
        Self {
            bands: vec![
                Band::bounded(dec!(600_000), Decimal::ZERO),
                Band::bounded(dec!(1_200_000), dec!(0.15)),
                Band::bounded(dec!(1_800_000), dec!(0.20)),
                Band::bounded(dec!(2_400_000), dec!(0.25)),
                Band::unbounded(dec!(0.30)),
            ],
        }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}
