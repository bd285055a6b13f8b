//! Mining configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FpGrowthError, Result};

/// Minimum support threshold, either absolute or relative to the transaction count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinSupport {
    /// Number of transactions an itemset must appear in.
    Count(usize),
    /// Share of transactions, in `(0, 1]`.
    Fraction(f64),
}

impl MinSupport {
    pub fn validate(&self) -> Result<()> {
        match *self {
            MinSupport::Count(0) => Err(FpGrowthError::InvalidArgument(
                "min_support must be a positive count".to_string(),
            )),
            MinSupport::Count(_) => Ok(()),
            MinSupport::Fraction(f) if f.is_nan() || f <= 0.0 || f > 1.0 => {
                Err(FpGrowthError::InvalidArgument(format!(
                    "min_support fraction must be in (0, 1], got {}",
                    f
                )))
            }
            MinSupport::Fraction(_) => Ok(()),
        }
    }

    /// Absolute count for a database of `num_transactions` rows. Never below 1.
    pub fn min_count(&self, num_transactions: usize) -> usize {
        match *self {
            MinSupport::Count(count) => count.max(1),
            MinSupport::Fraction(f) => (ceil_tolerant(f * num_transactions as f64) as usize).max(1),
        }
    }
}

/// `ceil` that treats a product within rounding error of an integer as that
/// integer, so `0.07 * 100.0 = 7.000000000000001` gives 7.
fn ceil_tolerant(raw: f64) -> f64 {
    let nearest = raw.round();
    if (raw - nearest).abs() <= f64::EPSILON * raw.abs().max(1.0) * 4.0 {
        nearest
    } else {
        raw.ceil()
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Count(1)
    }
}

/// Configuration for a mining run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Support threshold an itemset has to reach.
    pub min_support: MinSupport,
    /// Largest itemset size to emit; `None` means unbounded.
    pub max_len: Option<usize>,
    /// Enumerate single-path trees directly instead of recursing into them.
    pub single_path_shortcut: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::default(),
            max_len: None,
            single_path_shortcut: true,
        }
    }
}

impl MiningConfig {
    pub fn with_min_count(min_count: usize) -> Self {
        Self {
            min_support: MinSupport::Count(min_count),
            ..Self::default()
        }
    }

    pub fn with_min_fraction(fraction: f64) -> Self {
        Self {
            min_support: MinSupport::Fraction(fraction),
            ..Self::default()
        }
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn single_path_shortcut(mut self, enabled: bool) -> Self {
        self.single_path_shortcut = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.min_support.validate()?;
        if self.max_len == Some(0) {
            return Err(FpGrowthError::InvalidArgument(
                "max_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
