use std::collections::HashMap;

use crate::error::{FpGrowthError, Result};

/// Item id to aggregate support.
pub type ItemSupports = HashMap<usize, usize>;

/// Accumulates per-item occurrence counts over transactions or weighted prefix paths.
#[derive(Debug, Clone, Default)]
pub struct SupportCounter {
    counts: ItemSupports,
}

impl SupportCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `weight` to every item of `items`. Callers pass duplicate-free item lists.
    pub fn add(&mut self, items: &[usize], weight: usize) {
        for &item in items {
            *self.counts.entry(item).or_insert(0) += weight;
        }
    }

    pub fn count(&self, item: usize) -> usize {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    /// Keeps only the items whose count reaches `min_count`.
    pub fn into_frequent(self, min_count: usize) -> Result<ItemSupports> {
        if min_count == 0 {
            return Err(FpGrowthError::InvalidArgument(
                "min_support must be a positive count".to_string(),
            ));
        }
        Ok(self
            .counts
            .into_iter()
            .filter(|&(_, count)| count >= min_count)
            .collect())
    }
}

/// Counts every item over `transactions` and drops the ones below `min_count`.
/// No transactions, or no item reaching the threshold, gives an empty map.
pub fn count_item_supports(transactions: &[Vec<usize>], min_count: usize) -> Result<ItemSupports> {
    let mut counter = SupportCounter::new();
    for transaction in transactions {
        counter.add(transaction, 1);
    }
    counter.into_frequent(min_count)
}
