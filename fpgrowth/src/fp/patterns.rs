use std::hash::Hash;

use super::growth::{fp_growth, MiningParams};
use super::itemizer::Itemizer;
use crate::config::MiningConfig;
use crate::error::Result;

/// A frequent itemset with the number of transactions containing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrequentItemset<T> {
    /// Items in ascending order.
    pub items: Vec<T>,
    pub support: usize,
}

impl<T> FrequentItemset<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Configured FP-Growth miner.
///
/// ```
/// use fpgrowth::{FpGrowth, MiningConfig};
///
/// let transactions = vec![vec!["a", "b"], vec!["a", "b"], vec!["a", "c"]];
/// let patterns = FpGrowth::new(MiningConfig::with_min_count(2))
///     .mine(transactions)
///     .unwrap();
///
/// assert!(patterns.iter().any(|p| p.items == ["a", "b"] && p.support == 2));
/// assert!(patterns.iter().all(|p| p.items != ["c"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpGrowth {
    config: MiningConfig,
}

impl FpGrowth {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    /// Mines `transactions`, each an iterable of labels with set semantics.
    /// Arguments are checked before the transactions are read.
    pub fn mine<T, I, S>(&self, transactions: I) -> Result<Vec<FrequentItemset<T>>>
    where
        T: Ord + Hash + Clone,
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        self.config.validate()?;

        let (itemizer, encoded) = Itemizer::encode(transactions);
        let params = MiningParams::from_config(&self.config, encoded.len());
        let storage = fp_growth(&encoded, &params)?;

        Ok(storage
            .iter()
            .map(|(itemset, support)| FrequentItemset {
                items: itemizer.decode(itemset),
                support,
            })
            .collect())
    }
}

/// Every itemset contained in at least `min_support` transactions.
///
/// An empty result is a valid answer, not a failure.
pub fn find_frequent_patterns<T, I, S>(transactions: I, min_support: usize) -> Result<Vec<FrequentItemset<T>>>
where
    T: Ord + Hash + Clone,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    FpGrowth::new(MiningConfig::with_min_count(min_support)).mine(transactions)
}
