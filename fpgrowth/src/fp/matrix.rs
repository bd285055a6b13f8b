use ndarray::ArrayView2;

use super::growth::{fp_growth, MiningParams};
use super::utils::FrequentLevel;
use crate::config::MiningConfig;
use crate::error::{FpGrowthError, Result};

/// Converts a binary transaction matrix (rows are transactions, columns are
/// item ids) into item lists. Any cell other than 0 or 1 is rejected.
pub fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Result<Vec<Vec<usize>>> {
    transactions
        .outer_iter()
        .enumerate()
        .map(|(row, cells)| {
            let mut items = Vec::new();
            for (col, &cell) in cells.iter().enumerate() {
                match cell {
                    0 => {}
                    1 => items.push(col),
                    other => {
                        return Err(FpGrowthError::InvalidInput(format!(
                            "transaction {} has value {} for item {}, expected 0 or 1",
                            row, other, col
                        )))
                    }
                }
            }
            Ok(items)
        })
        .collect()
}

/// FP-Growth over a binary matrix with `min_support` as a share of the rows.
/// Returns one level per itemset size; level `k - 1` holds the frequent `k`-itemsets.
pub fn fp_growth_algorithm(transactions: ArrayView2<i32>, min_support: f64) -> Result<Vec<FrequentLevel>> {
    fp_growth_matrix(transactions, &MiningConfig::with_min_fraction(min_support))
}

pub fn fp_growth_matrix(transactions: ArrayView2<i32>, config: &MiningConfig) -> Result<Vec<FrequentLevel>> {
    config.validate()?;
    let transaction_list = matrix_to_transactions(transactions)?;
    let params = MiningParams::from_config(config, transaction_list.len());
    let storage = fp_growth(&transaction_list, &params)?;
    Ok(storage.into_levels())
}
