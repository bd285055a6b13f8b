use super::header::HeaderTable;
use super::tree::FPTree;
use crate::error::Result;
use crate::fp::support::{count_item_supports, SupportCounter};

/// Builds the FP-tree of `transactions` (item ids, one duplicate-free row per
/// transaction). Items below `min_count` never enter the tree; rows left empty
/// are skipped.
pub fn build_fp_tree(transactions: &[Vec<usize>], min_count: usize) -> Result<FPTree> {
    let supports = count_item_supports(transactions, min_count)?;
    let mut fp_tree = FPTree::new(HeaderTable::from_supports(supports));
    if fp_tree.header_table.is_empty() {
        return Ok(fp_tree);
    }

    for transaction in transactions {
        let ordered = fp_tree.header_table.order_transaction(transaction);
        if !ordered.is_empty() {
            fp_tree.insert_transaction(&ordered, 1);
        }
    }

    tracing::debug!(
        transactions = transactions.len(),
        frequent_items = fp_tree.header_table.len(),
        nodes = fp_tree.node_count(),
        "built FP-tree"
    );
    Ok(fp_tree)
}

/// Builds the conditional FP-tree of a pattern base. Each path counts with its
/// weight; items are re-ranked by their conditional support.
pub fn build_conditional_fp_tree(
    prefix_paths: &[(Vec<usize>, usize)],
    min_count: usize,
) -> Result<FPTree> {
    let mut counter = SupportCounter::new();
    for (path, count) in prefix_paths {
        counter.add(path, *count);
    }

    let supports = counter.into_frequent(min_count)?;
    let mut conditional_tree = FPTree::new(HeaderTable::from_supports(supports));
    if conditional_tree.header_table.is_empty() {
        return Ok(conditional_tree);
    }

    for (path, count) in prefix_paths {
        let ordered = conditional_tree.header_table.order_transaction(path);
        if !ordered.is_empty() {
            conditional_tree.insert_transaction(&ordered, *count);
        }
    }

    Ok(conditional_tree)
}
