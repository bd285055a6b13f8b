use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::combinations::emit_single_path;
use super::tree::FPTree;
use crate::config::MiningConfig;
use crate::error::Result;
use crate::fp::utils::ItemsetStorage;

/// Per-level mining state: the tree being mined (which owns its header table)
/// and the prefix every pattern found in it extends.
#[derive(Debug, Clone)]
pub struct MiningContext {
    pub tree: FPTree,
    pub prefix: Vec<usize>,
}

/// Thresholds shared by every level of one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningParams {
    pub min_count: usize,
    pub max_len: Option<usize>,
    pub single_path_shortcut: bool,
}

impl MiningParams {
    pub fn new(min_count: usize) -> Self {
        Self {
            min_count,
            max_len: None,
            single_path_shortcut: true,
        }
    }

    pub fn from_config(config: &MiningConfig, num_transactions: usize) -> Self {
        Self {
            min_count: config.min_support.min_count(num_transactions),
            max_len: config.max_len,
            single_path_shortcut: config.single_path_shortcut,
        }
    }

    fn can_extend(&self, prefix_len: usize) -> bool {
        self.max_len.map_or(true, |max_len| prefix_len < max_len)
    }
}

/// Mines every frequent itemset of `transactions` (item ids). Itemsets are
/// stored sorted by id, each with its support, in mining order.
pub fn fp_growth(transactions: &[Vec<usize>], params: &MiningParams) -> Result<ItemsetStorage> {
    let fp_tree = build_fp_tree(transactions, params.min_count)?;
    let mut result = ItemsetStorage::new();
    if fp_tree.header_table.is_empty() {
        return Ok(result);
    }

    let context = MiningContext { tree: fp_tree, prefix: Vec::new() };
    mine(&context, params, &mut result)?;

    tracing::debug!(itemsets = result.len(), min_count = params.min_count, "mining finished");
    Ok(result)
}

/// Emits every frequent itemset extending `context.prefix`, visiting header
/// items from least to most frequent and recursing into their conditional trees.
pub fn mine(context: &MiningContext, params: &MiningParams, result: &mut ItemsetStorage) -> Result<()> {
    let fp_tree = &context.tree;

    if params.single_path_shortcut && fp_tree.has_single_path() {
        let path = fp_tree.get_single_path();
        emit_single_path(&path, &context.prefix, params.max_len, result);
        return Ok(());
    }

    for item in fp_tree.header_table.items_ascending() {
        let Some(support) = fp_tree.header_table.support(item) else {
            continue;
        };

        let mut new_prefix = context.prefix.clone();
        new_prefix.push(item);
        result.add_itemset_with_support(new_prefix.clone(), support);

        if !params.can_extend(new_prefix.len()) {
            continue;
        }

        let prefix_paths = fp_tree.get_prefix_paths(item);
        if prefix_paths.is_empty() {
            continue;
        }

        let cond_tree = build_conditional_fp_tree(&prefix_paths, params.min_count)?;
        tracing::trace!(
            prefix_len = new_prefix.len(),
            item,
            cond_items = cond_tree.header_table.len(),
            cond_nodes = cond_tree.node_count(),
            "conditional FP-tree"
        );

        if !cond_tree.header_table.is_empty() {
            let cond_context = MiningContext { tree: cond_tree, prefix: new_prefix };
            mine(&cond_context, params, result)?;
        }
    }

    Ok(())
}
