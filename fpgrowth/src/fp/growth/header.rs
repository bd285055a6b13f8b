use std::collections::HashMap;

use crate::fp::support::ItemSupports;

/// Header entry of one frequent item: its support in the tree, its position in
/// the tree-path order and every node carrying it, in creation order.
#[derive(Debug, Clone, PartialEq)]
struct HeaderEntry {
    support: usize,
    rank: usize,
    nodes: Vec<usize>,
}

/// Item index of an [`FPTree`](super::FPTree).
///
/// Items are ranked by descending support, ties broken by ascending item id.
/// Transactions are inserted in rank order; mining walks the ranks backwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderTable {
    entries: HashMap<usize, HeaderEntry>,
    order: Vec<usize>,
}

impl HeaderTable {
    /// Builds the table from already-filtered supports. Node chains start empty.
    pub fn from_supports(supports: ItemSupports) -> Self {
        let mut ranked: Vec<(usize, usize)> = supports.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let order: Vec<usize> = ranked.iter().map(|&(item, _)| item).collect();
        let entries = ranked
            .into_iter()
            .enumerate()
            .map(|(rank, (item, support))| {
                (item, HeaderEntry { support, rank, nodes: Vec::new() })
            })
            .collect();

        Self { entries, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.entries.contains_key(&item)
    }

    pub fn support(&self, item: usize) -> Option<usize> {
        self.entries.get(&item).map(|entry| entry.support)
    }

    pub fn rank(&self, item: usize) -> Option<usize> {
        self.entries.get(&item).map(|entry| entry.rank)
    }

    /// Every node labeled `item`; empty for items without an entry.
    pub fn nodes(&self, item: usize) -> &[usize] {
        match self.entries.get(&item) {
            Some(entry) => &entry.nodes,
            None => &[],
        }
    }

    /// Items in tree-path order: most frequent first.
    pub fn items_descending(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Items in mining order: least frequent first.
    pub fn items_ascending(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().rev().copied()
    }

    /// Drops items without an entry and orders the rest by rank, removing duplicates.
    pub fn order_transaction(&self, items: &[usize]) -> Vec<usize> {
        let mut ranked: Vec<(usize, usize)> = items
            .iter()
            .filter_map(|&item| self.rank(item).map(|rank| (rank, item)))
            .collect();
        ranked.sort_unstable();
        ranked.dedup();
        ranked.into_iter().map(|(_, item)| item).collect()
    }

    pub(crate) fn link(&mut self, item: usize, node_index: usize) {
        if let Some(entry) = self.entries.get_mut(&item) {
            entry.nodes.push(node_index);
        }
    }
}
