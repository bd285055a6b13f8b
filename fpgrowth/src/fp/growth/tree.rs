use std::collections::HashMap;

use super::header::HeaderTable;

/// Weighted ancestor paths of one item, root side first.
pub type ConditionalPatternBase = Vec<(Vec<usize>, usize)>;

/// Arena node. `parent` is a back-reference into the arena and owns nothing;
/// `children` maps an item to the index of the single child carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct FPNode {
    pub item: Option<usize>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<usize, usize>,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub fn new_item(item: usize, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HeaderTable,
    pub root_index: usize,
}

impl FPTree {
    /// Empty tree (root only) indexed by `header_table`.
    pub fn new(header_table: HeaderTable) -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table,
            root_index: 0,
        }
    }

    /// Merges `transaction` into the tree along a path from the root, adding
    /// `count` to every node on it. Items must be header items in rank order.
    pub fn insert_transaction(&mut self, transaction: &[usize], count: usize) {
        let mut current_index = self.root_index;

        for &item in transaction {
            debug_assert!(self.header_table.contains(item));
            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += count;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item, count, current_index));
                self.nodes[current_index].children.insert(item, new_index);
                self.header_table.link(item, new_index);
                current_index = new_index;
            }
        }
    }

    /// Number of nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].children.is_empty()
    }

    /// Sum of the counts of every node labeled `item`.
    pub fn item_support(&self, item: usize) -> usize {
        self.header_table
            .nodes(item)
            .iter()
            .map(|&idx| self.nodes[idx].count)
            .sum()
    }

    /// Conditional pattern base of `item`: for each of its nodes, the labels of
    /// its ancestors below the root, weighted by the node's count. Nodes hanging
    /// directly off the root contribute nothing.
    pub fn get_prefix_paths(&self, item: usize) -> ConditionalPatternBase {
        let mut base = ConditionalPatternBase::new();
        for &node_index in self.header_table.nodes(item) {
            let mut path: Vec<usize> = self.ancestor_items(node_index).collect();
            if path.is_empty() {
                continue;
            }
            path.reverse();
            base.push((path, self.nodes[node_index].count));
        }
        base
    }

    /// Items on the way from `node_index`'s parent up to, not including, the root.
    fn ancestor_items(&self, node_index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.nodes[node_index].parent, move |&i| self.nodes[i].parent)
            .filter_map(move |i| self.nodes[i].item)
    }

    fn only_child(&self, index: usize) -> Option<usize> {
        let children = &self.nodes[index].children;
        if children.len() == 1 {
            children.values().next().copied()
        } else {
            None
        }
    }

    pub fn has_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            match self.nodes[current_index].children.len() {
                0 => return true,
                1 => match self.only_child(current_index) {
                    Some(child) => current_index = child,
                    None => return false,
                },
                _ => return false,
            }
        }
    }

    /// `(item, count)` pairs from the root down, as long as each node has exactly one child.
    /// Only meaningful when [`has_single_path`](Self::has_single_path) holds.
    pub fn get_single_path(&self) -> Vec<(usize, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(child_index) = self.only_child(current_index) {
            let child_node = &self.nodes[child_index];
            if let Some(item) = child_node.item {
                path.push((item, child_node.count));
            }
            current_index = child_index;
        }
        path
    }
}
