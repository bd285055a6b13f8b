/// Flat buffer of itemsets: every itemset is a `(start, len)` slice of `items`,
/// with its support at the same index in `supports`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsetStorage {
    pub items: Vec<usize>,
    pub offsets: Vec<(usize, usize)>,
    pub supports: Vec<usize>,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentLevel {
    pub storage: ItemsetStorage,
    pub itemset_size: usize,
}

impl ItemsetStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `items` sorted and deduplicated. Returns the new index.
    pub fn add_itemset_with_support(&mut self, mut items: Vec<usize>, support: usize) -> usize {
        items.sort_unstable();
        items.dedup();
        let start = self.items.len();
        self.items.extend_from_slice(&items);
        self.offsets.push((start, items.len()));
        self.supports.push(support);
        self.offsets.len() - 1
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.supports[idx]
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> {
        (0..self.len()).map(move |idx| (self.get_itemset(idx), self.supports[idx]))
    }

    /// Regroups the stored itemsets by size. Empty levels are skipped.
    pub fn into_levels(self) -> Vec<FrequentLevel> {
        let mut levels: Vec<FrequentLevel> = Vec::new();
        for (itemset, support) in self.iter() {
            let size = itemset.len();
            while levels.len() < size {
                levels.push(FrequentLevel::new(levels.len() + 1));
            }
            levels[size - 1].add_itemset_with_support(itemset.to_vec(), support);
        }
        levels.retain(|level| !level.is_empty());
        levels
    }
}

impl FrequentLevel {
    pub fn new(itemset_size: usize) -> Self {
        Self { storage: ItemsetStorage::new(), itemset_size }
    }

    pub fn add_itemset_with_support(&mut self, items: Vec<usize>, support: usize) -> usize {
        debug_assert_eq!(items.len(), self.itemset_size);
        self.storage.add_itemset_with_support(items, support)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn get_itemset(&self, idx: usize) -> &[usize] {
        self.storage.get_itemset(idx)
    }

    pub fn get_support(&self, idx: usize) -> usize {
        self.storage.get_support(idx)
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &[usize]> {
        (0..self.storage.len()).map(move |idx| self.get_itemset(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[usize], usize)> {
        self.storage.iter()
    }
}
