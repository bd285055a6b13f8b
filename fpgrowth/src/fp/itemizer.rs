use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// Dense ids for item labels, decodable back to the labels.
///
/// Ids follow ascending label order, so ordering ids is ordering labels.
#[derive(Debug, Clone)]
pub struct Itemizer<T> {
    labels: Vec<T>,
}

impl<T> Itemizer<T>
where
    T: Ord + Hash + Clone,
{
    /// Assigns ids to every label in `transactions` and returns the encoded
    /// transactions, each sorted by id without duplicates.
    pub fn encode<I, S>(transactions: I) -> (Self, Vec<Vec<usize>>)
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
    {
        let raw: Vec<Vec<T>> = transactions
            .into_iter()
            .map(|transaction| transaction.into_iter().collect())
            .collect();

        let distinct: BTreeSet<&T> = raw.iter().flatten().collect();
        let labels: Vec<T> = distinct.into_iter().cloned().collect();
        let ids: HashMap<T, usize> = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.clone(), id))
            .collect();

        let encoded = raw
            .iter()
            .map(|transaction| {
                let mut items: Vec<usize> =
                    transaction.iter().filter_map(|label| ids.get(label).copied()).collect();
                items.sort_unstable();
                items.dedup();
                items
            })
            .collect();

        (Self { labels }, encoded)
    }

    pub fn label_of(&self, id: usize) -> Option<&T> {
        self.labels.get(id)
    }

    /// Maps ids back to labels, skipping unknown ids.
    pub fn decode(&self, ids: &[usize]) -> Vec<T> {
        ids.iter().filter_map(|&id| self.label_of(id).cloned()).collect()
    }
}
