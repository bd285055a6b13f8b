use crate::fp::utils::ItemsetStorage;

/// Emits `alpha` joined with every non-empty combination of `path` items, up to
/// `max_len` items in total. A combination's support is the smallest count among
/// its nodes.
pub fn emit_single_path(
    path: &[(usize, usize)],
    alpha: &[usize],
    max_len: Option<usize>,
    result: &mut ItemsetStorage,
) {
    let largest = max_len
        .map_or(path.len(), |max_len| max_len.saturating_sub(alpha.len()))
        .min(path.len());
    for k in 1..=largest {
        generate_combinations_from_path(path, k, alpha, result);
    }
}

/// Emits `alpha` joined with every `k`-combination of `path` items.
pub fn generate_combinations_from_path(
    path: &[(usize, usize)],
    k: usize,
    alpha: &[usize],
    result: &mut ItemsetStorage,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let mut pattern = Vec::with_capacity(alpha.len() + k);
    pattern.extend_from_slice(alpha);
    extend_combination(path, alpha.len() + k, 0, usize::MAX, &mut pattern, result);
}

/// Grows `pattern` with path items from `start` onwards until it holds
/// `target_len` items; `support` is the minimum count picked so far.
fn extend_combination(
    path: &[(usize, usize)],
    target_len: usize,
    start: usize,
    support: usize,
    pattern: &mut Vec<usize>,
    result: &mut ItemsetStorage,
) {
    if pattern.len() == target_len {
        result.add_itemset_with_support(pattern.clone(), support);
        return;
    }

    // Leave enough items after `i` to still reach `target_len`.
    let remaining = target_len - pattern.len();
    for (i, &(item, count)) in path.iter().enumerate().take(path.len() + 1 - remaining).skip(start) {
        pattern.push(item);
        extend_combination(path, target_len, i + 1, support.min(count), pattern, result);
        pattern.pop();
    }
}
