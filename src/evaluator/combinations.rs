/// Every `k`-subset of `items`, in lexicographic index order.
///
/// Subsets keep the relative order of `items`. The whole collection is built
/// up front; callers score all of it, so laziness buys nothing for n <= 7.
///
/// ```
/// use holdem_odds::evaluator::combinations;
///
/// let subsets = combinations(&[1, 2, 3, 4], 3);
/// assert_eq!(subsets, vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]]);
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if k > items.len() {
        return Vec::new();
    }
    if k == 1 {
        return items.iter().map(|x| vec![x.clone()]).collect();
    }
    if k == items.len() {
        return vec![items.to_vec()];
    }

    let mut out = Vec::new();
    for (i, head) in items[..=items.len() - k].iter().enumerate() {
        for tail in combinations(&items[i + 1..], k - 1) {
            let mut combo = Vec::with_capacity(k);
            combo.push(head.clone());
            combo.extend(tail);
            out.push(combo);
        }
    }
    out
}
