//! Top-k ranking by integer score

/// An item paired with the score it was ranked by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored<T> {
    pub item: T,
    pub score: u64,
}

/// Return the `k` highest-scoring items in descending score order
///
/// The sort is stable, so equal scores keep their input order. The result has
/// length `min(k, number of items)`.
pub fn top_k_by_score<T, I, F>(items: I, k: usize, score: F) -> Vec<Scored<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> u64,
{
    let mut scored: Vec<Scored<T>> = items
        .into_iter()
        .map(|item| {
            let score = score(&item);
            Scored { item, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(k);
    scored
}
