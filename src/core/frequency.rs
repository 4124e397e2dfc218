//! Word frequencies derived from an index
//!
//! Provides:
//! - derive_counts: word -> number of occurrences
//! - CountFilter: optional exclusive lower/upper count bounds
//! - sort_by_frequency: stable descending sort on count

use std::cmp::Reverse;

use crate::core::model::{Count, Index, WordCount};

/// Reduce an index to per-word occurrence counts, keeping the index order
pub fn derive_counts(index: &Index) -> Count {
    let mut count = Count::with_capacity(index.len());
    for (word, positions) in index.iter() {
        count.push(word.to_string(), positions.len());
    }
    count
}

/// Exclusive count bounds. An absent bound imposes no constraint; an
/// inconsistent pair such as `gt >= lt` simply matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountFilter {
    pub gt: Option<i64>,
    pub lt: Option<i64>,
}

impl CountFilter {
    pub fn new(gt: Option<i64>, lt: Option<i64>) -> Self {
        Self { gt, lt }
    }

    /// Whether `count` satisfies every present bound
    pub fn matches(&self, count: usize) -> bool {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        self.gt.map_or(true, |gt| count > gt) && self.lt.map_or(true, |lt| count < lt)
    }

    /// Keep the pairs that satisfy the bounds, preserving their order
    pub fn apply(&self, pairs: Vec<WordCount>) -> Vec<WordCount> {
        if self.gt.is_none() && self.lt.is_none() {
            return pairs;
        }
        pairs
            .into_iter()
            .filter(|pair| self.matches(pair.count))
            .collect()
    }
}

/// Order pairs by descending count when `sort` is set.
///
/// Pairs with equal counts keep their input order.
pub fn sort_by_frequency(mut pairs: Vec<WordCount>, sort: bool) -> Vec<WordCount> {
    if sort {
        // slice::sort_by_key is stable
        pairs.sort_by_key(|pair| Reverse(pair.count));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::indexer::index_document;

    fn pairs(items: &[(&str, usize)]) -> Vec<WordCount> {
        items
            .iter()
            .map(|&(word, count)| WordCount::new(word, count))
            .collect()
    }

    #[test]
    fn test_counts_match_position_lists() {
        let index = index_document("the quick brown fox the lazy dog the");
        let count = derive_counts(&index);

        assert_eq!(count.len(), index.len());
        for (word, positions) in index.iter() {
            assert_eq!(count.get(word), Some(positions.len()));
        }
        assert_eq!(count.get("the"), Some(3));
    }

    #[test]
    fn test_counts_keep_index_order() {
        let count = derive_counts(&index_document("b a b c a b"));
        assert_eq!(count.into_pairs(), pairs(&[("b", 3), ("a", 2), ("c", 1)]));
    }

    #[test]
    fn test_empty_index_yields_empty_count() {
        assert!(derive_counts(&Index::new()).is_empty());
    }

    #[test]
    fn test_filter_without_bounds_is_identity() {
        let input = pairs(&[("a", 1), ("b", 5), ("c", 2)]);
        assert_eq!(CountFilter::default().apply(input.clone()), input);
    }

    #[test]
    fn test_filter_both_bounds_are_exclusive() {
        let input = pairs(&[("a", 1), ("b", 2), ("c", 5), ("d", 4), ("e", 3), ("f", 6)]);
        let filtered = CountFilter::new(Some(1), Some(5)).apply(input);

        assert_eq!(filtered, pairs(&[("b", 2), ("d", 4), ("e", 3)]));
    }

    #[test]
    fn test_filter_single_bounds() {
        let input = pairs(&[("a", 1), ("b", 2), ("c", 3)]);

        assert_eq!(
            CountFilter::new(Some(1), None).apply(input.clone()),
            pairs(&[("b", 2), ("c", 3)])
        );
        assert_eq!(
            CountFilter::new(None, Some(3)).apply(input),
            pairs(&[("a", 1), ("b", 2)])
        );
    }

    #[test]
    fn test_filter_inconsistent_bounds_match_nothing() {
        let input = pairs(&[("a", 1), ("b", 2), ("c", 3)]);

        assert!(CountFilter::new(Some(3), Some(1)).apply(input.clone()).is_empty());
        assert!(CountFilter::new(Some(2), Some(3)).apply(input).is_empty());
    }

    #[test]
    fn test_filter_negative_bounds() {
        let filter = CountFilter::new(Some(-1), None);
        assert!(filter.matches(0));
        assert!(!CountFilter::new(None, Some(0)).matches(0));
    }

    #[test]
    fn test_sort_is_stable_descending() {
        let sorted = sort_by_frequency(pairs(&[("a", 2), ("b", 2), ("c", 3)]), true);
        assert_eq!(sorted, pairs(&[("c", 3), ("a", 2), ("b", 2)]));
    }

    #[test]
    fn test_sort_ties_keep_input_order() {
        let input = pairs(&[("x", 1), ("y", 4), ("z", 1), ("w", 4), ("v", 1)]);
        let sorted = sort_by_frequency(input, true);

        assert_eq!(
            sorted,
            pairs(&[("y", 4), ("w", 4), ("x", 1), ("z", 1), ("v", 1)])
        );
    }

    #[test]
    fn test_sort_disabled_returns_input() {
        let input = pairs(&[("a", 1), ("b", 3), ("c", 2)]);
        assert_eq!(sort_by_frequency(input.clone(), false), input);
    }
}
