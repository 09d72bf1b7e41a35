use std::collections::HashMap;

/// Objective values keyed by per-type unit counts.
///
/// Two assignments that put the same number of units on every plant type always score the same,
/// so a search procedure revisiting permutations of a candidate only pays for the first one when
/// it keeps one cache across batches (see [`crate::workflows::evaluate::run_with_cache`]). Only
/// successful scores are stored.
#[derive(Debug, Default, Clone)]
pub struct CompositionCache {
    data: HashMap<Vec<usize>, f64>,
}

impl CompositionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit_counts: Vec<usize>, score: f64) {
        self.data.insert(unit_counts, score);
    }

    pub fn get(&self, unit_counts: &[usize]) -> Option<f64> {
        self.data.get(unit_counts).copied()
    }

    pub fn contains(&self, unit_counts: &[usize]) -> bool {
        self.data.contains_key(unit_counts)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Composition with the lowest cached score.
    pub fn best(&self) -> Option<(&[usize], f64)> {
        self.data
            .iter()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(counts, score)| (counts.as_slice(), *score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_inserted_score() {
        let mut cache = CompositionCache::new();
        cache.insert(vec![1, 0, 2, 1], 42.5);
        assert_eq!(cache.get(&[1, 0, 2, 1]), Some(42.5));
        assert_eq!(cache.get(&[1, 1, 1, 1]), None);
        assert!(cache.contains(&[1, 0, 2, 1]));
    }

    #[test]
    fn insert_overwrites_existing_composition() {
        let mut cache = CompositionCache::new();
        cache.insert(vec![2, 2, 0, 0], 10.0);
        cache.insert(vec![2, 2, 0, 0], 5.0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&[2, 2, 0, 0]), Some(5.0));
    }

    #[test]
    fn best_returns_lowest_score() {
        let mut cache = CompositionCache::new();
        assert_eq!(cache.best(), None);
        cache.insert(vec![4, 0, 0, 0], 300.0);
        cache.insert(vec![1, 1, 1, 1], 12.0);
        cache.insert(vec![0, 0, 0, 4], 90.0);
        assert_eq!(cache.best(), Some((&[1, 1, 1, 1][..], 12.0)));
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = CompositionCache::new();
        cache.insert(vec![1, 1, 1, 1], 1.0);
        cache.clear();
        assert!(cache.is_empty());
    }
}
