use crate::core::problem::assignment::Assignment;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A scored candidate. `index` is its position in the evaluated batch.
#[derive(Debug, Clone)]
pub struct Solution {
    pub score: f64,
    pub index: usize,
    pub assignment: Assignment,
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Worse solutions compare greater: higher score, then later batch position.
impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Keeps the `capacity` best solutions offered to it.
#[derive(Debug, Clone)]
pub struct SolutionSet {
    capacity: usize,
    heap: BinaryHeap<Solution>,
}

impl SolutionSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
        }
    }

    pub fn offer(&mut self, solution: Solution) {
        if self.capacity == 0 {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(solution);
            return;
        }
        if let Some(worst) = self.heap.peek() {
            if solution < *worst {
                self.heap.pop();
                self.heap.push(solution);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Kept solutions, best first.
    pub fn into_sorted_vec(self) -> Vec<Solution> {
        self.heap.into_sorted_vec()
    }
}
