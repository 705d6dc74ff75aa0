//! Fixed-capacity sliding windows of samples.

use std::collections::VecDeque;

/// Default number of points a chart keeps on screen.
pub const MAX_POINTS: usize = 100;

/// An insertion-ordered window of at most `capacity` values.
///
/// Appending to a full window evicts the oldest value, so the window always
/// holds the most recent `min(capacity, appended)` values with the newest
/// last.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingSeries<T> {
    values: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> SlidingSeries<T> {
    /// Create an empty window. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, returning the evicted oldest value if the window was full.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.values.len() == self.capacity {
            self.values.pop_front()
        } else {
            None
        };
        self.values.push_back(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently appended value.
    pub fn latest(&self) -> Option<T> {
        self.values.back().copied()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Values oldest first.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    /// Copy of the current window, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T: Copy> Default for SlidingSeries<T> {
    fn default() -> Self {
        Self::new(MAX_POINTS)
    }
}

impl<T: Copy> Extend<T> for SlidingSeries<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
