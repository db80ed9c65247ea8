//! Bounded, most-recent-first record of edited fields.

use super::fields::Field;

/// Ordered set holding at most `N` distinct entries, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecentSet<T, const N: usize> {
    entries: Vec<T>,
}

impl<T, const N: usize> Default for RecentSet<T, N> {
    fn default() -> Self {
        Self {
            entries: Vec::with_capacity(N),
        }
    }
}

impl<T: PartialEq, const N: usize> RecentSet<T, N> {
    /// Moves `value` to the front, dropping any earlier copy and anything past `N`.
    pub fn push_front(&mut self, value: T) {
        self.entries.retain(|entry| *entry != value);
        self.entries.insert(0, value);
        self.entries.truncate(N);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }
}

/// The two most recently edited fields.
pub type SourceHistory = RecentSet<Field, 2>;
