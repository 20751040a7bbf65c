//! Memory Hole
//!
//! A hole is a contiguous free address range `[base, limit)`, either
//! reclaimed from a departed process or never yet allocated.
//!
//! Holes order by `(size, base)`. Size comes first so a `BTreeSet`
//! range query implements the best-fit ceiling lookup (smallest hole
//! with `size >= request`); base is the tie-break so equal-sized holes
//! at different addresses stay distinct in the set instead of
//! silently collapsing.

use std::cmp::Ordering;
use std::fmt;

use crate::process::Process;

/// A free, reclaimable contiguous address range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hole {
    /// First address of the free range
    pub base: usize,
    /// One past the last address of the free range
    pub limit: usize,
}

impl Hole {
    /// Create a hole spanning `[base, limit)`.
    pub fn new(base: usize, limit: usize) -> Self {
        debug_assert!(limit > base, "a hole must have positive size");
        Self { base, limit }
    }

    /// Probe value for ceiling lookups: the smallest hole of `size`
    /// in the `(size, base)` order.
    pub fn of_size(size: usize) -> Self {
        Self {
            base: 0,
            limit: size,
        }
    }

    /// Size of the free range, in memory units.
    pub fn size(&self) -> usize {
        self.limit - self.base
    }

    /// Whether `process` would consume this hole entirely.
    pub fn is_exact_fit(&self, process: &Process) -> bool {
        self.size() == process.size
    }

    /// Free units left over after placing `process` at the base.
    pub fn remaining_after(&self, process: &Process) -> usize {
        self.size() - process.size
    }
}

impl Ord for Hole {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size()
            .cmp(&other.size())
            .then_with(|| self.base.cmp(&other.base))
    }
}

impl PartialOrd for Hole {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hole [{}, {}) ({} units)", self.base, self.limit, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn size_is_limit_minus_base() {
        let hole = Hole::new(1033, 1133);
        assert_eq!(hole.size(), 100);
    }

    #[test]
    fn fit_queries() {
        let hole = Hole::new(512, 1033);
        let exact = Process::new("1", 521, 10);
        let smaller = Process::new("2", 100, 5);
        assert!(hole.is_exact_fit(&exact));
        assert!(!hole.is_exact_fit(&smaller));
        assert_eq!(hole.remaining_after(&smaller), 421);
    }

    #[test]
    fn orders_by_size_then_base() {
        let small = Hole::new(0, 100);
        let large = Hole::new(0, 200);
        assert!(small < large);

        let low = Hole::new(100, 200);
        let high = Hole::new(300, 400);
        assert!(low < high);
        assert_ne!(low, high);
    }

    #[test]
    fn equal_sized_holes_stay_distinct_in_a_set() {
        let mut holes = BTreeSet::new();
        holes.insert(Hole::new(100, 200));
        holes.insert(Hole::new(300, 400));
        assert_eq!(holes.len(), 2);
    }

    #[test]
    fn ceiling_probe_finds_the_smallest_sufficient_hole() {
        let mut holes = BTreeSet::new();
        holes.insert(Hole::new(0, 50));
        holes.insert(Hole::new(100, 250));
        holes.insert(Hole::new(400, 900));

        let probe = Hole::of_size(100);
        let found = holes.range(probe..).next().cloned();
        assert_eq!(found, Some(Hole::new(100, 250)));
    }
}
