//! Process Description
//!
//! A process is the simulation's unit of work: an identifier, the
//! amount of memory it needs while resident, and a time cost that
//! determines when it departs.
//!
//! The scheduling order over processes is total: ascending `time`,
//! ties broken by ascending `id` (lexicographic) and then ascending
//! `size`. The operating-system reservation [`OS_PROCESS`] carries the
//! maximal time value so it never sorts first while any real process
//! is resident.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// Size of the operating-system reservation, in memory units.
pub const OS_SIZE: usize = 512;

/// The operating-system reservation sentinel.
///
/// Always resident, never scheduled for departure: its `time` is
/// `u32::MAX`, placing it last in the scheduling order among any
/// non-trivial resident set.
pub static OS_PROCESS: LazyLock<Process> = LazyLock::new(|| {
    Process::new("OS", OS_SIZE, u32::MAX)
});

/// A unit of work described by identity, memory footprint and time
/// cost.
///
/// Identity is value equality over the whole triple. Two processes
/// with the same `id` but different `size` or `time` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Process {
    /// Unique identifier (an alphanumeric token in the input grammar)
    pub id: String,
    /// Memory required while resident, in memory units
    pub size: usize,
    /// Time cost driving the departure (scheduling) order
    pub time: u32,
}

impl Process {
    /// Create a new process description.
    pub fn new(id: impl Into<String>, size: usize, time: u32) -> Self {
        Self {
            id: id.into(),
            size,
            time,
        }
    }

    /// Whether this is the operating-system reservation.
    pub fn is_os(&self) -> bool {
        *self == *OS_PROCESS
    }
}

impl Ord for Process {
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .cmp(&other.time)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.size.cmp(&other.size))
    }
}

impl PartialOrd for Process {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(size={}, time={})", self.id, self.size, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_time_first() {
        let early = Process::new("b", 500, 5);
        let late = Process::new("a", 100, 10);
        assert!(early < late);
    }

    #[test]
    fn ties_on_time_break_by_id_then_size() {
        let a = Process::new("a", 200, 7);
        let b = Process::new("b", 100, 7);
        assert!(a < b);

        let small = Process::new("a", 100, 7);
        let large = Process::new("a", 200, 7);
        assert!(small < large);
    }

    #[test]
    fn os_sentinel_sorts_last() {
        let p = Process::new("1", 1, u32::MAX - 1);
        assert!(p < *OS_PROCESS);
        assert_eq!(OS_PROCESS.size, OS_SIZE);
        assert!(OS_PROCESS.is_os());
        assert!(!p.is_os());
    }

    #[test]
    fn identity_is_the_whole_triple() {
        let a = Process::new("1", 100, 5);
        let b = Process::new("1", 100, 6);
        assert_ne!(a, b);
        assert_eq!(a, Process::new("1", 100, 5));
    }
}
