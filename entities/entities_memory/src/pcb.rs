//! Process Control Block
//!
//! A PCB binds a [`Process`] to the half-open address range
//! `[base, limit)` it occupies while resident. PCBs are immutable:
//! compaction produces shifted copies, and a freed PCB is converted
//! into a hole rather than reused.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use crate::process::{Process, OS_PROCESS};

/// The PCB of the operating-system reservation, pinned at the bottom
/// of the address space.
pub static OS_PCB: LazyLock<Pcb> = LazyLock::new(|| Pcb::new(OS_PROCESS.clone(), 0));

/// A resident block: a process together with its allocated range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pcb {
    /// The process occupying the range
    pub process: Process,
    /// First address of the allocated range
    pub base: usize,
    /// One past the last address of the allocated range
    pub limit: usize,
}

impl Pcb {
    /// Allocate `process` at `base`; the limit follows from its size.
    pub fn new(process: Process, base: usize) -> Self {
        let limit = base + process.size;
        Self {
            process,
            base,
            limit,
        }
    }

    /// Size of the allocated range, in memory units.
    pub fn size(&self) -> usize {
        self.limit - self.base
    }

    /// A copy of this PCB relocated `amount` units toward address 0.
    pub fn shifted_left(&self, amount: usize) -> Self {
        Self {
            process: self.process.clone(),
            base: self.base - amount,
            limit: self.limit - amount,
        }
    }

    /// Whether this is the operating-system reservation.
    pub fn is_os(&self) -> bool {
        *self == *OS_PCB
    }
}

/// Scheduling order: the process order, with the address range as a
/// final tie-break so the order stays consistent with equality.
impl Ord for Pcb {
    fn cmp(&self, other: &Self) -> Ordering {
        self.process
            .cmp(&other.process)
            .then_with(|| self.base.cmp(&other.base))
            .then_with(|| self.limit.cmp(&other.limit))
    }
}

impl PartialOrd for Pcb {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pcb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ [{}, {})", self.process, self.base, self.limit)
    }
}
