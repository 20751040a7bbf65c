//! Resident Pool
//!
//! The [`ReadyQueue`] owns the simulated address space
//! `[0, capacity)`: the operating-system reservation at the bottom,
//! the currently resident process blocks, and the holes between them.
//!
//! Three indices cover the same resident set:
//! - a min-priority heap in scheduling order (next departure first),
//! - an arrival-ordered list (its last element is the
//!   highest-addressed block, the tail placement point),
//! - a `BTreeSet` of holes ordered by `(size, base)` for best-fit
//!   ceiling lookups.
//!
//! Eviction converts the freed range into a hole; once the hole count
//! exceeds the compaction threshold, residents are shifted down and
//! the free space collapses into a single trailing hole.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;

use entities_memory::{Hole, Pcb, Process, OS_PCB};
use log::{debug, trace};

/// Default size of the simulated address space, in memory units.
pub const DEFAULT_CAPACITY: usize = 2048;

/// Default hole count above which eviction triggers compaction.
pub const DEFAULT_COMPACTION_THRESHOLD: usize = 3;

/// Construction errors for [`ReadyQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// Caller-supplied index storage was not empty
    DirtyStorage,
    /// Capacity does not cover the operating-system reservation
    CapacityTooSmall,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::DirtyStorage => {
                write!(f, "ready queue storage must be empty upon creation")
            }
            PoolError::CapacityTooSmall => {
                write!(f, "capacity must cover the operating-system reservation")
            }
        }
    }
}

impl std::error::Error for PoolError {}

/// The resident pool over a bounded address space.
///
/// The operating-system reservation is seeded at construction, always
/// occupies the bottom of the address space, and is never evicted
/// while any other process is resident. The pool counts as empty
/// exactly when only that reservation remains.
#[derive(Debug)]
pub struct ReadyQueue {
    /// Resident blocks in scheduling order (min-heap, next departure
    /// at the top)
    scheduled: BinaryHeap<Reverse<Pcb>>,
    /// Resident blocks in arrival order; the last element is the
    /// highest-addressed block
    arrivals: Vec<Pcb>,
    /// Free ranges ordered by `(size, base)`
    holes: BTreeSet<Hole>,
    /// Total size of the address space
    capacity: usize,
    /// Hole count above which eviction compacts
    compaction_threshold: usize,
    /// Sum of resident sizes, including the operating-system
    /// reservation
    current_size: usize,
    /// Number of compaction passes run so far
    compaction_count: usize,
}

impl ReadyQueue {
    /// Create an empty pool with the default capacity and compaction
    /// threshold.
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_CAPACITY, DEFAULT_COMPACTION_THRESHOLD)
    }

    /// Create an empty pool with explicit limits.
    ///
    /// # Panics
    /// Panics if `capacity` cannot hold the operating-system
    /// reservation.
    pub fn with_limits(capacity: usize, compaction_threshold: usize) -> Self {
        assert!(
            capacity >= OS_PCB.limit,
            "capacity must cover the operating-system reservation"
        );
        let mut pool = Self {
            scheduled: BinaryHeap::new(),
            arrivals: Vec::new(),
            holes: BTreeSet::new(),
            capacity,
            compaction_threshold,
            current_size: 0,
            compaction_count: 0,
        };
        pool.enqueue(OS_PCB.clone());
        pool
    }

    /// Create a pool around caller-supplied index storage.
    ///
    /// All three indices must be empty; a pool is only constructible
    /// in the empty state, and handing it pre-populated storage is a
    /// usage error reported as [`PoolError::DirtyStorage`].
    pub fn from_parts(
        scheduled: BinaryHeap<Reverse<Pcb>>,
        arrivals: Vec<Pcb>,
        holes: BTreeSet<Hole>,
    ) -> Result<Self, PoolError> {
        if !scheduled.is_empty() || !arrivals.is_empty() || !holes.is_empty() {
            return Err(PoolError::DirtyStorage);
        }
        let mut pool = Self {
            scheduled,
            arrivals,
            holes,
            capacity: DEFAULT_CAPACITY,
            compaction_threshold: DEFAULT_COMPACTION_THRESHOLD,
            current_size: 0,
            compaction_count: 0,
        };
        pool.enqueue(OS_PCB.clone());
        Ok(pool)
    }

    // ---- queries -----------------------------------------------------

    /// Unallocated units: capacity minus the resident total.
    pub fn remaining(&self) -> usize {
        self.capacity - self.current_size
    }

    /// Total size of the address space.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sum of resident sizes, including the operating-system
    /// reservation.
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// Number of resident blocks, including the operating-system
    /// reservation.
    pub fn resident_count(&self) -> usize {
        self.scheduled.len()
    }

    /// Number of holes currently tracked.
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Number of compaction passes run so far.
    pub fn compaction_count(&self) -> usize {
        self.compaction_count
    }

    /// Whether only the operating-system reservation is resident.
    pub fn is_empty(&self) -> bool {
        self.scheduled.len() == 1
    }

    /// Resident blocks in scheduling order (next departure first).
    pub fn scheduled(&self) -> Vec<Pcb> {
        let mut pcbs: Vec<Pcb> = self.scheduled.iter().map(|r| r.0.clone()).collect();
        pcbs.sort();
        pcbs
    }

    /// Resident blocks in arrival order.
    pub fn arrivals(&self) -> &[Pcb] {
        &self.arrivals
    }

    /// Holes in `(size, base)` order.
    pub fn holes(&self) -> Vec<Hole> {
        self.holes.iter().cloned().collect()
    }

    // ---- admission ---------------------------------------------------

    /// Try to make `process` resident; returns whether it was placed.
    ///
    /// The operating-system sentinel is accepted without effect. A
    /// process that does not fit in the remaining capacity is
    /// rejected. Otherwise placement is best-fit: the smallest hole
    /// of sufficient size, splitting off the leftover as a new hole,
    /// with tail placement after the highest-addressed block when no
    /// hole is large enough.
    pub fn admit(&mut self, process: Process) -> bool {
        if process.is_os() {
            return true;
        }
        if !self.has_sufficient_space(&process) || self.remaining() == 0 {
            debug!("rejected {process}: {} units remaining", self.remaining());
            return false;
        }
        if self.is_empty() {
            let pcb = Pcb::new(process, OS_PCB.limit);
            debug!("placed {pcb} directly after the OS reservation");
            self.enqueue(pcb);
            return true;
        }
        self.place_best_fit(process)
    }

    /// Admit a batch of processes; returns whether all were placed.
    ///
    /// When `fill_remaining` is set and unallocated space is left
    /// past the highest-addressed block, that tail is recorded as an
    /// explicit hole.
    pub fn seed<I>(&mut self, processes: I, fill_remaining: bool) -> bool
    where
        I: IntoIterator<Item = Process>,
    {
        let mut all_placed = true;
        for process in processes {
            all_placed &= self.admit(process);
        }
        if fill_remaining {
            self.fill_remaining_space();
        }
        all_placed
    }

    // ---- eviction ----------------------------------------------------

    /// Remove the next resident in scheduling order, converting its
    /// range into a hole. Returns `None` when only the
    /// operating-system reservation remains.
    pub fn evict(&mut self) -> Option<Pcb> {
        if self.is_empty() {
            return None;
        }
        let Reverse(pcb) = self.scheduled.pop()?;
        assert!(!pcb.is_os(), "the OS reservation must never be evicted");

        if let Some(position) = self.arrivals.iter().position(|other| *other == pcb) {
            self.arrivals.remove(position);
        }
        self.holes.insert(Hole::new(pcb.base, pcb.limit));
        self.current_size -= pcb.process.size;
        debug!("evicted {pcb}, {} hole(s) tracked", self.holes.len());

        if self.holes.len() > self.compaction_threshold {
            self.compact();
        }
        Some(pcb)
    }

    /// Evict until only the operating-system reservation remains;
    /// returns whether anything was removed.
    pub fn evict_all(&mut self) -> bool {
        let mut removed = false;
        while self.evict().is_some() {
            removed = true;
        }
        removed
    }

    /// Reset to the freshly constructed state.
    pub fn clear(&mut self) {
        self.scheduled.clear();
        self.arrivals.clear();
        self.holes.clear();
        self.current_size = 0;
        self.compaction_count = 0;
        self.enqueue(OS_PCB.clone());
    }

    // ---- internals ---------------------------------------------------

    fn has_sufficient_space(&self, process: &Process) -> bool {
        process.size + self.current_size <= self.capacity
    }

    /// Highest-addressed resident block. The arrival list is never
    /// empty: the OS reservation is seeded at construction.
    fn last_arrival(&self) -> &Pcb {
        self.arrivals
            .last()
            .expect("the OS reservation is always resident")
    }

    fn enqueue(&mut self, pcb: Pcb) {
        self.current_size += pcb.process.size;
        self.scheduled.push(Reverse(pcb.clone()));
        self.arrivals.push(pcb);
    }

    fn place_best_fit(&mut self, process: Process) -> bool {
        let probe = Hole::of_size(process.size);
        let suitable = self.holes.range(probe..).next().cloned();

        match suitable {
            None => {
                // No hole is large enough; grow past the
                // highest-addressed block (capacity was checked on
                // entry).
                let pcb = Pcb::new(process, self.last_arrival().limit);
                debug!("placed {pcb} at the tail, no suitable hole");
                self.enqueue(pcb);
            }
            Some(hole) => {
                self.holes.remove(&hole);
                let pcb = Pcb::new(process, hole.base);
                if !hole.is_exact_fit(&pcb.process) {
                    let leftover = Hole::new(pcb.limit, hole.limit);
                    trace!("leftover {leftover} after placing {}", pcb.process);
                    self.holes.insert(leftover);
                }
                debug!("placed {pcb} into {hole}");
                self.enqueue(pcb);
            }
        }
        true
    }

    /// Record the untouched tail past the highest-addressed block as
    /// an explicit hole.
    fn fill_remaining_space(&mut self) {
        let tail_base = self.last_arrival().limit;
        if tail_base < self.capacity {
            self.holes.insert(Hole::new(tail_base, self.capacity));
        }
    }

    /// Shift residents down past each hole, then collapse all free
    /// space into a single trailing hole.
    ///
    /// Holes are processed in `(size, base)` order, and each hole's
    /// recorded base is not re-derived after earlier shifts. This
    /// mirrors the historical behavior the simulation is specified
    /// against; post-compaction addresses depend on it.
    fn compact(&mut self) {
        let holes: Vec<Hole> = self.holes.iter().cloned().collect();
        for hole in &holes {
            self.reposition_for(hole);
        }
        self.holes.clear();
        self.fill_remaining_space();
        self.compaction_count += 1;
        debug!(
            "compaction #{} collapsed {} hole(s) into the tail",
            self.compaction_count,
            holes.len()
        );
    }

    /// Shift every non-OS resident at or above `hole.base` down by
    /// the hole's size, in both resident indices.
    fn reposition_for(&mut self, hole: &Hole) {
        let shift = |pcb: &Pcb| {
            if pcb.is_os() || pcb.base < hole.base {
                pcb.clone()
            } else {
                pcb.shifted_left(hole.size())
            }
        };
        self.arrivals = self.arrivals.iter().map(&shift).collect();
        self.scheduled = self
            .scheduled
            .iter()
            .map(|Reverse(pcb)| Reverse(shift(pcb)))
            .collect();
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReadyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} units resident across {} block(s), {} hole(s)",
            self.current_size,
            self.capacity,
            self.resident_count(),
            self.hole_count()
        )
    }
}
