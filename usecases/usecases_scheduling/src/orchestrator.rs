//! Memory Orchestrator
//!
//! One admission/eviction step at a time: evict the next resident in
//! scheduling order, then try to admit the head of the job queue into
//! the freed space. A rejected job is re-offered at the tail of the
//! queue, losing its place to the jobs behind it.
//!
//! Construction reads the two seed sources (initially resident
//! processes and waiting jobs) concurrently; the two reads are
//! independent and both complete before the orchestrator is usable.
//! After construction no operation touches external I/O.

use std::path::{Path, PathBuf};
use std::thread;

use adapters_ingestion::read_processes;
use entities_memory::{Hole, Pcb, Process};
use log::debug;
use usecases_memory_management::{JobQueue, ReadyQueue};

/// Exclusive owner of the resident pool and the job queue for the
/// simulation's lifetime.
#[derive(Debug)]
pub struct MemoryOrchestrator {
    pool: ReadyQueue,
    jobs: JobQueue,
}

impl MemoryOrchestrator {
    /// Start configuring an orchestrator.
    pub fn builder() -> MemoryOrchestratorBuilder {
        MemoryOrchestratorBuilder::default()
    }

    /// Assemble an orchestrator from an existing pool and queue.
    ///
    /// Both containers pass into the orchestrator's exclusive
    /// ownership; all further access goes through its methods.
    pub fn from_components(pool: ReadyQueue, jobs: JobQueue) -> Self {
        Self { pool, jobs }
    }

    /// Perform one admission/eviction step.
    ///
    /// Evicts at most one resident and admits at most one job.
    /// Returns `false` when there was nothing to evict, or when the
    /// next waiting job was rejected (it is re-queued at the tail);
    /// returns `true` otherwise.
    pub fn step(&mut self) -> bool {
        let Some(evicted) = self.pool.evict() else {
            debug!("step: nothing to evict");
            return false;
        };
        debug!("step: evicted {evicted}");

        if let Some(job) = self.jobs.poll() {
            if !self.pool.admit(job.clone()) {
                debug!("step: {job} rejected, re-queued at the tail");
                self.jobs.offer(job);
                return false;
            }
            debug!("step: admitted {job}");
        }
        true
    }

    /// Reset the pool and the queue to their empty states.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.jobs.clear();
        debug!("simulation reset");
    }

    /// Whether the pool holds only the OS reservation and no jobs
    /// wait.
    pub fn is_idle(&self) -> bool {
        self.pool.is_empty() && self.jobs.is_empty()
    }

    // ---- presentation snapshots ---------------------------------------

    /// Resident blocks in scheduling order (next departure first).
    pub fn scheduled_residents(&self) -> Vec<Pcb> {
        self.pool.scheduled()
    }

    /// Resident blocks in arrival order.
    pub fn arrival_residents(&self) -> &[Pcb] {
        self.pool.arrivals()
    }

    /// Holes in `(size, base)` order.
    pub fn holes(&self) -> Vec<Hole> {
        self.pool.holes()
    }

    /// Waiting jobs, head first.
    pub fn waiting_jobs(&self) -> Vec<Process> {
        self.jobs.jobs().cloned().collect()
    }

    pub fn remaining_capacity(&self) -> usize {
        self.pool.remaining()
    }

    pub fn resident_count(&self) -> usize {
        self.pool.resident_count()
    }

    pub fn hole_count(&self) -> usize {
        self.pool.hole_count()
    }

    pub fn compaction_count(&self) -> usize {
        self.pool.compaction_count()
    }
}

/// Builder seeding an orchestrator from two line-oriented sources.
///
/// Either source may be omitted (an empty seed) or unreadable (the
/// reader degrades to an empty sequence); construction itself never
/// fails.
#[derive(Debug, Default)]
pub struct MemoryOrchestratorBuilder {
    ready_source: Option<PathBuf>,
    job_source: Option<PathBuf>,
    capacity: Option<usize>,
    compaction_threshold: Option<usize>,
}

impl MemoryOrchestratorBuilder {
    /// Source of the initially resident processes.
    pub fn ready_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.ready_source = Some(path.into());
        self
    }

    /// Source of the initially waiting jobs.
    pub fn job_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.job_source = Some(path.into());
        self
    }

    /// Override the pool capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Override the compaction threshold.
    pub fn compaction_threshold(mut self, threshold: usize) -> Self {
        self.compaction_threshold = Some(threshold);
        self
    }

    /// Read both sources concurrently, seed the pool and the queue,
    /// and hand over the orchestrator.
    pub fn build(self) -> MemoryOrchestrator {
        let (residents, waiting) = thread::scope(|scope| {
            let residents = scope.spawn(|| read_seed(self.ready_source.as_deref()));
            let waiting = scope.spawn(|| read_seed(self.job_source.as_deref()));
            (
                residents.join().unwrap_or_default(),
                waiting.join().unwrap_or_default(),
            )
        });

        let capacity = self
            .capacity
            .unwrap_or(usecases_memory_management::DEFAULT_CAPACITY);
        let threshold = self
            .compaction_threshold
            .unwrap_or(usecases_memory_management::DEFAULT_COMPACTION_THRESHOLD);

        let mut pool = ReadyQueue::with_limits(capacity, threshold);
        pool.seed(residents, true);

        let mut jobs = JobQueue::new();
        jobs.offer_all(waiting);

        debug!(
            "orchestrator seeded: {} resident block(s), {} waiting job(s)",
            pool.resident_count(),
            jobs.len()
        );
        MemoryOrchestrator::from_components(pool, jobs)
    }
}

fn read_seed(source: Option<&Path>) -> Vec<Process> {
    source.map(read_processes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_memory::OS_PCB;

    fn pool_with(processes: &[Process]) -> ReadyQueue {
        let mut pool = ReadyQueue::new();
        for process in processes {
            assert!(pool.admit(process.clone()));
        }
        pool
    }

    #[test]
    fn step_on_an_empty_pool_makes_no_progress() {
        let mut orchestrator =
            MemoryOrchestrator::from_components(ReadyQueue::new(), JobQueue::new());
        assert!(!orchestrator.step());
        assert!(orchestrator.is_idle());
    }

    #[test]
    fn step_evicts_then_admits_the_next_job() {
        let pool = pool_with(&[Process::new("1", 521, 10), Process::new("2", 100, 5)]);
        let mut jobs = JobQueue::new();
        jobs.offer(Process::new("5", 700, 3));

        let mut orchestrator = MemoryOrchestrator::from_components(pool, jobs);
        assert!(orchestrator.step());

        // "2" (time 5) departed; "5" took the freed space plus tail.
        let ids: Vec<String> = orchestrator
            .arrival_residents()
            .iter()
            .map(|pcb| pcb.process.id.clone())
            .collect();
        assert_eq!(ids, ["OS", "1", "5"]);
        assert!(orchestrator.waiting_jobs().is_empty());
    }

    #[test]
    fn step_evicts_at_most_one_resident() {
        let pool = pool_with(&[Process::new("1", 100, 10), Process::new("2", 100, 5)]);
        let mut orchestrator = MemoryOrchestrator::from_components(pool, JobQueue::new());

        assert!(orchestrator.step());
        assert_eq!(orchestrator.resident_count(), 2);
        assert!(orchestrator.step());
        assert_eq!(orchestrator.resident_count(), 1);
        assert!(!orchestrator.step());
    }

    #[test]
    fn rejected_job_is_requeued_at_the_tail() {
        // Fill the pool so the oversized head job cannot be admitted
        // even after one eviction.
        let pool = pool_with(&[Process::new("1", 1436, 10), Process::new("2", 100, 5)]);
        let mut jobs = JobQueue::new();
        jobs.offer(Process::new("huge", 2000, 1));
        jobs.offer(Process::new("small", 50, 2));

        let mut orchestrator = MemoryOrchestrator::from_components(pool, jobs);
        assert!(!orchestrator.step());

        // The rejected job lost its place to the one behind it.
        let queued: Vec<String> = orchestrator
            .waiting_jobs()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(queued, ["small", "huge"]);
    }

    #[test]
    fn step_without_waiting_jobs_still_reports_progress() {
        let pool = pool_with(&[Process::new("1", 100, 10)]);
        let mut orchestrator = MemoryOrchestrator::from_components(pool, JobQueue::new());
        assert!(orchestrator.step());
        assert_eq!(orchestrator.resident_count(), 1);
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let pool = pool_with(&[Process::new("1", 100, 10)]);
        let mut jobs = JobQueue::new();
        jobs.offer(Process::new("2", 200, 20));

        let mut orchestrator = MemoryOrchestrator::from_components(pool, jobs);
        orchestrator.reset();

        assert!(orchestrator.is_idle());
        assert_eq!(orchestrator.arrival_residents(), &[OS_PCB.clone()]);
        assert_eq!(orchestrator.hole_count(), 0);
        assert_eq!(orchestrator.compaction_count(), 0);
    }
}
