//! Use Cases Layer: Variable-Partition Memory Management
//!
//! Provides the allocation and queueing business logic of the memory
//! simulation: the resident pool with best-fit placement and
//! threshold-triggered compaction, and the FIFO queue of jobs waiting
//! for admission.
//!
//! ## Overview
//!
//! The `usecases_memory_management` crate owns the bookkeeping over
//! the simulated address space. It depends only on the value types in
//! `entities_memory`; driving the simulation (who is evicted when,
//! where new jobs come from) belongs to `usecases_scheduling`.
//!
//! ## Modules
//!
//! - **[`ready_queue`](ready_queue/index.html)**: the resident pool —
//!   admission with best-fit ceiling placement, eviction in scheduling
//!   order, and hole compaction
//!
//! - **[`job_queue`](job_queue/index.html)**: unbounded FIFO of
//!   processes not yet admitted

pub mod job_queue;
pub mod ready_queue;

pub use job_queue::JobQueue;
pub use ready_queue::{PoolError, ReadyQueue, DEFAULT_CAPACITY, DEFAULT_COMPACTION_THRESHOLD};
