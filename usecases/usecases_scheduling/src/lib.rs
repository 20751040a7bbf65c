//! Use Cases Layer: Admission/Eviction Scheduling
//!
//! Drives the memory simulation: one orchestrator value exclusively
//! owns the resident pool and the job queue, moves waiting jobs into
//! freed memory one step at a time, and exposes read-only snapshots
//! for rendering.
//!
//! ## Overview
//!
//! The `usecases_scheduling` crate sits on top of
//! `usecases_memory_management`. All mutation of the pool and the
//! queue is routed through [`MemoryOrchestrator`]; external layers
//! (a CLI, a GUI) only trigger steps and read snapshots, never touch
//! the containers directly.
//!
//! ## Modules
//!
//! - **[`orchestrator`](orchestrator/index.html)**: the
//!   [`MemoryOrchestrator`] and its builder, which seeds the pool and
//!   the queue from two ingestion sources read concurrently

pub mod orchestrator;

pub use orchestrator::{MemoryOrchestrator, MemoryOrchestratorBuilder};
