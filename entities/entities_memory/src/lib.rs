//! Entities Layer: Memory Simulation Value Types
//!
//! Provides the immutable value types used by the variable-partition
//! memory simulation: processes, process control blocks (PCBs) and
//! holes (free address ranges).
//!
//! ## Overview
//!
//! The `entities_memory` crate is the innermost layer of the
//! simulator. It knows nothing about placement policy, scheduling or
//! I/O; it only defines the records the upper layers allocate,
//! compare and discard. All three types are plain data with value
//! equality, created by allocation decisions and never mutated in
//! place (a freed PCB becomes a new [`Hole`], not a recycled PCB).
//!
//! ## Modules
//!
//! - **[`process`](process/index.html)**: the [`Process`] description
//!   and its scheduling order, plus the `OS` reservation sentinel
//! - **[`pcb`](pcb/index.html)**: the [`Pcb`] resident block binding a
//!   process to a half-open address range
//! - **[`hole`](hole/index.html)**: the [`Hole`] free range, ordered
//!   for best-fit ceiling lookups

pub mod hole;
pub mod pcb;
pub mod process;

pub use hole::Hole;
pub use pcb::{Pcb, OS_PCB};
pub use process::{Process, OS_PROCESS, OS_SIZE};
