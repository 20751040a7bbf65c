//! Adapters Layer: Process Description Ingestion
//!
//! Reads line-oriented process descriptions into the simulation's
//! entity types.
//!
//! ## Overview
//!
//! Each input line is expected to match `<id> <size> <time>` — an
//! alphanumeric token and two non-negative integers, whitespace
//! separated, with optional trailing whitespace. Lines that do not
//! match the whole-line grammar are silently skipped, and a source
//! that cannot be opened or read yields an empty sequence rather than
//! an error: ingestion failures never surface as faults to the core.
//!
//! ## Modules
//!
//! - **[`reader`](reader/index.html)**: the grammar and the file
//!   reader

pub mod reader;

pub use reader::{parse_line, read_processes};
