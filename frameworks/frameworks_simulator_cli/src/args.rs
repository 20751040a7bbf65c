//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing of the simulator driver.

use std::path::PathBuf;

use clap::Parser;
use usecases_memory_management::{DEFAULT_CAPACITY, DEFAULT_COMPACTION_THRESHOLD};

/// Variable-partition memory simulator arguments
#[derive(Parser, Debug)]
#[command(name = "vpsim")]
#[command(about = "Variable-partition memory management simulator")]
pub struct SimulatorArgs {
    /// File seeding the initially resident processes (one
    /// "<id> <size> <time>" per line)
    #[arg(long)]
    pub ready_file: Option<PathBuf>,

    /// File seeding the waiting job queue (same line format)
    #[arg(long)]
    pub job_file: Option<PathBuf>,

    /// Total size of the simulated address space, in memory units
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Hole count above which eviction triggers compaction
    #[arg(long, default_value_t = DEFAULT_COMPACTION_THRESHOLD)]
    pub compaction_threshold: usize,

    /// Stop after this many scheduling steps (default: run until no
    /// step makes progress)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Print the full memory layout after every step, not only at
    /// the start and the end
    #[arg(long)]
    pub verbose_layout: bool,
}

impl SimulatorArgs {
    /// Validate argument combinations.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity < entities_memory::OS_SIZE {
            return Err(format!(
                "capacity {} cannot hold the {}-unit OS reservation",
                self.capacity,
                entities_memory::OS_SIZE
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_match_the_pool_defaults() {
        let args = SimulatorArgs::parse_from(["vpsim"]);
        assert_eq!(args.capacity, DEFAULT_CAPACITY);
        assert_eq!(args.compaction_threshold, DEFAULT_COMPACTION_THRESHOLD);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn rejects_a_capacity_below_the_reservation() {
        let args = SimulatorArgs::parse_from(["vpsim", "--capacity", "100"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn parses_source_paths() {
        let args = SimulatorArgs::parse_from([
            "vpsim",
            "--ready-file",
            "ready.txt",
            "--job-file",
            "jobs.txt",
            "--max-steps",
            "5",
        ]);
        assert_eq!(args.ready_file.as_deref(), Some(Path::new("ready.txt")));
        assert_eq!(args.job_file.as_deref(), Some(Path::new("jobs.txt")));
        assert_eq!(args.max_steps, Some(5));
    }
}
