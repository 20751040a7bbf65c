//! Line Reader
//!
//! Parses process descriptions of the form `<id> <size> <time>` from
//! a text file, one description per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use entities_memory::Process;
use log::{debug, error, trace};
use regex::Regex;

/// Whole-line grammar for a process description: an alphanumeric id
/// and two non-negative integers, whitespace separated, with trailing
/// whitespace tolerated. Anchored at both ends; leading whitespace
/// does not match.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<id>\w+)\s+(?P<size>\d+)\s+(?P<time>\d+)\s*$")
        .expect("the line pattern is a valid literal")
});

/// Parse a single line, returning `None` when it does not match the
/// grammar (including integer fields too large to represent).
pub fn parse_line(line: &str) -> Option<Process> {
    let captures = LINE_PATTERN.captures(line)?;
    let id = &captures["id"];
    let size = captures["size"].parse().ok()?;
    let time = captures["time"].parse().ok()?;
    Some(Process::new(id, size, time))
}

/// Read every well-formed process description from `path`, in order.
///
/// Malformed lines are skipped; an unreadable source (missing file,
/// I/O error mid-read) yields an empty sequence.
pub fn read_processes(path: &Path) -> Vec<Process> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            error!("failed to open {}: {err}, returning no processes", path.display());
            return Vec::new();
        }
    };

    let mut processes = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("failed to read {}: {err}, returning no processes", path.display());
                return Vec::new();
            }
        };
        if let Some(process) = parse_line(&line) {
            trace!("parsed {process}");
            processes.push(process);
        }
    }
    debug!("read {} process description(s) from {}", processes.len(), path.display());
    processes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_well_formed_lines() {
        let lines = [
            "1 1024 5000",
            "2A 2048 10000",
            "3abs 4096 15000",
            "OS 16384 25000",
            "6  1024  5000 ",
            "7  2048  10000  ",
            "yazan  16384  25000",
        ];
        for line in lines {
            assert!(parse_line(line).is_some(), "should match: {line:?}");
        }
    }

    #[test]
    fn rejects_malformed_lines() {
        let lines = [
            "2 2048.1 10000",
            "3 4096 15000.1",
            " leading 4096 15000",
            "4-12 8192 20000",
            "5 16384A 25000A",
            "67. 1024 5000",
            "7-2048-10000",
            "8_4096_15000",
            "9+8192+20000",
            " 254 123",
            "",
            " ",
            "101638425000",
        ];
        for line in lines {
            assert!(parse_line(line).is_none(), "should not match: {line:?}");
        }
    }

    #[test]
    fn parses_the_captured_fields() {
        let process = parse_line("1 521 10").expect("well-formed line");
        assert_eq!(process, Process::new("1", 521, 10));
    }

    #[test]
    fn rejects_unrepresentable_integers() {
        assert!(parse_line("1 99999999999999999999 10").is_none());
    }
}
