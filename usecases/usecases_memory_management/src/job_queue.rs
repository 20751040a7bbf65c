//! Job Queue
//!
//! Unbounded FIFO of processes waiting for admission into the
//! resident pool. Jobs enter at the tail and leave from the head; a
//! job whose admission fails is re-offered at the tail, losing its
//! place to the jobs behind it.

use std::collections::VecDeque;
use std::fmt;

use entities_memory::Process;

/// FIFO of processes not yet admitted.
#[derive(Debug, Default)]
pub struct JobQueue {
    queue: VecDeque<Process>,
}

impl JobQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append a job at the tail.
    pub fn offer(&mut self, process: Process) {
        self.queue.push_back(process);
    }

    /// Append a batch of jobs at the tail, in order.
    pub fn offer_all<I>(&mut self, processes: I)
    where
        I: IntoIterator<Item = Process>,
    {
        self.queue.extend(processes);
    }

    /// Remove and return the head, or `None` when empty.
    pub fn poll(&mut self) -> Option<Process> {
        self.queue.pop_front()
    }

    /// The head, without removing it.
    pub fn peek(&self) -> Option<&Process> {
        self.queue.front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Drop all queued jobs.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// The queued jobs, head first.
    pub fn jobs(&self) -> impl Iterator<Item = &Process> {
        self.queue.iter()
    }
}

impl fmt::Display for JobQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, process) in self.queue.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{process}")?;
        }
        write!(f, "]")
    }
}
