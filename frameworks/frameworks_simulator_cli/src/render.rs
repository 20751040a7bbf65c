//! Text Rendering
//!
//! Prints the presentation snapshots: resident blocks in arrival
//! order, the hole set, and the waiting jobs.

use usecases_scheduling::MemoryOrchestrator;

/// Print the full memory layout of the simulation to stdout.
pub fn print_layout(orchestrator: &MemoryOrchestrator) {
    println!("resident blocks (arrival order):");
    for pcb in orchestrator.arrival_residents() {
        println!("  {pcb}");
    }

    if orchestrator.hole_count() == 0 {
        println!("holes: none");
    } else {
        println!("holes:");
        for hole in orchestrator.holes() {
            println!("  {hole}");
        }
    }

    let waiting = orchestrator.waiting_jobs();
    if waiting.is_empty() {
        println!("waiting jobs: none");
    } else {
        println!("waiting jobs:");
        for job in &waiting {
            println!("  {job}");
        }
    }

    println!(
        "remaining capacity: {} unit(s) across {} resident block(s)",
        orchestrator.remaining_capacity(),
        orchestrator.resident_count()
    );
}
