//! Simulator Binary Entry Point
//!
//! Constructs a memory orchestrator from two seed files and drives
//! admission/eviction steps until nothing makes progress (or a step
//! limit is reached), printing the memory layout along the way.

use std::process;

mod args;
mod render;

use args::SimulatorArgs;
use clap::Parser;
use render::print_layout;
use usecases_scheduling::MemoryOrchestrator;

fn main() {
    env_logger::init();

    let args = SimulatorArgs::parse();
    if let Err(err) = args.validate() {
        eprintln!("Error: {err}");
        process::exit(1);
    }

    let mut builder = MemoryOrchestrator::builder()
        .capacity(args.capacity)
        .compaction_threshold(args.compaction_threshold);
    if let Some(ready) = &args.ready_file {
        builder = builder.ready_source(ready);
    }
    if let Some(jobs) = &args.job_file {
        builder = builder.job_source(jobs);
    }
    let mut orchestrator = builder.build();

    println!("== initial layout ==");
    print_layout(&orchestrator);

    let mut steps = 0;
    loop {
        if args.max_steps.is_some_and(|max| steps >= max) {
            println!("stopped after {steps} step(s)");
            break;
        }
        let progressed = orchestrator.step();
        steps += 1;

        if args.verbose_layout {
            println!("== after step {steps} (progress: {progressed}) ==");
            print_layout(&orchestrator);
        }
        if !progressed && orchestrator.resident_count() == 1 {
            println!("no further progress after {steps} step(s)");
            break;
        }
    }

    println!("== final layout ==");
    print_layout(&orchestrator);
    println!(
        "{} compaction(s), {} job(s) left waiting",
        orchestrator.compaction_count(),
        orchestrator.waiting_jobs().len()
    );
}
