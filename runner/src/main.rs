mod demo;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use schedsim::{run_fcfs, run_priority, run_round_robin, run_sjf, ProcessSet};
use std::num::NonZeroUsize;

#[derive(Parser)]
#[command(
    name = "schedsim",
    about = "Discrete-time CPU scheduling simulator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// First-come-first-served over the built-in process set
    Fcfs,
    /// Preemptive round-robin over the built-in process set
    RoundRobin {
        /// Time quantum in ticks; values below 1 are clamped to 1
        #[arg(short, long, default_value_t = 2)]
        quantum: usize,
    },
    /// Non-preemptive priority scheduling over the built-in process set
    Priority,
    /// Non-preemptive shortest-job-first over the built-in process set
    Sjf,
    /// Spawn real worker processes and wait for each of them
    SpawnDemo,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Fcfs => {
            let result = run_fcfs(ProcessSet::demo());
            render::print_report("First-Come-First-Served (FCFS)", &result);
        }
        Command::RoundRobin { quantum } => {
            // InvalidQuantum is recovered here, at the boundary.
            let quantum = NonZeroUsize::new(quantum).unwrap_or(NonZeroUsize::MIN);
            let result = run_round_robin(ProcessSet::demo(), quantum);
            render::print_report(&format!("Round-Robin (quantum {})", quantum), &result);
        }
        Command::Priority => {
            let result = run_priority(ProcessSet::demo());
            render::print_report("Priority (non-preemptive)", &result);
        }
        Command::Sjf => {
            let result = run_sjf(ProcessSet::demo());
            render::print_report("Shortest-Job-First (non-preemptive)", &result);
        }
        Command::SpawnDemo => demo::run_spawn_demo()?,
    }

    Ok(())
}
