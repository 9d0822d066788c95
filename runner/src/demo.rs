//! Real-process creation and teardown demo.
//!
//! Unlike the simulation, this actually launches OS processes, through the
//! injected `ProcessExecutor` capability. Each worker is spawned, then
//! wait-joined individually; the simulation core is never involved.

use anyhow::Result;
use crossterm::style::Stylize;
use schedsim::{ProcessExecutor, SystemExecutor, TaskDescriptor};

pub fn run_spawn_demo() -> Result<()> {
    let mut executor = SystemExecutor;

    let tasks = [
        TaskDescriptor::new("worker-1", "sh").arg("-c").arg("sleep 1"),
        TaskDescriptor::new("worker-2", "sh").arg("-c").arg("sleep 1"),
        TaskDescriptor::new("worker-3", "sh").arg("-c").arg("sleep 1"),
    ];

    let mut handles = Vec::new();
    for task in tasks {
        println!("{}", format!("spawning {}", task.name).yellow());
        handles.push(executor.spawn(task)?);
    }

    println!("{}", "waiting for the workers to finish...".yellow());
    for handle in handles {
        let name = handle.name().to_string();
        let status = executor.wait(handle)?;

        if status.success() {
            println!("{}", format!("{} exited cleanly", name).green());
        } else {
            println!(
                "{}",
                format!("{} exited with code {:?}", name, status.code()).red()
            );
        }
    }

    println!("{}", "all workers reclaimed".green());
    Ok(())
}
