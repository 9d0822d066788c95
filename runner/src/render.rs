//! Rendering of simulation results.
//!
//! Every function here is a pure reader over a [`ScheduleResult`]: the
//! renderer borrows the trace and the terminated set and can never feed
//! anything back into scheduling decisions.

use crossterm::style::Stylize;
use schedsim::{EventKind, Pid, ScheduleResult, TraceEvent};

const TIMELINE_WIDTH: usize = 60;

/// Prints the full report: event narration, statistics table, timeline.
pub fn print_report(title: &str, result: &ScheduleResult) {
    println!("{}", format!("=== {} ===", title).bold());
    println!();

    print_events(result);
    print_table(result);
    print_timeline(result);
}

fn process_name(result: &ScheduleResult, pid: Pid) -> String {
    result
        .processes
        .get(pid)
        .map(|pcb| pcb.name().to_string())
        .unwrap_or_default()
}

/// One narration line per trace event, colored by event kind.
pub fn print_events(result: &ScheduleResult) {
    for event in &result.trace {
        let name = process_name(result, event.pid);
        let line = match event.kind {
            EventKind::Arrived => {
                format!("tick {}: process [{}] {} arrived", event.time, event.pid, name).blue()
            }
            EventKind::Dispatched => format!(
                "tick {}: process [{}] {} dispatched",
                event.time, event.pid, name
            )
            .green(),
            EventKind::Preempted => format!(
                "tick {}: process [{}] {} preempted, back to the queue",
                event.time, event.pid, name
            )
            .yellow(),
            EventKind::Completed => format!(
                "tick {}: process [{}] {} completed",
                event.time, event.pid, name
            )
            .green(),
        };
        println!("{}", line);
    }
    println!();
}

/// Per-process statistics table plus the averages underneath.
pub fn print_table(result: &ScheduleResult) {
    let rule = "-".repeat(78);

    println!("{}", rule);
    println!(
        "| {:>3} | {:<10} | {:>7} | {:>7} | {:>8} | {:>10} | {:>8} | {:>7} |",
        "pid", "name", "arrival", "service", "complete", "turnaround", "weighted", "waiting"
    );
    println!("{}", rule);

    for pcb in result.processes.iter() {
        if let Some(metrics) = pcb.metrics() {
            println!(
                "| {:>3} | {:<10} | {:>7} | {:>7} | {:>8} | {:>10} | {:>8.2} | {:>7} |",
                pcb.pid(),
                pcb.name(),
                pcb.arrival_time(),
                pcb.service_time(),
                metrics.completion_time,
                metrics.turnaround_time,
                metrics.weighted_turnaround,
                metrics.waiting_time
            );
        }
    }

    println!("{}", rule);
    println!(
        "{}",
        format!(
            "average turnaround: {:.2}   weighted: {:.2}   waiting: {:.2}",
            result.stats.avg_turnaround,
            result.stats.avg_weighted_turnaround,
            result.stats.avg_waiting
        )
        .yellow()
    );
    println!();
}

/// Execution timeline, one row per process: `>` arrival, `<` completion,
/// `=` the ticks it actually held the CPU (taken from the trace, not
/// approximated from arrival and completion).
pub fn print_timeline(result: &ScheduleResult) {
    let total = result.total_ticks;
    if total == 0 {
        return;
    }

    println!("{}", format!("timeline over {} ticks:", total).cyan());

    for pcb in result.processes.iter() {
        let mut row = vec!['.'; TIMELINE_WIDTH + 1];

        for (begin, end) in run_intervals(&result.trace, pcb.pid()) {
            for tick in begin..end {
                row[tick * TIMELINE_WIDTH / total] = '=';
            }
        }

        row[pcb.arrival_time().get() * TIMELINE_WIDTH / total] = '>';
        if let Some(metrics) = pcb.metrics() {
            row[metrics.completion_time.get() * TIMELINE_WIDTH / total] = '<';
        }

        print!("{:<10} ", pcb.name());
        for cell in row {
            match cell {
                '>' => print!("{}", cell.green()),
                '<' => print!("{}", cell.red()),
                '=' => print!("{}", cell.cyan()),
                _ => print!("{}", cell),
            }
        }
        println!();
    }
}

/// Half-open [dispatch, stop) CPU intervals for `pid`, rebuilt from the
/// ordered trace.
fn run_intervals(trace: &[TraceEvent], pid: Pid) -> Vec<(usize, usize)> {
    let mut intervals = Vec::new();
    let mut started = None;

    for event in trace.iter().filter(|event| event.pid == pid) {
        match event.kind {
            EventKind::Dispatched => started = Some(event.time.get()),
            EventKind::Preempted | EventKind::Completed => {
                if let Some(begin) = started.take() {
                    intervals.push((begin, event.time.get()));
                }
            }
            EventKind::Arrived => {}
        }
    }

    intervals
}
