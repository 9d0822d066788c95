//! A CPU scheduling simulation library.
//!
//! This library models processes as PCBs with a simulated service budget
//! and drives them through one of four interchangeable policies on a
//! discrete clock, producing per-process timing metrics and an ordered
//! event trace. The engine is single threaded and deterministic: it
//! models concurrency without being implemented concurrently.
//!
//! Build a [`ProcessSet`], pick a policy, and read the returned
//! [`ScheduleResult`]:
//!
//! ```
//! use schedsim::{run_fcfs, ProcessSet};
//!
//! let mut set = ProcessSet::new();
//! set.spawn("editor", 2, 0, 3);
//! set.spawn("compiler", 4, 1, 5);
//!
//! let result = run_fcfs(set);
//! assert_eq!(result.total_ticks, 8);
//! ```

use std::num::NonZeroUsize;

mod common_types;
pub use common_types::{EventKind, Pid, Timestamp, TraceEvent};

mod process_control_block;
pub use process_control_block::{ProcessControlBlock, ProcessState};

mod process_manager;
pub use process_manager::ProcessSet;

mod ready_queue;
pub use ready_queue::ReadyQueue;

mod metrics;
pub use metrics::{ProcessMetrics, ScheduleStats};

mod error;
pub use error::SchedulerError;

mod executor;
pub use executor::{ExecHandle, ExitStatus, ProcessExecutor, SystemExecutor, TaskDescriptor};

mod schedulers;
pub use schedulers::{
    FcfsScheduler, PriorityScheduler, RoundRobinScheduler, ScheduleResult, SjfScheduler,
};

/// Runs the first-come-first-served policy over `processes`.
///
/// Processes are dispatched in arrival order (original spawn order breaks
/// ties) and each runs to completion before the next starts.
pub fn run_fcfs(processes: ProcessSet) -> ScheduleResult {
    FcfsScheduler::new().run(processes)
}

/// Runs the preemptive Round-Robin policy over `processes`.
///
/// * `quantum` - the time quanta a process can run before it is preempted.
///   Values below 1 are unrepresentable; callers clamp at the boundary.
pub fn run_round_robin(processes: ProcessSet, quantum: NonZeroUsize) -> ScheduleResult {
    RoundRobinScheduler::new(quantum).run(processes)
}

/// Runs the non-preemptive priority policy over `processes`: the highest
/// priority among the arrived, ready processes wins each dispatch.
pub fn run_priority(processes: ProcessSet) -> ScheduleResult {
    PriorityScheduler::new().run(processes)
}

/// Runs the non-preemptive shortest-job-first policy over `processes`.
pub fn run_sjf(processes: ProcessSet) -> ScheduleResult {
    SjfScheduler::new().run(processes)
}
