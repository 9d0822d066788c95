use crate::common_types::{Pid, Timestamp};
use crate::metrics::ProcessMetrics;
use std::fmt;

/// The lifecycle state of a simulated process.
///
/// The four policies only move processes between `Ready`, `Running` and
/// `Terminated`. `Blocked` is reserved for the real-process executor path
/// and is never entered by the simulation drivers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProcessState {
    Ready,
    Running,
    Blocked,
    Terminated,
}

impl ProcessState {
    /// Human-readable label, the single source of truth the renderer
    /// keys its display metadata off.
    pub fn label(&self) -> &'static str {
        match self {
            ProcessState::Ready => "ready",
            ProcessState::Running => "running",
            ProcessState::Blocked => "blocked",
            ProcessState::Terminated => "terminated",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Process Control Block: one simulated unit of schedulable work.
///
/// A PCB lives inside a [`ProcessSet`](crate::ProcessSet) for the whole
/// simulation. Only the active scheduling policy mutates it, through the
/// crate-private methods below; callers outside the crate observe it
/// read-only.
#[derive(Clone, PartialEq, Debug)]
pub struct ProcessControlBlock {
    pid: Pid,
    name: String,
    state: ProcessState,
    priority: i8,
    arrival_time: Timestamp,
    service_time: usize,
    remaining_time: usize,
    metrics: Option<ProcessMetrics>,
}

impl ProcessControlBlock {
    pub(crate) fn new(
        pid: Pid,
        name: &str,
        priority: i8,
        arrival_time: Timestamp,
        service_time: usize,
    ) -> ProcessControlBlock {
        debug_assert!(service_time > 0, "a process needs at least one tick of service");

        ProcessControlBlock {
            pid,
            name: name.to_string(),
            state: ProcessState::Ready,
            priority,
            arrival_time,
            service_time,
            remaining_time: service_time,
            metrics: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn priority(&self) -> i8 {
        self.priority
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn service_time(&self) -> usize {
        self.service_time
    }

    pub fn remaining_time(&self) -> usize {
        self.remaining_time
    }

    /// Timing metrics, present exactly when the process has terminated.
    pub fn metrics(&self) -> Option<&ProcessMetrics> {
        self.metrics.as_ref()
    }

    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    /// True while the process is waiting for the CPU.
    pub fn is_ready(&self) -> bool {
        self.state == ProcessState::Ready
    }

    pub(crate) fn set_state(&mut self, new_state: ProcessState) {
        debug_assert!(
            self.state != ProcessState::Terminated,
            "no transition leaves the terminated state"
        );
        self.state = new_state;
    }

    pub(crate) fn set_running(&mut self) {
        self.set_state(ProcessState::Running);
    }

    /// Consume `time` ticks of the remaining service budget.
    pub(crate) fn execute(&mut self, time: usize) {
        debug_assert!(time <= self.remaining_time);
        self.remaining_time -= time;
    }

    /// Terminate the process at tick `completion` and stamp its metrics.
    ///
    /// Called exactly once per process, when `remaining_time` reaches zero.
    pub(crate) fn complete(&mut self, completion: Timestamp) {
        debug_assert_eq!(self.remaining_time, 0);
        debug_assert!(self.metrics.is_none(), "metrics are computed exactly once");

        self.set_state(ProcessState::Terminated);
        self.metrics = Some(ProcessMetrics::at_completion(
            self.arrival_time,
            self.service_time,
            completion,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> ProcessControlBlock {
        ProcessControlBlock::new(Pid::new(1), "A", 3, Timestamp::new(0), 3)
    }

    #[test]
    fn starts_ready_with_full_budget() {
        let pcb = block();

        assert_eq!(pcb.state(), ProcessState::Ready);
        assert_eq!(pcb.remaining_time(), pcb.service_time());
        assert!(pcb.metrics().is_none());
    }

    #[test]
    fn completion_stamps_metrics_once() {
        let mut pcb = block();
        pcb.set_running();
        pcb.execute(3);
        pcb.complete(Timestamp::new(3));

        assert!(pcb.is_terminated());
        let metrics = pcb.metrics().unwrap();
        assert_eq!(metrics.completion_time, Timestamp::new(3));
        assert_eq!(metrics.turnaround_time, 3);
        assert_eq!(metrics.waiting_time, 0);
    }

    #[test]
    fn preemption_returns_to_ready() {
        let mut pcb = block();
        pcb.set_running();
        pcb.execute(1);
        pcb.set_state(ProcessState::Ready);

        assert!(pcb.is_ready());
        assert_eq!(pcb.remaining_time(), 2);
    }

    #[test]
    fn state_labels_follow_variants() {
        assert_eq!(ProcessState::Ready.label(), "ready");
        assert_eq!(ProcessState::Terminated.to_string(), "terminated");
    }
}
