use crate::common_types::EventKind;
use crate::process_manager::ProcessSet;
use crate::ready_queue::ReadyQueue;
use crate::schedulers::driver::{ScheduleResult, SimState};

/// First-come-first-served: dispatch order is admission order into the
/// ready queue, and a dispatched process runs to completion.
pub struct FcfsScheduler {
    sim: SimState,
    ready: ReadyQueue,
    /// Arena index of the running process, if any.
    running: Option<usize>,
}

impl FcfsScheduler {
    pub fn new() -> FcfsScheduler {
        FcfsScheduler {
            sim: SimState::new(),
            ready: ReadyQueue::new(),
            running: None,
        }
    }

    /// Runs the whole simulation over `set`, consuming it and returning
    /// the terminated set, trace and statistics.
    pub fn run(mut self, mut set: ProcessSet) -> ScheduleResult {
        set.sort_by_arrival();
        let total = set.len();
        let mut completed = 0;

        while completed < total {
            self.sim.admit_arrivals(&set, &mut self.ready);

            if self.running.is_none() {
                self.dispatch_next(&mut set);
            }

            if let Some(index) = self.running {
                let pcb = set.at_mut(index);
                pcb.execute(1);
                log::trace!(
                    "tick {}: process {} executing, {} ticks remaining",
                    self.sim.clock(),
                    pcb.pid(),
                    pcb.remaining_time()
                );

                if pcb.remaining_time() == 0 {
                    let completion = self.sim.clock() + 1;
                    pcb.complete(completion);
                    self.sim
                        .record_at(completion, set.at(index).pid(), EventKind::Completed);
                    completed += 1;
                    self.running = None;
                }
            }

            self.sim.tick();
        }

        self.sim.finish(set)
    }

    fn dispatch_next(&mut self, set: &mut ProcessSet) {
        if let Some(pid) = self.ready.dequeue() {
            self.running = set.index_of(pid);
            if let Some(index) = self.running {
                set.at_mut(index).set_running();
                self.sim.record(pid, EventKind::Dispatched);
            }
        }
    }
}

impl Default for FcfsScheduler {
    fn default() -> Self {
        FcfsScheduler::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_types::{EventKind, Pid, Timestamp};

    #[test]
    fn demo_set_completes_in_arrival_order() {
        let result = FcfsScheduler::new().run(ProcessSet::demo());

        let completions: Vec<(usize, usize)> = result
            .trace
            .iter()
            .filter(|event| event.kind == EventKind::Completed)
            .map(|event| (event.pid.get(), event.time.get()))
            .collect();

        assert_eq!(completions, [(1, 3), (2, 9), (3, 13), (4, 15), (5, 20)]);
        assert_eq!(result.total_ticks, 20);
    }

    #[test]
    fn demo_set_metrics() {
        let result = FcfsScheduler::new().run(ProcessSet::demo());

        let first = result.processes.get(Pid::new(1)).unwrap();
        let metrics = first.metrics().unwrap();
        assert_eq!(metrics.completion_time, Timestamp::new(3));
        assert_eq!(metrics.turnaround_time, 3);
        assert_eq!(metrics.waiting_time, 0);

        let second = result.processes.get(Pid::new(2)).unwrap();
        let metrics = second.metrics().unwrap();
        assert_eq!(metrics.turnaround_time, 8);
        assert_eq!(metrics.waiting_time, 2);

        // (3 + 8 + 10 + 10 + 14) / 5
        assert!((result.stats.avg_turnaround - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn arrival_ties_dispatch_in_spawn_order() {
        let mut set = ProcessSet::new();
        let second_spawned = set.spawn("tie-1", 0, 2, 1);
        let first_arriving = set.spawn("tie-0", 0, 0, 1);
        let tie_partner = set.spawn("tie-2", 0, 2, 1);

        let result = FcfsScheduler::new().run(set);

        let dispatches: Vec<Pid> = result
            .trace
            .iter()
            .filter(|event| event.kind == EventKind::Dispatched)
            .map(|event| event.pid)
            .collect();

        assert_eq!(dispatches, [first_arriving, second_spawned, tie_partner]);
    }

    #[test]
    fn idles_through_arrival_gaps() {
        let mut set = ProcessSet::new();
        set.spawn("early", 0, 0, 2);
        set.spawn("late", 0, 5, 2);

        let result = FcfsScheduler::new().run(set);

        assert_eq!(result.total_ticks, 7);
        let late = result.processes.get(Pid::new(2)).unwrap();
        assert_eq!(late.metrics().unwrap().completion_time, Timestamp::new(7));
        assert_eq!(late.metrics().unwrap().waiting_time, 0);
    }

    #[test]
    fn empty_set_is_a_noop() {
        let result = FcfsScheduler::new().run(ProcessSet::new());

        assert_eq!(result.total_ticks, 0);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn single_process_runs_alone() {
        let mut set = ProcessSet::new();
        set.spawn("solo", 0, 0, 4);

        let result = FcfsScheduler::new().run(set);

        assert_eq!(result.total_ticks, 4);
        let solo = result.processes.get(Pid::new(1)).unwrap();
        assert!(solo.is_terminated());
        assert_eq!(solo.metrics().unwrap().waiting_time, 0);
    }
}
