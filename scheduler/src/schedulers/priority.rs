use crate::common_types::EventKind;
use crate::process_manager::ProcessSet;
use crate::schedulers::driver::{ScheduleResult, SimState};

/// Non-preemptive priority scheduling.
///
/// No ready queue: at every decision point the driver re-scans the whole
/// set for the arrived, still-ready process with the strictly highest
/// priority, ties going to the lowest arena index (creation order, not
/// pid value). The winner runs its full remaining burst in one clock jump.
pub struct PriorityScheduler {
    sim: SimState,
    /// One flag per arena slot, so each arrival is traced exactly once.
    announced: Vec<bool>,
}

impl PriorityScheduler {
    pub fn new() -> PriorityScheduler {
        PriorityScheduler {
            sim: SimState::new(),
            announced: Vec::new(),
        }
    }

    pub fn run(mut self, mut set: ProcessSet) -> ScheduleResult {
        let total = set.len();
        self.announced = vec![false; total];
        let mut completed = 0;

        while completed < total {
            self.announce_arrivals(&set);

            if let Some(index) = self.select(&set) {
                let pcb = set.at_mut(index);
                pcb.set_running();
                let pid = pcb.pid();
                let burst = pcb.remaining_time();
                self.sim.record(pid, EventKind::Dispatched);
                log::trace!(
                    "tick {}: process {} runs an uninterrupted burst of {}",
                    self.sim.clock(),
                    pid,
                    burst
                );

                pcb.execute(burst);
                self.sim.timeskip(burst);
                self.announce_arrivals(&set);

                let completion = self.sim.clock();
                set.at_mut(index).complete(completion);
                self.sim.record(pid, EventKind::Completed);
                completed += 1;
            } else {
                self.sim.tick();
            }
        }

        self.sim.finish(set)
    }

    /// Records an Arrived event, at the arrival tick itself, for every
    /// process the clock has reached. Run again right after a burst so
    /// arrivals inside the jump still land in the trace in order.
    fn announce_arrivals(&mut self, set: &ProcessSet) {
        let mut pending: Vec<usize> = set
            .iter()
            .enumerate()
            .filter(|(index, pcb)| {
                !self.announced[*index] && pcb.arrival_time() <= self.sim.clock()
            })
            .map(|(index, _)| index)
            .collect();
        // A burst can cover several arrival ticks; emit them in tick order.
        pending.sort_by_key(|&index| set.at(index).arrival_time());

        for index in pending {
            self.announced[index] = true;
            let pcb = set.at(index);
            self.sim
                .record_at(pcb.arrival_time(), pcb.pid(), EventKind::Arrived);
        }
    }

    /// Index of the eligible process with the highest priority, first
    /// index winning ties.
    fn select(&self, set: &ProcessSet) -> Option<usize> {
        let clock = self.sim.clock();
        let mut best: Option<usize> = None;

        for (index, pcb) in set.iter().enumerate() {
            if pcb.arrival_time() > clock || !pcb.is_ready() {
                continue;
            }

            match best {
                Some(current) if set.at(current).priority() >= pcb.priority() => {}
                _ => best = Some(index),
            }
        }

        best
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        PriorityScheduler::new()
    }
}
