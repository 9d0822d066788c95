use crate::common_types::EventKind;
use crate::process_manager::ProcessSet;
use crate::schedulers::driver::{ScheduleResult, SimState};

/// Non-preemptive shortest-job-first.
///
/// Same driver shape as the priority policy, with the selection criterion
/// flipped: the arrived, still-ready process with the minimum original
/// `service_time` wins, ties to the lowest arena index. Comparing service
/// time rather than remaining time makes no difference here, since every
/// selected process runs to completion in a single burst.
pub struct SjfScheduler {
    sim: SimState,
    announced: Vec<bool>,
}

impl SjfScheduler {
    pub fn new() -> SjfScheduler {
        SjfScheduler {
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

    /// Index of the eligible process with the shortest service time,
    /// first index winning ties.
    fn select(&self, set: &ProcessSet) -> Option<usize> {
        let clock = self.sim.clock();
        let mut best: Option<usize> = None;

        for (index, pcb) in set.iter().enumerate() {
            if pcb.arrival_time() > clock || !pcb.is_ready() {
                continue;
            }

            match best {
                Some(current) if set.at(current).service_time() <= pcb.service_time() => {}
                _ => best = Some(index),
            }
        }

        best
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        SjfScheduler::new()
    }
}
