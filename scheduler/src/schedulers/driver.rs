use crate::common_types::{EventKind, Pid, Timestamp, TraceEvent};
use crate::metrics::ScheduleStats;
use crate::process_manager::ProcessSet;
use crate::ready_queue::ReadyQueue;

/// Everything a finished policy run hands back to the caller.
///
/// The renderer and statistics printer consume this by reference; nothing
/// in it can feed back into scheduling decisions.
#[derive(Clone, PartialEq, Debug)]
pub struct ScheduleResult {
    /// The terminated process set, metrics filled in.
    pub processes: ProcessSet,
    /// Ordered trace of everything that happened, tick by tick.
    pub trace: Vec<TraceEvent>,
    /// Total ticks the simulated clock advanced.
    pub total_ticks: usize,
    /// Averages over the per-process metrics.
    pub stats: ScheduleStats,
}

/// Per-run simulation state shared by the four drivers: the discrete
/// clock and the event trace. One value per policy invocation; there is
/// no global clock anywhere.
#[derive(Debug)]
pub(crate) struct SimState {
    clock: Timestamp,
    trace: Vec<TraceEvent>,
}

impl SimState {
    pub(crate) fn new() -> SimState {
        SimState {
            clock: Timestamp::new(0),
            trace: Vec::new(),
        }
    }

    pub(crate) fn clock(&self) -> Timestamp {
        self.clock
    }

    /// Advances the clock by one tick.
    pub(crate) fn tick(&mut self) {
        self.clock = self.clock + 1;
    }

    /// Advances the clock by a full non-preemptive burst at once.
    pub(crate) fn timeskip(&mut self, time: usize) {
        self.clock = self.clock + time;
    }

    /// Records `kind` for `pid` at the current clock.
    pub(crate) fn record(&mut self, pid: Pid, kind: EventKind) {
        self.record_at(self.clock, pid, kind);
    }

    /// Records an event at an explicit tick. Completion events are stamped
    /// one tick past the last executed one, and catch-up arrival events
    /// carry the arrival tick itself, so the trace stays ordered.
    pub(crate) fn record_at(&mut self, time: Timestamp, pid: Pid, kind: EventKind) {
        log::debug!("tick {}: process {} {:?}", time, pid, kind);
        self.trace.push(TraceEvent { time, pid, kind });
    }

    /// Admits every process arriving exactly now into the ready queue.
    ///
    /// Called at the start of each tick, before any preemption check, so
    /// same-tick arrivals queue ahead of a just-preempted process.
    pub(crate) fn admit_arrivals(&mut self, set: &ProcessSet, ready: &mut ReadyQueue) {
        for pcb in set.iter() {
            if pcb.arrival_time() == self.clock && pcb.is_ready() && !ready.contains(pcb.pid())
            {
                self.record(pcb.pid(), EventKind::Arrived);
                ready.enqueue(pcb.pid());
            }
        }
    }

    /// Consumes the state and the terminated set into a result.
    pub(crate) fn finish(self, set: ProcessSet) -> ScheduleResult {
        let stats = ScheduleStats::compute(&set);

        ScheduleResult {
            processes: set,
            trace: self.trace,
            total_ticks: self.clock.get(),
            stats,
        }
    }
}
