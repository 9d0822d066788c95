use crate::common_types::{Pid, Timestamp};
use crate::error::SchedulerError;
use crate::process_control_block::ProcessControlBlock;

/// The owned, index-addressable arena of PCBs a policy schedules over.
///
/// The set owns every PCB for the full simulation; ready queues hold pid
/// handles into it, never copies, so a mutation through a handle is seen
/// by the set itself. Pids are assigned monotonically starting at 1.
#[derive(Clone, PartialEq, Debug)]
pub struct ProcessSet {
    procs: Vec<ProcessControlBlock>,
    next_pid: usize,
}

impl Default for ProcessSet {
    fn default() -> Self {
        ProcessSet::new()
    }
}

impl ProcessSet {
    pub fn new() -> ProcessSet {
        ProcessSet {
            procs: Vec::new(),
            next_pid: 1,
        }
    }

    /// Like [`ProcessSet::new`], but pre-allocates room for `capacity`
    /// processes, reporting allocation failure instead of aborting.
    pub fn with_capacity(capacity: usize) -> Result<ProcessSet, SchedulerError> {
        let mut procs = Vec::new();
        procs.try_reserve(capacity)?;

        Ok(ProcessSet {
            procs,
            next_pid: 1,
        })
    }

    /// Adds a simulated process to the set and returns its pid.
    ///
    /// * `name` - informational label
    /// * `priority` - higher value is scheduled first (Priority policy only)
    /// * `arrival_time` - tick at which the process becomes eligible
    /// * `service_time` - total CPU ticks required, at least 1
    pub fn spawn(
        &mut self,
        name: &str,
        priority: i8,
        arrival_time: usize,
        service_time: usize,
    ) -> Pid {
        let pid = Pid::new(self.next_pid);
        self.next_pid += 1;

        self.procs.push(ProcessControlBlock::new(
            pid,
            name,
            priority,
            Timestamp::new(arrival_time),
            service_time,
        ));

        pid
    }

    /// The built-in five-process test set: name, priority, arrival, service.
    pub fn demo() -> ProcessSet {
        let fixture = [
            ("A", 3, 0, 3),
            ("B", 5, 1, 6),
            ("C", 1, 3, 4),
            ("D", 4, 5, 2),
            ("E", 2, 6, 5),
        ];

        let mut set = ProcessSet::new();
        for (name, priority, arrival_time, service_time) in fixture {
            set.spawn(name, priority, arrival_time, service_time);
        }

        set
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessControlBlock> {
        self.procs.iter()
    }

    pub fn get(&self, pid: Pid) -> Option<&ProcessControlBlock> {
        self.procs.iter().find(|pcb| pcb.pid() == pid)
    }

    /// Position of `pid` in the arena, if present.
    pub(crate) fn index_of(&self, pid: Pid) -> Option<usize> {
        self.procs.iter().position(|pcb| pcb.pid() == pid)
    }

    pub(crate) fn at(&self, index: usize) -> &ProcessControlBlock {
        &self.procs[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut ProcessControlBlock {
        &mut self.procs[index]
    }

    /// Stable sort by arrival time; arrival ties keep their original
    /// index order, which is the tie-break every policy relies on.
    pub(crate) fn sort_by_arrival(&mut self) {
        self.procs.sort_by_key(|pcb| pcb.arrival_time());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pids_are_monotonic_from_one() {
        let mut set = ProcessSet::new();
        let first = set.spawn("one", 0, 0, 1);
        let second = set.spawn("two", 0, 0, 1);

        assert_eq!(first, Pid::new(1));
        assert_eq!(second, Pid::new(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn demo_set_matches_fixture() {
        let set = ProcessSet::demo();

        assert_eq!(set.len(), 5);
        let arrivals: Vec<usize> =
            set.iter().map(|pcb| pcb.arrival_time().get()).collect();
        let services: Vec<usize> = set.iter().map(|pcb| pcb.service_time()).collect();

        assert_eq!(arrivals, [0, 1, 3, 5, 6]);
        assert_eq!(services, [3, 6, 4, 2, 5]);
    }

    #[test]
    fn arrival_sort_is_stable() {
        let mut set = ProcessSet::new();
        set.spawn("late", 0, 4, 1);
        set.spawn("first-tie", 0, 2, 1);
        set.spawn("second-tie", 0, 2, 1);
        set.sort_by_arrival();

        let names: Vec<&str> = set.iter().map(|pcb| pcb.name()).collect();
        assert_eq!(names, ["first-tie", "second-tie", "late"]);
    }

    #[test]
    fn lookup_by_pid_survives_sorting() {
        let mut set = ProcessSet::new();
        let late = set.spawn("late", 0, 9, 1);
        set.spawn("early", 0, 0, 1);
        set.sort_by_arrival();

        assert_eq!(set.get(late).map(|pcb| pcb.name()), Some("late"));
        assert_eq!(set.index_of(late), Some(1));
    }

    #[test]
    fn with_capacity_reserves() {
        let set = ProcessSet::with_capacity(8).unwrap();
        assert!(set.is_empty());
    }
}
