use std::fmt;
use std::ops::Add;

/// Process identifier.
///
/// Pids are positive, assigned monotonically by the process set and
/// never reused within a simulation run.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Pid(usize);

impl Pid {
    /// Creates a new Pid object
    ///
    /// * `pid` - the process identifier as usize
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Add<usize> for Pid {
    type Output = Pid;

    fn add(self, rhs: usize) -> Self::Output {
        Pid::new(self.0 + rhs)
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A point on the simulated clock, counted in ticks since the run started.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp(usize);

impl Timestamp {
    /// Creates a new Timestamp object
    ///
    /// * `time` - inital value of the Timestamp
    pub fn new(time: usize) -> Timestamp {
        Timestamp(time)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Add<usize> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: usize) -> Self::Output {
        Timestamp::new(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// What happened to a process at a given tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventKind {
    /// The process became eligible for scheduling.
    Arrived,
    /// The process was handed the CPU.
    Dispatched,
    /// The process lost the CPU with work remaining (Round-Robin only).
    Preempted,
    /// The process finished its service time.
    Completed,
}

/// One entry of the ordered event trace a policy produces.
///
/// The trace is the only channel between the simulation core and the
/// renderer; it carries no mutable access back into the process set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TraceEvent {
    pub time: Timestamp,
    pub pid: Pid,
    pub kind: EventKind,
}
