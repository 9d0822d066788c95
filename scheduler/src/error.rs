use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Fatal failures of the simulation library.
///
/// Queue underflow is not represented here: queue accessors return
/// `None` and the drivers treat it as an idle CPU. A quantum below 1 is
/// clamped to 1 at the caller boundary and never surfaces as an error.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Backing storage for a process set could not be allocated. The run
    /// fails before any simulation state is produced.
    #[error("process set allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// The process executor failed to launch a real task.
    #[error("failed to spawn task `{name}`: {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The process executor failed while waiting on a launched task.
    #[error("failed to wait on task `{name}`: {source}")]
    Wait {
        name: String,
        #[source]
        source: io::Error,
    },
}
