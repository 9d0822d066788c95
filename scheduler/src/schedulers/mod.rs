//! The four scheduling policies and the driver state they share.
//!
//! Each policy owns its process set for the duration of one `run` call
//! and hands everything back inside a [`ScheduleResult`].

mod driver;
pub use driver::ScheduleResult;

mod fcfs;
pub use fcfs::FcfsScheduler;

mod round_robin;
pub use round_robin::RoundRobinScheduler;

mod priority;
pub use priority::PriorityScheduler;

mod sjf;
pub use sjf::SjfScheduler;
