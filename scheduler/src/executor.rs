//! Capability-abstracted launching of real OS processes.
//!
//! The simulation core never spawns anything: it schedules PCBs with a
//! simulated service budget. Demos that want real child processes inject a
//! [`ProcessExecutor`] instead, which keeps the core testable without
//! forking. The trait is deliberately tiny: spawn a task, wait for it.

use crate::error::SchedulerError;
use std::process::{Child, Command};

/// Description of one real task handed to an executor.
#[derive(Clone, Debug)]
pub struct TaskDescriptor {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

impl TaskDescriptor {
    pub fn new(name: &str, program: &str) -> TaskDescriptor {
        TaskDescriptor {
            name: name.to_string(),
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: &str) -> TaskDescriptor {
        self.args.push(arg.to_string());
        self
    }
}

/// Exit status of a finished task.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ExitStatus(Option<i32>);

impl ExitStatus {
    /// Returns the exit code, if the task exited normally.
    pub fn code(&self) -> Option<i32> {
        self.0
    }

    pub fn success(&self) -> bool {
        self.0 == Some(0)
    }
}

/// Launches tasks and wait-joins them individually.
///
/// Each spawned unit is independent; executor latency never feeds back
/// into scheduling decisions, which operate on simulated service time.
pub trait ProcessExecutor {
    type Handle;

    fn spawn(&mut self, task: TaskDescriptor) -> Result<Self::Handle, SchedulerError>;

    fn wait(&mut self, handle: Self::Handle) -> Result<ExitStatus, SchedulerError>;
}

/// Handle on a running child process.
pub struct ExecHandle {
    name: String,
    child: Child,
}

impl ExecHandle {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The standard executor, backed by `std::process::Command`.
#[derive(Default)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    type Handle = ExecHandle;

    fn spawn(&mut self, task: TaskDescriptor) -> Result<ExecHandle, SchedulerError> {
        log::debug!("spawning task `{}`: {} {:?}", task.name, task.program, task.args);

        let child = Command::new(&task.program)
            .args(&task.args)
            .spawn()
            .map_err(|source| SchedulerError::Spawn {
                name: task.name.clone(),
                source,
            })?;

        Ok(ExecHandle {
            name: task.name,
            child,
        })
    }

    fn wait(&mut self, mut handle: ExecHandle) -> Result<ExitStatus, SchedulerError> {
        let status = handle
            .child
            .wait()
            .map_err(|source| SchedulerError::Wait {
                name: handle.name.clone(),
                source,
            })?;

        log::debug!("task `{}` exited with {:?}", handle.name, status.code());
        Ok(ExitStatus(status.code()))
    }
}
