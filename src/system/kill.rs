use std::fmt;

use sysinfo::{Pid, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System};

/// Outcome of a forceful kill request, one variant per condition the user
/// can hit. Callers branch on this instead of catching errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KillOutcome {
    Killed(u32),
    NotFound(u32),
    Zombie(u32),
    Denied(u32),
}

impl KillOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, KillOutcome::Killed(_))
    }
}

impl fmt::Display for KillOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KillOutcome::Killed(pid) => write!(f, "Process {pid} has been killed."),
            KillOutcome::NotFound(pid) => {
                write!(f, "Failed to kill process {pid}: no such process")
            }
            KillOutcome::Zombie(pid) => {
                write!(f, "Failed to kill process {pid}: process is a zombie")
            }
            KillOutcome::Denied(pid) => {
                write!(f, "Failed to kill process {pid}: permission denied")
            }
        }
    }
}

/// Forcefully terminate `pid` (SIGKILL semantics, no graceful escalation).
pub fn kill_process(sys: &System, pid: u32) -> KillOutcome {
    match sys.process(Pid::from_u32(pid)) {
        None => KillOutcome::NotFound(pid),
        Some(process) => {
            if matches!(process.status(), ProcessStatus::Zombie) {
                // Already dead, only waiting to be reaped; a signal would
                // accomplish nothing.
                return KillOutcome::Zombie(pid);
            }
            if process.kill() {
                KillOutcome::Killed(pid)
            } else {
                KillOutcome::Denied(pid)
            }
        }
    }
}

/// Refresh the process table and kill `pid`. Convenience for the CLI path.
pub fn kill_by_pid(pid: u32) -> KillOutcome {
    let mut sys = System::new();
    let pids = [Pid::from_u32(pid)];
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&pids),
        true,
        ProcessRefreshKind::everything(),
    );
    kill_process(&sys, pid)
}
