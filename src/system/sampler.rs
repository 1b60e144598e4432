use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use sysinfo::{
    Networks, Pid, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System,
};

use super::platform::{self, IoStats};

/// One process as observed at the end of a sampling cycle. Absent entirely
/// when the process vanished, access was denied, or it turned into a zombie
/// between enumeration and inspection.
#[derive(Clone, Debug)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub running: bool,
}

/// Cumulative byte counters for the designated network interface. One value
/// per capture, system-wide: every report row of a cycle carries the same
/// figures, since the OS does not attribute interface traffic to processes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub received: u64,
    pub transmitted: u64,
}

/// A finished per-process measurement over one sampling interval.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub disk_read_mb: f64,
    pub disk_write_mb: f64,
    pub net_recv_mbit: f64,
    pub net_sent_mbit: f64,
    pub running: bool,
}

const BYTES_PER_MIB: f64 = 1_048_576.0;

pub fn bytes_to_mb(delta: u64) -> f64 {
    delta as f64 / BYTES_PER_MIB
}

pub fn bytes_to_mbit(delta: u64) -> f64 {
    delta as f64 * 8.0 / BYTES_PER_MIB
}

/// Combine a process sample with its start/end counter pairs into one row.
/// Saturating subtraction: a counter that moved backwards (interface reset,
/// PID reuse) contributes a zero delta rather than underflow.
pub fn build_row(
    sample: ProcessSample,
    disk_start: IoStats,
    disk_end: IoStats,
    net_start: NetCounters,
    net_end: NetCounters,
) -> ReportRow {
    ReportRow {
        pid: sample.pid,
        name: sample.name,
        cpu_percent: sample.cpu_percent,
        memory_percent: sample.memory_percent,
        disk_read_mb: bytes_to_mb(disk_end.read_bytes.saturating_sub(disk_start.read_bytes)),
        disk_write_mb: bytes_to_mb(disk_end.write_bytes.saturating_sub(disk_start.write_bytes)),
        net_recv_mbit: bytes_to_mbit(net_end.received.saturating_sub(net_start.received)),
        net_sent_mbit: bytes_to_mbit(net_end.transmitted.saturating_sub(net_start.transmitted)),
        running: sample.running,
    }
}

/// Two-snapshot delta sampler over the live system. Stateless across
/// invocations: construct, run one cycle, discard.
pub struct Sampler {
    sys: System,
    networks: Networks,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    /// Construct with an initial process refresh. This refresh doubles as the
    /// CPU baseline: sysinfo reports per-process CPU as usage since the
    /// previous refresh, so the post-wait refresh in [`run_cycle`] yields CPU
    /// over the same window the disk and network deltas describe.
    ///
    /// [`run_cycle`]: Sampler::run_cycle
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let networks = Networks::new_with_refreshed_list();
        Sampler { sys, networks }
    }

    /// PIDs currently visible, ascending. sysinfo hands back a hash map, so
    /// enumeration order is imposed here to keep report rows deterministic.
    pub fn enumerate(&self) -> Vec<u32> {
        let mut pids: Vec<u32> = self.sys.processes().keys().map(|p| p.as_u32()).collect();
        pids.sort_unstable();
        pids
    }

    /// Cumulative disk counters for `pid`; zeros on any failure, so a process
    /// that disappears or is inaccessible contributes nothing to the delta
    /// math instead of aborting the cycle.
    pub fn capture_disk_counters(&self, pid: u32) -> IoStats {
        platform::process_io(pid).unwrap_or_else(|| {
            debug!("disk counters unavailable for pid {pid}");
            IoStats::default()
        })
    }

    /// Cumulative counters for the first enumerated network interface, along
    /// with its name so the end-of-cycle capture can read the same interface.
    /// Zeros and no name when nothing is enumerable.
    pub fn capture_network_counters(&mut self) -> (Option<String>, NetCounters) {
        self.networks.refresh(true);
        let interface = self.networks.iter().next().map(|(name, _)| name.clone());
        let counters = self.interface_counters(interface.as_deref());
        (interface, counters)
    }

    fn interface_counters(&self, interface: Option<&str>) -> NetCounters {
        let Some(name) = interface else {
            debug!("no network interface enumerable");
            return NetCounters::default();
        };
        match self.networks.iter().find(|(n, _)| n.as_str() == name) {
            Some((_, data)) => NetCounters {
                received: data.total_received(),
                transmitted: data.total_transmitted(),
            },
            None => {
                debug!("network interface {name} vanished mid-cycle");
                NetCounters::default()
            }
        }
    }

    /// Inspect one process from the most recent refresh. `None` for
    /// vanished, denied, or zombie processes; callers drop the row.
    pub fn capture_process_sample(&self, pid: u32) -> Option<ProcessSample> {
        let process = self.sys.process(Pid::from_u32(pid))?;
        let status = process.status();
        if matches!(status, ProcessStatus::Zombie) {
            debug!("pid {pid} is a zombie, dropping");
            return None;
        }
        let total_memory = self.sys.total_memory();
        let memory_percent = if total_memory == 0 {
            0.0
        } else {
            process.memory() as f32 / total_memory as f32 * 100.0
        };
        Some(ProcessSample {
            pid,
            name: process.name().to_string_lossy().to_string(),
            cpu_percent: process.cpu_usage(),
            memory_percent,
            running: !matches!(status, ProcessStatus::Dead),
        })
    }

    /// One full sampling cycle: baseline counters, a blocking wait for the
    /// interval, end counters, then one row per process that survived with
    /// an inspectable record. Consumes at least `interval` of wall clock.
    pub fn run_cycle(&mut self, interval: Duration) -> Vec<ReportRow> {
        let pids = self.enumerate();

        let mut disk_start: HashMap<u32, IoStats> = HashMap::with_capacity(pids.len());
        for &pid in &pids {
            disk_start.insert(pid, self.capture_disk_counters(pid));
        }
        let (interface, net_start) = self.capture_network_counters();

        let started = Instant::now();
        if let Some(remaining) = interval.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }

        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let mut disk_end: HashMap<u32, IoStats> = HashMap::with_capacity(pids.len());
        for &pid in &pids {
            disk_end.insert(pid, self.capture_disk_counters(pid));
        }
        self.networks.refresh(true);
        let net_end = self.interface_counters(interface.as_deref());

        let mut rows = Vec::with_capacity(pids.len());
        for &pid in &pids {
            let Some(sample) = self.capture_process_sample(pid) else {
                continue;
            };
            let start = disk_start.get(&pid).copied().unwrap_or_default();
            let end = disk_end.get(&pid).copied().unwrap_or_default();
            rows.push(build_row(sample, start, end, net_start, net_end));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pid: u32) -> ProcessSample {
        ProcessSample {
            pid,
            name: format!("proc-{pid}"),
            cpu_percent: 1.5,
            memory_percent: 0.25,
            running: true,
        }
    }

    fn io(read_bytes: u64, write_bytes: u64) -> IoStats {
        IoStats {
            read_bytes,
            write_bytes,
        }
    }

    #[test]
    fn disk_delta_converts_to_mb() {
        let row = build_row(
            sample(100),
            io(1_048_576, 0),
            io(3_145_728, 1_048_576),
            NetCounters::default(),
            NetCounters::default(),
        );
        assert_eq!(row.disk_read_mb, 2.0);
        assert_eq!(row.disk_write_mb, 1.0);
    }

    #[test]
    fn net_delta_converts_to_megabits() {
        let start = NetCounters {
            received: 0,
            transmitted: 524_288,
        };
        let end = NetCounters {
            received: 1_048_576,
            transmitted: 1_048_576,
        };
        let row = build_row(sample(1), io(0, 0), io(0, 0), start, end);
        assert_eq!(row.net_recv_mbit, 8.0);
        assert_eq!(row.net_sent_mbit, 4.0);
    }

    #[test]
    fn backwards_counters_yield_zero_delta() {
        let row = build_row(
            sample(7),
            io(4_096, 4_096),
            io(0, 0),
            NetCounters {
                received: 900,
                transmitted: 900,
            },
            NetCounters::default(),
        );
        assert_eq!(row.disk_read_mb, 0.0);
        assert_eq!(row.disk_write_mb, 0.0);
        assert_eq!(row.net_recv_mbit, 0.0);
        assert_eq!(row.net_sent_mbit, 0.0);
    }

    #[test]
    fn vanished_process_contributes_zero_disk_delta() {
        // End-of-cycle read for a dead PID returns the zero default; the
        // saturating delta against any baseline is zero.
        let row = build_row(
            sample(42),
            io(10_485_760, 2_097_152),
            IoStats::default(),
            NetCounters::default(),
            NetCounters::default(),
        );
        assert_eq!(row.disk_read_mb, 0.0);
        assert_eq!(row.disk_write_mb, 0.0);
    }

    #[test]
    fn conversion_helpers() {
        assert_eq!(bytes_to_mb(1_048_576), 1.0);
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mbit(131_072), 1.0);
    }
}
