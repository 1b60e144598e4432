use super::{IoStats, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn process_io(pid: u32) -> Option<IoStats> {
        // /proc/{pid}/io holds cumulative byte counters; readable for our own
        // processes, EACCES for others unless privileged. Either failure mode
        // surfaces as None.
        let path = format!("/proc/{pid}/io");
        let contents = std::fs::read_to_string(path).ok()?;
        let mut read_bytes = None;
        let mut write_bytes = None;
        for line in contents.lines() {
            if let Some(val) = line.strip_prefix("read_bytes: ") {
                read_bytes = val.trim().parse().ok();
            } else if let Some(val) = line.strip_prefix("write_bytes: ") {
                write_bytes = val.trim().parse().ok();
            }
        }
        Some(IoStats {
            read_bytes: read_bytes?,
            write_bytes: write_bytes?,
        })
    }
}
