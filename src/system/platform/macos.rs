use libproc::libproc::pid_rusage::{RUsageInfoV2, pidrusage};

use super::{IoStats, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn process_io(pid: u32) -> Option<IoStats> {
        // rusage_info_v2 carries cumulative disk byte counts; the call fails
        // for vanished processes and for other users' processes without
        // elevated privileges.
        let usage = pidrusage::<RUsageInfoV2>(pid as i32).ok()?;
        Some(IoStats {
            read_bytes: usage.ri_diskio_bytesread,
            write_bytes: usage.ri_diskio_byteswritten,
        })
    }
}
