use windows_sys::Win32::{
    Foundation::CloseHandle,
    System::Threading::{
        GetProcessIoCounters, IO_COUNTERS, OpenProcess, PROCESS_QUERY_INFORMATION,
    },
};

use super::{IoStats, PlatformExtensions};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn process_io(pid: u32) -> Option<IoStats> {
        unsafe {
            let handle = OpenProcess(PROCESS_QUERY_INFORMATION, 0, pid);
            if handle.is_null() {
                return None;
            }
            let mut counters = std::mem::zeroed::<IO_COUNTERS>();
            let ok = GetProcessIoCounters(handle, &mut counters);
            CloseHandle(handle);
            if ok == 0 {
                return None;
            }
            Some(IoStats {
                read_bytes: counters.ReadTransferCount,
                write_bytes: counters.WriteTransferCount,
            })
        }
    }
}
