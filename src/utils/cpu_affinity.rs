//! Thread-to-core pinning behind one narrow interface.
//!
//! Samples are taken with the thread pinned so the scheduler cannot
//! migrate it mid-measurement. Callers see pin/unpin and an RAII guard;
//! everything OS-specific stays inside the per-target `platform` module.

// ============================================================================
// Linux: sched_{get,set}affinity via libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;
    use std::mem;

    thread_local! {
        static SAVED_MASK: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn core_count() -> Option<usize> {
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        (n > 0).then_some(n as usize)
    }

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    pub fn save_affinity() -> bool {
        let mut set: libc::cpu_set_t = unsafe { mem::zeroed() };
        let ok = unsafe { libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut set) }
            == 0;
        if ok {
            SAVED_MASK.with(|cell| *cell.borrow_mut() = Some(set));
        }
        ok
    }

    pub fn set_affinity(core: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity() -> bool {
        SAVED_MASK.with(|cell| match cell.borrow_mut().take() {
            Some(set) => unsafe {
                libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

// ============================================================================
// macOS: no real affinity without private APIs; pinning is a no-op that
// reports failure so callers know samples can migrate
// ============================================================================

#[cfg(target_os = "macos")]
mod platform {
    pub fn core_count() -> Option<usize> {
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        (n > 0).then_some(n as usize)
    }

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save_affinity() -> bool {
        true
    }

    pub fn set_affinity(_core: usize) -> bool {
        false
    }

    pub fn restore_affinity() -> bool {
        true
    }
}

// ============================================================================
// Windows: SetThreadAffinityMask
// ============================================================================

#[cfg(target_os = "windows")]
mod platform {
    use std::cell::RefCell;

    type Handle = *mut std::ffi::c_void;

    extern "system" {
        fn GetCurrentThread() -> Handle;
        fn SetThreadAffinityMask(thread: Handle, mask: usize) -> usize;
        fn GetSystemInfo(info: *mut SystemInfo);
    }

    #[repr(C)]
    struct SystemInfo {
        processor_architecture: u16,
        reserved: u16,
        page_size: u32,
        min_application_address: *mut std::ffi::c_void,
        max_application_address: *mut std::ffi::c_void,
        active_processor_mask: usize,
        number_of_processors: u32,
        processor_type: u32,
        allocation_granularity: u32,
        processor_level: u16,
        processor_revision: u16,
    }

    thread_local! {
        static SAVED_MASK: RefCell<Option<usize>> = const { RefCell::new(None) };
    }

    fn system_info() -> SystemInfo {
        unsafe {
            let mut info: SystemInfo = std::mem::zeroed();
            GetSystemInfo(&mut info);
            info
        }
    }

    pub fn core_count() -> Option<usize> {
        let n = system_info().number_of_processors as usize;
        (n > 0).then_some(n)
    }

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save_affinity() -> bool {
        unsafe {
            let thread = GetCurrentThread();
            // The API has no getter; setting to the full mask returns the
            // previous one, which is put back immediately.
            let previous = SetThreadAffinityMask(thread, system_info().active_processor_mask);
            if previous == 0 {
                return false;
            }
            SetThreadAffinityMask(thread, previous);
            SAVED_MASK.with(|cell| *cell.borrow_mut() = Some(previous));
            true
        }
    }

    pub fn set_affinity(core: usize) -> bool {
        unsafe { SetThreadAffinityMask(GetCurrentThread(), 1usize << core) != 0 }
    }

    pub fn restore_affinity() -> bool {
        SAVED_MASK.with(|cell| match cell.borrow_mut().take() {
            Some(mask) => unsafe { SetThreadAffinityMask(GetCurrentThread(), mask) != 0 },
            None => false,
        })
    }
}

// ============================================================================
// Everything else: pinning unavailable
// ============================================================================

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod platform {
    pub fn core_count() -> Option<usize> {
        None
    }

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save_affinity() -> bool {
        true
    }

    pub fn set_affinity(_core: usize) -> bool {
        false
    }

    pub fn restore_affinity() -> bool {
        true
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Number of online cores, if the OS reports one.
pub fn core_count() -> Option<usize> {
    platform::core_count()
}

/// Pin the current thread to `core`, saving the old affinity for
/// [`unpin`].
pub fn pin_to_core(core: usize) -> bool {
    platform::save_affinity();
    platform::set_affinity(core)
}

/// Pin the current thread to whichever core it is already running on, so
/// nothing warm moves. Falls back to core zero where the running core is
/// not readable. Returns the pinned core.
pub fn pin_to_current_core() -> Option<usize> {
    let target = platform::current_cpu().unwrap_or(0);
    if core_count()? <= target {
        return None;
    }
    pin_to_core(target).then_some(target)
}

/// Restore the affinity saved by the last pin.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

/// Pins on construction, unpins on drop, panics included.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    /// Core this guard pinned to, if pinning worked.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_count_reported_on_supported_platforms() {
        #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
        assert!(core_count().is_some_and(|n| n >= 1));
    }

    #[test]
    fn test_guard_reports_its_core() {
        let guard = CpuPinGuard::new();
        assert_eq!(guard.is_pinned(), guard.core_id().is_some());
    }

    #[test]
    fn test_guard_can_be_taken_twice_sequentially() {
        let first = CpuPinGuard::new();
        let was_pinned = first.is_pinned();
        drop(first);
        let second = CpuPinGuard::new();
        assert_eq!(second.is_pinned(), was_pinned);
    }

    #[test]
    fn test_pin_unpin_cycle() {
        if pin_to_current_core().is_some() {
            assert!(unpin());
        }
    }
}
