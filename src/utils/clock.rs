//! Monotonic and process-CPU clocks behind one narrow interface.
//!
//! Consumers ask for nanoseconds of monotonic time or microseconds of
//! CPU time; the syscalls stay inside the per-target `platform` module.

#[cfg(target_os = "linux")]
mod platform {
    pub fn monotonic_nanos() -> u64 {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        unsafe {
            libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts);
        }
        ts.tv_sec as u64 * 1_000_000_000 + ts.tv_nsec as u64
    }

    pub fn process_cpu_micros() -> Option<i64> {
        let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
        if unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) } != 0 {
            return None;
        }
        let sec = usage.ru_utime.tv_sec as i64 + usage.ru_stime.tv_sec as i64;
        let usec = usage.ru_utime.tv_usec as i64 + usage.ru_stime.tv_usec as i64;
        Some(sec * 1_000_000 + usec)
    }
}

#[cfg(all(unix, not(target_os = "linux")))]
mod platform {
    // gettimeofday is wall time, not strictly monotonic; close enough for
    // run-total reporting on the remaining unixes.
    pub fn monotonic_nanos() -> u64 {
        let mut tv = libc::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        unsafe {
            libc::gettimeofday(&mut tv, std::ptr::null_mut());
        }
        tv.tv_sec as u64 * 1_000_000_000 + tv.tv_usec as u64 * 1_000
    }

    pub fn process_cpu_micros() -> Option<i64> {
        let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
        if unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) } != 0 {
            return None;
        }
        let sec = usage.ru_utime.tv_sec as i64 + usage.ru_stime.tv_sec as i64;
        let usec = usage.ru_utime.tv_usec as i64 + usage.ru_stime.tv_usec as i64;
        Some(sec * 1_000_000 + usec)
    }
}

#[cfg(not(unix))]
mod platform {
    use std::sync::OnceLock;
    use std::time::Instant;

    fn anchor() -> Instant {
        static ANCHOR: OnceLock<Instant> = OnceLock::new();
        *ANCHOR.get_or_init(Instant::now)
    }

    pub fn monotonic_nanos() -> u64 {
        anchor().elapsed().as_nanos() as u64
    }

    pub fn process_cpu_micros() -> Option<i64> {
        None
    }
}

/// Monotonic timestamp in nanoseconds. The zero point is unspecified;
/// only differences mean anything.
#[inline]
pub fn monotonic_nanos() -> u64 {
    platform::monotonic_nanos()
}

/// Monotonic timestamp in microseconds.
#[inline]
pub fn monotonic_micros() -> i64 {
    (platform::monotonic_nanos() / 1_000) as i64
}

/// User plus system CPU time consumed by the process so far, where the
/// OS exposes it.
pub fn process_cpu_micros() -> Option<i64> {
    platform::process_cpu_micros()
}
