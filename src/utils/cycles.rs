//! Hardware cycle counter reads.
//!
//! Per-architecture implementations behind one `read_cycles` entry point.
//! Only compiled under the `cpu_cycles` feature.

/// Current cycle counter / fixed-frequency timer value.
///
/// x86_64/x86: RDTSC fenced on both sides, so neighboring instructions
/// cannot drift into the measured region. aarch64: CNTVCT_EL0, a
/// fixed-frequency timer rather than true cycles, but consistent across
/// cores and readable from userspace.
#[inline(always)]
pub fn read_cycles() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_tsc_x86_64()
    }

    #[cfg(target_arch = "x86")]
    {
        read_tsc_x86()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_cntvct()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
        compile_error!(
            "the cpu_cycles feature needs x86, x86_64, or aarch64; build with --features use_time"
        );
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_tsc_x86_64() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        let tsc = _rdtsc();
        _mm_lfence();
        tsc
    }
}

#[cfg(target_arch = "x86")]
#[inline(always)]
fn read_tsc_x86() -> u64 {
    use core::arch::x86::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        let tsc = _rdtsc();
        _mm_lfence();
        tsc
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cntvct() -> u64 {
    let val: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}
