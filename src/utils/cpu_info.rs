//! CPU identification and the run banner.

/// Processor brand string from CPUID extended leaves 0x80000002..=4.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn cpu_brand() -> Option<String> {
    #[cfg(target_arch = "x86")]
    use core::arch::x86::__cpuid;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64::__cpuid;

    // Leaf 0x80000000 reports how far the extended range goes.
    if unsafe { __cpuid(0x8000_0000) }.eax < 0x8000_0004 {
        return None;
    }

    let mut bytes = Vec::with_capacity(48);
    for leaf in 0x8000_0002u32..=0x8000_0004 {
        let regs = unsafe { __cpuid(leaf) };
        for reg in [regs.eax, regs.ebx, regs.ecx, regs.edx] {
            bytes.extend_from_slice(&reg.to_le_bytes());
        }
    }

    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let brand = String::from_utf8_lossy(&bytes[..end]).trim().to_string();
    (!brand.is_empty()).then_some(brand)
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub fn cpu_brand() -> Option<String> {
    None
}

/// Compiler, target, and CPU summary line.
pub fn build_info() -> String {
    let rustc = env!("RUSTC_VERSION");
    let arch = std::env::consts::ARCH;
    let os = std::env::consts::OS;
    match cpu_brand() {
        Some(cpu) => format!("{}, {} {}, cpu: {}", rustc, arch, os, cpu),
        None => format!("{}, {} {}", rustc, arch, os),
    }
}

/// Print the banner a run's log opens with.
pub fn print_build_banner() {
    let rule = "-".repeat(96);
    println!("{}", rule);
    println!("{}", build_info());
    println!("{}", rule);
}
