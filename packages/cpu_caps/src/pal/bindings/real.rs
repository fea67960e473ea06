use crate::pal::{Bindings, CpuidRegisters};

/// Hardware query bindings for the real processor that the build is
/// targeting.
///
/// You would only use different bindings in unit tests that need to simulate
/// specific processor responses. Even then, whenever possible, tests should
/// use the real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

impl Bindings for BuildTargetBindings {
    #[cfg(target_arch = "x86")]
    fn cpuid(&self, selector: u32) -> CpuidRegisters {
        // SAFETY: The instruction is supported by every 32-bit x86 processor
        // capable of running this code; the intrinsic preserves the frame
        // registers that position-independent code reserves.
        let registers = unsafe { core::arch::x86::__cpuid(selector) };

        CpuidRegisters {
            eax: registers.eax,
            ebx: registers.ebx,
            ecx: registers.ecx,
            edx: registers.edx,
        }
    }

    #[cfg(target_arch = "x86_64")]
    fn cpuid(&self, selector: u32) -> CpuidRegisters {
        // SAFETY: The instruction is part of the x86_64 baseline; the
        // intrinsic preserves the frame registers that position-independent
        // code reserves.
        let registers = unsafe { core::arch::x86_64::__cpuid(selector) };

        CpuidRegisters {
            eax: registers.eax,
            ebx: registers.ebx,
            ecx: registers.ecx,
            edx: registers.edx,
        }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    fn cpuid(&self, _selector: u32) -> CpuidRegisters {
        CpuidRegisters::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[test]
    fn vendor_query_yields_nonzero_identity() {
        let registers = BuildTargetBindings.cpuid(0);

        // Selector 0 returns the vendor signature; no real processor
        // responds with all-zero identity words.
        assert_ne!((registers.ebx, registers.ecx, registers.edx), (0, 0, 0));
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    #[test]
    fn query_without_instruction_yields_zeroes() {
        assert_eq!(BuildTargetBindings.cpuid(0), CpuidRegisters::default());
    }
}
