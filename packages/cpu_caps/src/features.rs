use bitflags::bitflags;

bitflags! {
    /// Optional instruction-set extensions reported by the running hardware.
    ///
    /// The bit layout is family-specific: bits below 32 describe 32-bit ARM
    /// extensions, bits from 32 up describe x86 extensions. A bit is only
    /// ever set when the evidence for it is solid; when the kernel-provided
    /// signals are ambiguous or missing, the corresponding bit stays clear.
    /// Code selecting specialized kernels must therefore treat a clear bit
    /// as "unavailable", never as "unknown".
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct CpuFeatures: u64 {
        /// The core implements the ARMv7-A baseline instruction set.
        const ARMV7 = 1 << 0;

        /// VFPv2 floating point.
        const VFPV2 = 1 << 1;

        /// VFPv3 floating point. Covers both the D16 and D32 register-bank
        /// variants; [`CpuFeatures::VFP_D32`] reports the deeper bank.
        const VFPV3 = 1 << 2;

        /// The floating-point register bank extends to d16-d31.
        const VFP_D32 = 1 << 3;

        /// Half-precision (16-bit) conversion instructions on VFP registers.
        const VFP_FP16 = 1 << 4;

        /// Fused multiply-accumulate on VFP (scalar) registers.
        const VFP_FMA = 1 << 5;

        /// NEON, the ARM Advanced SIMD extension.
        const NEON = 1 << 6;

        /// Fused multiply-accumulate on NEON (vector) registers.
        const NEON_FMA = 1 << 7;

        /// Exclusive-access load/store instructions (`ldrex`/`strex`),
        /// available from ARMv6.
        const LDREX_STREX = 1 << 8;

        /// Integer division instructions in the ARM encoding.
        const IDIV_ARM = 1 << 9;

        /// Integer division instructions in the Thumb-2 encoding.
        const IDIV_THUMB2 = 1 << 10;

        /// The iWMMXt SIMD extension found on some Marvell cores.
        const IWMMXT = 1 << 11;

        /// Supplemental SSE3 instructions.
        const SSSE3 = 1 << 32;

        /// The `popcnt` instruction.
        const POPCNT = 1 << 33;

        /// The `movbe` instruction. Only reported on processors carrying the
        /// Intel vendor signature, where the flag is trustworthy.
        const MOVBE = 1 << 34;
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CpuFeatures: Copy, Debug, Send, Sync);

    #[test]
    fn default_is_empty() {
        assert!(CpuFeatures::default().is_empty());
    }

    #[test]
    fn bits_are_distinct() {
        let all = CpuFeatures::all();

        assert_eq!(
            all.iter().count(),
            all.bits().count_ones() as usize,
            "every named capability must occupy its own bit"
        );
    }
}
