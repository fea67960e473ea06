//! Turns raw signals into a consistent feature set.
//!
//! The kernel-provided signals are not trustworthy on their own: the
//! capability listing misreports the architecture revision on some ARMv6
//! cores, and the hardware-capability bitmask frequently names only one
//! member of a group of extensions that can only exist together. The rules
//! here encode the dependency relationships between the extensions and apply
//! them in a fixed order, always erring toward claiming less rather than
//! more. Rules only ever add bits, so applying them repeatedly is a no-op.

use tracing::debug;

use crate::cpuinfo::{leading_decimal, token_list_contains};
use crate::detect::RawSignals;
use crate::CpuFeatures;

// Hardware-capability bits as published by the kernel in the auxiliary
// vector. See <asm/hwcap.h>.
const HWCAP_VFP: u32 = 1 << 6;
const HWCAP_IWMMXT: u32 = 1 << 9;
const HWCAP_NEON: u32 = 1 << 12;
const HWCAP_VFPV3: u32 = 1 << 13;
const HWCAP_VFPV3D16: u32 = 1 << 14;
const HWCAP_VFPV4: u32 = 1 << 16;
const HWCAP_IDIVA: u32 = 1 << 17;
const HWCAP_IDIVT: u32 = 1 << 18;

// Identity words of processors manufactured by Intel, in the ebx/ecx/edx
// order used by `RawSignals::vendor_id` ("GenuineIntel").
const VENDOR_INTEL: [u32; 3] = [0x756e_6547, 0x6c65_746e, 0x4965_6e69];

// Extension flag bits of identification query selector 1 (ecx).
const ISA_FLAG_SSSE3: u32 = 1 << 9;
const ISA_FLAG_MOVBE: u32 = 1 << 22;
const ISA_FLAG_POPCNT: u32 = 1 << 23;

/// Revision markers that the kernel embeds in the processor-identity field.
/// A core whose listing claims architecture 7 while carrying this marker is
/// really an ARMv6 part behind a misreporting kernel.
const ELF_FORMAT_V6: &str = "(v6l)";

/// Combines the gathered signals into the final feature set.
///
/// Missing or malformed inputs never fail; each one simply contributes no
/// bits. The rule order is load-bearing: later rules read bits established
/// by earlier ones.
pub(crate) fn infer(signals: &RawSignals) -> CpuFeatures {
    let mut features = CpuFeatures::empty();

    let version = signals
        .arch_version
        .as_deref()
        .and_then(leading_decimal)
        .unwrap_or(0);

    // A reported revision of 7 or above is only tentative evidence of an
    // ARMv7 core. Some kernels report 7 for ARMv6 parts; those betray
    // themselves through the ELF-format marker in the processor identity.
    let mut has_armv7 = version >= 7;

    if has_armv7
        && let Some(processor) = signals.processor_name.as_deref()
        && token_list_contains(processor, ELF_FORMAT_V6)
    {
        debug!(processor, "architecture version and processor identity disagree");
        has_armv7 = false;
    }

    if has_armv7 {
        features |= CpuFeatures::ARMV7;
    }

    // Exclusive-access load/store arrived with ARMv6; this is independent of
    // the revision-7 question above.
    if version >= 6 {
        features |= CpuFeatures::LDREX_STREX;
    }

    if signals.hwcap != 0 {
        let has_vfp = signals.hwcap & HWCAP_VFP != 0;
        let has_vfpv3 = signals.hwcap & HWCAP_VFPV3 != 0;
        let has_vfpv3d16 = signals.hwcap & HWCAP_VFPV3D16 != 0;
        let has_vfpv4 = signals.hwcap & HWCAP_VFPV4 != 0;
        let has_neon = signals.hwcap & HWCAP_NEON != 0;
        let has_idiva = signals.hwcap & HWCAP_IDIVA != 0;
        let has_idivt = signals.hwcap & HWCAP_IDIVT != 0;
        let has_iwmmxt = signals.hwcap & HWCAP_IWMMXT != 0;

        // VFPv4 only exists on top of VFPv3 and brings half-precision
        // conversion and scalar fused multiply-accumulate with it.
        if has_vfpv4 {
            features |= CpuFeatures::VFPV3 | CpuFeatures::VFP_FP16 | CpuFeatures::VFP_FMA;
        }

        // Either register-bank variant proves VFPv3 itself. The plain
        // "vfpv3" flag does not prove the d32 bank: kernels use it for the
        // d16 variant as well, so the deeper bank is only claimed via NEON
        // below.
        if has_vfpv3 || has_vfpv3d16 {
            features |= CpuFeatures::VFPV3;
        }

        // A bare "vfp" flag means VFPv2 on some kernels and VFPv3 on
        // others. Only an established ARMv7 core justifies the deeper
        // reading.
        if has_vfp {
            if features.contains(CpuFeatures::ARMV7) {
                features |= CpuFeatures::VFPV3;
            } else {
                features |= CpuFeatures::VFPV2;
            }
        }

        // NEON registers alias the full d0-d31 bank, so NEON proves VFPv3
        // with d32.
        if has_neon {
            features |= CpuFeatures::VFPV3 | CpuFeatures::NEON | CpuFeatures::VFP_D32;

            if has_vfpv4 {
                features |= CpuFeatures::NEON_FMA;
            }
        }

        // VFPv3 in turn proves VFPv2 and an ARMv7 baseline, wherever the
        // claim came from.
        if features.contains(CpuFeatures::VFPV3) {
            features |= CpuFeatures::VFPV2 | CpuFeatures::ARMV7;
        }

        // Some kernels omit the division flags on cores that support the
        // instructions. VFPv4 cores are recent enough to have both
        // encodings, so VFPv4 counts as evidence on its own.
        if has_idiva || has_vfpv4 {
            features |= CpuFeatures::IDIV_ARM;
        }

        if has_idivt || has_vfpv4 {
            features |= CpuFeatures::IDIV_THUMB2;
        }

        if has_iwmmxt {
            features |= CpuFeatures::IWMMXT;
        }
    }

    if let Some(isa_flags) = signals.isa_flags {
        let vendor_is_intel = signals.vendor_id == Some(VENDOR_INTEL);

        if isa_flags & ISA_FLAG_SSSE3 != 0 {
            features |= CpuFeatures::SSSE3;
        }

        if isa_flags & ISA_FLAG_POPCNT != 0 {
            features |= CpuFeatures::POPCNT;
        }

        // The movbe flag is only meaningful with the Intel signature.
        if vendor_is_intel && isa_flags & ISA_FLAG_MOVBE != 0 {
            features |= CpuFeatures::MOVBE;
        }
    }

    features
}
