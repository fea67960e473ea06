use derive_more::Display;

/// Identifies the broad processor family the current process is executing on.
///
/// The family is decided by the build target, not probed: a binary compiled
/// for one family cannot be executing on another. What *is* probed at runtime
/// is everything the family leaves open, which [`CpuFeatures`][1] reports.
///
/// [1]: crate::CpuFeatures
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CpuFamily {
    /// The build target is not one of the families this package knows about.
    ///
    /// Feature bits are always empty for unknown families; the usable
    /// processor count is still reported.
    #[display("unknown")]
    Unknown,

    /// 32-bit ARM.
    #[display("arm")]
    Arm,

    /// x86, both 32-bit and 64-bit.
    #[display("x86")]
    X86,

    /// MIPS.
    #[display("mips")]
    Mips,
}

impl CpuFamily {
    /// The family of the current build target.
    #[must_use]
    pub const fn build_target() -> Self {
        if cfg!(target_arch = "arm") {
            Self::Arm
        } else if cfg!(any(target_arch = "x86", target_arch = "x86_64")) {
            Self::X86
        } else if cfg!(any(target_arch = "mips", target_arch = "mips64")) {
            Self::Mips
        } else {
            Self::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CpuFamily: Copy, Debug, Send, Sync);

    #[test]
    fn build_target_is_stable() {
        assert_eq!(CpuFamily::build_target(), CpuFamily::build_target());
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn x86_64_reports_x86() {
        assert_eq!(CpuFamily::build_target(), CpuFamily::X86);
    }

    #[cfg(target_arch = "arm")]
    #[test]
    fn arm_reports_arm() {
        assert_eq!(CpuFamily::build_target(), CpuFamily::Arm);
    }
}
