use std::fmt::Debug;

/// Output registers of one processor identification query.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct CpuidRegisters {
    pub(crate) eax: u32,
    pub(crate) ebx: u32,
    pub(crate) ecx: u32,
    pub(crate) edx: u32,
}

/// Direct hardware queries that bypass the virtual filesystem.
///
/// All instruction-level probing must go through this trait, enabling it to
/// be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// Issues the processor identification instruction with the given
    /// function selector and returns the four output registers.
    ///
    /// On build targets without such an instruction all registers are zero,
    /// which downstream logic treats as "no signal".
    fn cpuid(&self, selector: u32) -> CpuidRegisters;
}
