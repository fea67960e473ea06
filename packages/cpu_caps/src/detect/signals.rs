/// Raw, uninterpreted evidence about the running processor.
///
/// Whichever gatherer matches the build target fills in the signals it can
/// obtain; everything else stays at its "absent" default. The inference
/// rules in [`infer()`][crate::detect::inference::infer] consume this one
/// uniform shape regardless of which gatherer produced it, so an absent
/// signal always degrades to "capability not claimed" rather than to an
/// error.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RawSignals {
    /// Value of the architecture-version field of the capability listing
    /// ("CPU architecture"). Free text; usually a bare revision number.
    pub(crate) arch_version: Option<String>,

    /// Value of the processor-identity field of the capability listing
    /// ("Processor"). Free text chosen by the kernel port, with no stable
    /// structure beyond convention.
    pub(crate) processor_name: Option<String>,

    /// Hardware-capability bitmask from the auxiliary vector. Zero when the
    /// vector is unavailable or carries no such entry.
    pub(crate) hwcap: u32,

    /// Manufacturer identity words from identification query selector 0,
    /// in output-register order (ebx, ecx, edx).
    pub(crate) vendor_id: Option<[u32; 3]>,

    /// Extension flag register (ecx) from identification query selector 1.
    pub(crate) isa_flags: Option<u32>,
}
