use std::fmt::Debug;

/// The kernel exposes its knowledge of the processor hardware as a set of
/// virtual files. This trait abstracts those files so the detection pipeline
/// can be exercised against mocked content.
///
/// Every method degrades to `None` when its source is unavailable - a missing
/// source is a normal condition (older kernels, locked-down containers,
/// non-Linux hosts) and must never abort detection.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Filesystem: Debug + Send + Sync + 'static {
    /// Raw bytes of the capability listing (`/proc/cpuinfo`).
    ///
    /// This is a plaintext file of `key : value` lines of a-priori-unknown
    /// length. The content carries no encoding guarantee, so it is exposed
    /// as bytes rather than as a string.
    fn cpuinfo_contents(&self) -> Option<Vec<u8>>;

    /// Raw bytes of the process auxiliary vector (`/proc/self/auxv`).
    ///
    /// A sequence of fixed-width (tag, value) pairs terminated by an
    /// all-zero pair.
    fn auxv_contents(&self) -> Option<Vec<u8>>;

    /// Contents of `/sys/devices/system/cpu/present`.
    ///
    /// This is a cpulist format file ("0,1,2-4" style list).
    fn present_processors_contents(&self) -> Option<String>;

    /// Contents of `/sys/devices/system/cpu/possible`.
    ///
    /// This is a cpulist format file ("0,1,2-4" style list).
    fn possible_processors_contents(&self) -> Option<String>;
}
