use std::marker::PhantomData;
use std::num::NonZero;
use std::sync::OnceLock;

use crate::detect::{self, Detected};
use crate::pal::{BindingsFacade, FilesystemFacade};
use crate::{CpuFamily, CpuFeatures};

/// The detection pass runs at most once per process; its outcome lives here
/// for the rest of the process lifetime.
static DETECTED: OnceLock<Detected> = OnceLock::new();

/// Reports the capabilities of the processor this process is running on.
///
/// The underlying detection runs on first use, exactly once per process, and
/// is safe to trigger from any number of threads: callers that arrive while
/// detection is in progress block until the result is published, and every
/// caller observes the same completed result. Detection never fails - when
/// the operating system exposes nothing useful, the result degrades to the
/// build-target family, no optional features and a single processor.
///
/// The result is a snapshot from first use. It is not refreshed if the
/// process is later migrated to different hardware.
///
/// # Example
///
/// ```
/// use cpu_caps::{CpuCapabilities, CpuFeatures};
///
/// let family = CpuCapabilities::family();
/// let processors = CpuCapabilities::usable_processor_count();
///
/// println!("running on {family} with {processors} usable processors");
///
/// if CpuCapabilities::has(CpuFeatures::NEON) {
///     println!("vectorized kernels are available");
/// }
/// ```
#[derive(Debug)]
pub struct CpuCapabilities {
    _no_ctor: PhantomData<()>,
}

impl CpuCapabilities {
    /// Gets the broad processor family of the running hardware.
    #[inline]
    #[must_use]
    pub fn family() -> CpuFamily {
        Self::detected().family
    }

    /// Gets the full set of optional instruction-set extensions the running
    /// hardware was found to support.
    ///
    /// A clear bit means the extension is unavailable or could not be
    /// established with confidence; it is always safe to fall back to
    /// generic code paths.
    #[inline]
    #[must_use]
    pub fn features() -> CpuFeatures {
        Self::detected().features
    }

    /// Whether the running hardware supports all of the given extensions.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_caps::{CpuCapabilities, CpuFeatures};
    ///
    /// if CpuCapabilities::has(CpuFeatures::NEON | CpuFeatures::NEON_FMA) {
    ///     // Select the fused-multiply vector kernel.
    /// }
    /// ```
    #[inline]
    #[must_use]
    pub fn has(features: CpuFeatures) -> bool {
        Self::detected().features.contains(features)
    }

    /// Gets the number of processors this process can actually use: the
    /// intersection of the processors that are present and those that are
    /// possible, never less than one.
    #[inline]
    #[must_use]
    pub fn usable_processor_count() -> NonZero<usize> {
        Self::detected().processor_count
    }

    fn detected() -> &'static Detected {
        DETECTED.get_or_init(|| {
            detect::run(&FilesystemFacade::target(), &BindingsFacade::target())
        })
    }
}
