//! The one-shot detection pass.
//!
//! Control flow: the facade triggers [`run()`] exactly once per process;
//! `run()` asks the build-target gatherer for raw signals, hands them to the
//! inference engine and computes the usable processor count. Every input is
//! optional, so the pass always terminates with some result - at worst the
//! default family, no features and a count of one.

use std::num::NonZero;

use cpumask::CpuMask;
use new_zealand::nz;
use tracing::debug;

use crate::pal::{BindingsFacade, Filesystem, FilesystemFacade};
use crate::{CpuFamily, CpuFeatures};

// The gatherers are compiled in test mode on all build targets so the whole
// pipeline stays testable everywhere; outside of tests, only the gatherer
// matching the build target exists.
#[cfg(any(test, target_arch = "arm"))]
mod arm;
#[cfg(any(test, target_arch = "x86", target_arch = "x86_64"))]
mod x86;

mod inference;
mod signals;

pub(crate) use signals::RawSignals;

/// The complete, immutable outcome of one detection pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Detected {
    pub(crate) family: CpuFamily,
    pub(crate) features: CpuFeatures,
    pub(crate) processor_count: NonZero<usize>,
}

/// Runs the full detection pass. All sources are read, decoded and released
/// before this returns; nothing stays open.
pub(crate) fn run(fs: &FilesystemFacade, bindings: &BindingsFacade) -> Detected {
    let family = CpuFamily::build_target();

    // A kernel that exposes no usable range lists degrades to zero here;
    // the process is nevertheless running on something.
    let processor_count = NonZero::new(usable_processor_count(fs)).unwrap_or(nz!(1));

    let signals = gather_signals(fs, bindings);
    let features = inference::infer(&signals);

    debug!(
        %family,
        features = ?features,
        processor_count = processor_count.get(),
        "detection complete"
    );

    Detected {
        family,
        features,
        processor_count,
    }
}

/// Number of processor indexes that are both present and possible.
///
/// Kernels disagree about which of the two range lists reflects reality on
/// hotplug-capable hardware, so the dependable answer is the intersection.
/// An unreadable list contributes an empty mask, degrading the count to 0.
pub(crate) fn usable_processor_count(fs: &FilesystemFacade) -> usize {
    let present = range_list_mask(fs.present_processors_contents());
    let possible = range_list_mask(fs.possible_processors_contents());

    present.intersection(possible).len()
}

fn range_list_mask(contents: Option<String>) -> CpuMask {
    contents
        .as_deref()
        .map(CpuMask::parse)
        .unwrap_or_default()
}

#[cfg(target_arch = "arm")]
fn gather_signals(fs: &FilesystemFacade, _bindings: &BindingsFacade) -> RawSignals {
    arm::gather_signals(fs)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn gather_signals(_fs: &FilesystemFacade, bindings: &BindingsFacade) -> RawSignals {
    x86::gather_signals(bindings)
}

#[cfg(not(any(target_arch = "arm", target_arch = "x86", target_arch = "x86_64")))]
fn gather_signals(_fs: &FilesystemFacade, _bindings: &BindingsFacade) -> RawSignals {
    RawSignals::default()
}

#[cfg(test)]
mod tests {
    use crate::pal::MockFilesystem;

    use super::*;

    fn filesystem_with_range_lists(
        present: Option<&str>,
        possible: Option<&str>,
    ) -> FilesystemFacade {
        let mut fs = MockFilesystem::new();

        fs.expect_present_processors_contents()
            .times(1)
            .return_const(present.map(ToString::to_string));
        fs.expect_possible_processors_contents()
            .times(1)
            .return_const(possible.map(ToString::to_string));

        FilesystemFacade::from_mock(fs)
    }

    #[test]
    fn count_is_intersection_of_present_and_possible() {
        let fs = filesystem_with_range_lists(Some("0-3\n"), Some("0-1\n"));

        assert_eq!(usable_processor_count(&fs), 2);
    }

    #[test]
    fn count_degrades_to_zero_when_either_list_is_unreadable() {
        let fs = filesystem_with_range_lists(None, Some("0-1\n"));
        assert_eq!(usable_processor_count(&fs), 0);

        let fs = filesystem_with_range_lists(Some("0-3\n"), None);
        assert_eq!(usable_processor_count(&fs), 0);
    }

    #[test]
    fn count_handles_disjoint_lists() {
        let fs = filesystem_with_range_lists(Some("0-1\n"), Some("2-3\n"));

        assert_eq!(usable_processor_count(&fs), 0);
    }

    #[test]
    fn run_with_no_sources_yields_the_conservative_result() {
        let mut fs = MockFilesystem::new();

        fs.expect_present_processors_contents().return_const(None);
        fs.expect_possible_processors_contents().return_const(None);
        fs.expect_cpuinfo_contents().return_const(None);
        fs.expect_auxv_contents().return_const(None);

        let mut bindings = crate::pal::MockBindings::new();
        bindings
            .expect_cpuid()
            .return_const(crate::pal::CpuidRegisters::default());

        let detected = run(
            &FilesystemFacade::from_mock(fs),
            &BindingsFacade::from_mock(bindings),
        );

        assert_eq!(detected.family, CpuFamily::build_target());
        assert!(detected.features.is_empty());
        assert_eq!(detected.processor_count, nz!(1));
    }

    #[test]
    fn misreporting_kernel_scenario_is_corrected() {
        // The listing claims architecture 7 but the processor identity
        // carries the (v6l) marker: the armv7 claim must be retracted while
        // the version-6 exclusive-access claim survives.
        let mut fs = MockFilesystem::new();

        fs.expect_cpuinfo_contents().times(1).return_const(Some(
            b"Processor\t: ARMv7 Processor rev 2 (v6l)\nCPU architecture: 7\n".to_vec(),
        ));
        fs.expect_auxv_contents().times(1).return_const(None);

        let signals = arm::gather_signals(&FilesystemFacade::from_mock(fs));
        let features = inference::infer(&signals);

        assert!(!features.contains(CpuFeatures::ARMV7));
        assert!(features.contains(CpuFeatures::LDREX_STREX));
    }

    #[test]
    fn run_reports_the_usable_count() {
        let mut fs = MockFilesystem::new();

        fs.expect_present_processors_contents()
            .return_const(Some("0-3\n".to_string()));
        fs.expect_possible_processors_contents()
            .return_const(Some("0-3\n".to_string()));
        fs.expect_cpuinfo_contents().return_const(None);
        fs.expect_auxv_contents().return_const(None);

        let mut bindings = crate::pal::MockBindings::new();
        bindings
            .expect_cpuid()
            .return_const(crate::pal::CpuidRegisters::default());

        let detected = run(
            &FilesystemFacade::from_mock(fs),
            &BindingsFacade::from_mock(bindings),
        );

        assert_eq!(detected.processor_count, nz!(4));
    }
}
