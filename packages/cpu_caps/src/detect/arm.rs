use tracing::debug;

use crate::auxv::{self, AT_HWCAP};
use crate::cpuinfo::extract_field;
use crate::detect::RawSignals;
use crate::pal::{Filesystem, FilesystemFacade};

/// Gathers the raw 32-bit ARM signals: the architecture-version and
/// processor-identity fields of the capability listing, plus the
/// hardware-capability bitmask from the auxiliary vector.
///
/// Every source is optional; whatever cannot be read stays absent.
pub(crate) fn gather_signals(fs: &FilesystemFacade) -> RawSignals {
    let mut signals = RawSignals::default();

    if let Some(cpuinfo) = fs.cpuinfo_contents() {
        signals.arch_version = extract_field(&cpuinfo, "CPU architecture");
        signals.processor_name = extract_field(&cpuinfo, "Processor");

        debug!(
            arch_version = ?signals.arch_version,
            processor_name = ?signals.processor_name,
            "capability listing fields"
        );
    }

    if let Some(contents) = fs.auxv_contents() {
        signals.hwcap = auxv::find_tag_value(&contents, AT_HWCAP);

        debug!(hwcap = signals.hwcap, "auxiliary vector");
    }

    signals
}
