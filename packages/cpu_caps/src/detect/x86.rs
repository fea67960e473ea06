use tracing::debug;

use crate::detect::RawSignals;
use crate::pal::{Bindings, BindingsFacade};

/// Gathers the raw x86 signals: the manufacturer identity words from
/// identification query selector 0 and the extension flag register from
/// selector 1.
pub(crate) fn gather_signals(bindings: &BindingsFacade) -> RawSignals {
    let mut signals = RawSignals::default();

    let identity = bindings.cpuid(0);
    signals.vendor_id = Some([identity.ebx, identity.ecx, identity.edx]);

    debug!(max_selector = identity.eax, "identification query");

    let extensions = bindings.cpuid(1);
    signals.isa_flags = Some(extensions.ecx);

    signals
}
