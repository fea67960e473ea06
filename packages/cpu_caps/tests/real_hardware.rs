//! Integration tests that exercise detection against the real operating
//! system. These assert only what holds on any host the test suite runs on.

use std::collections::HashSet;
use std::thread;

use cpu_caps::{CpuCapabilities, CpuFamily};

#[test]
fn detection_succeeds_on_the_real_host() {
    // The count is non-zero by construction; the family is whatever the
    // build target dictates. Neither call may panic.
    let family = CpuCapabilities::family();
    let count = CpuCapabilities::usable_processor_count();

    assert_eq!(family, CpuFamily::build_target());
    assert!(count.get() >= 1);
}

#[test]
fn result_is_identical_across_threads_and_calls() {
    let mut observed = HashSet::new();

    let results = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    (
                        CpuCapabilities::family(),
                        CpuCapabilities::features().bits(),
                        CpuCapabilities::usable_processor_count(),
                    )
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("detection must never panic"))
            .collect::<Vec<_>>()
    });

    observed.extend(results);

    assert_eq!(observed.len(), 1);
}

#[cfg(target_arch = "x86_64")]
#[test]
fn x86_64_hosts_report_the_x86_family() {
    assert_eq!(CpuCapabilities::family(), CpuFamily::X86);
}
