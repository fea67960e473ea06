//! One-shot runtime detection of the processor family, the optional
//! instruction-set extensions available on the running hardware, and the
//! number of usable processors.
//!
//! Performance-sensitive code that picks specialized code paths at runtime
//! (vectorized kernels, fused-multiply variants, division-free fallbacks)
//! needs a trustworthy answer to "what can this processor actually do" - a
//! question the compile-time target description cannot answer, because a
//! binary built for a conservative baseline routinely runs on far more
//! capable hardware.
//!
//! # Why is this hard?
//!
//! The operating system exposes the answer across several sources of very
//! different reliability: a free-text capability listing, a binary tagged
//! capability vector, sysfs processor range lists and (on x86) the processor
//! identification instruction. None of them carries a schema guarantee, some
//! kernels are known to misreport, and the individual capability flags have
//! real dependency relationships that must be reconciled rather than read
//! literally. This package absorbs all of that: every source degrades
//! gracefully when absent or malformed, known kernel misreports are
//! corrected, and the final feature set never over-claims.
//!
//! # Quick start
//!
//! ```rust
//! // examples/cpu_caps_readme.rs
//! use cpu_caps::{CpuCapabilities, CpuFeatures};
//!
//! println!("family:     {}", CpuCapabilities::family());
//! println!("features:   {:?}", CpuCapabilities::features());
//! println!("processors: {}", CpuCapabilities::usable_processor_count());
//!
//! if CpuCapabilities::has(CpuFeatures::NEON) {
//!     println!("selecting the vectorized kernel");
//! }
//! ```
//!
//! Detection runs once, on first use, no matter how many threads ask; every
//! accessor afterwards is a plain read of the memoized result.
//!
//! # Failure behavior
//!
//! There is none, by design. Accessors always return a value. The worst
//! possible outcome on an uncooperative system is a conservative report:
//! the build-target family, an empty feature set and a processor count of
//! one. Callers therefore never need a fallback path for "detection
//! failed" - only for "feature absent", which they need anyway.

// Only the 32-bit ARM gatherer consumes the auxiliary vector; the module is
// nevertheless compiled in test mode everywhere so its decoding logic stays
// testable on every host.
#[cfg(any(test, target_arch = "arm"))]
mod auxv;
mod capabilities;
mod cpuinfo;
mod detect;
mod features;
mod pal;
mod primitive_types;

pub use capabilities::CpuCapabilities;
pub use features::CpuFeatures;
pub use primitive_types::CpuFamily;
