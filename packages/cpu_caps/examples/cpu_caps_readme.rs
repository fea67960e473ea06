//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how to query the memoized capability report of the running
//! processor.

use cpu_caps::{CpuCapabilities, CpuFeatures};

fn main() {
    println!("=== cpu_caps README Example ===");

    println!("family:     {}", CpuCapabilities::family());
    println!("features:   {:?}", CpuCapabilities::features());
    println!("processors: {}", CpuCapabilities::usable_processor_count());

    if CpuCapabilities::has(CpuFeatures::NEON) {
        println!("selecting the vectorized kernel");
    }

    println!("README example completed successfully!");
}
