//! Example that demonstrates the exact usage shown in the README.md file.
//!
//! This shows how to use the `cpumask` package for parsing processor range
//! lists and combining the resulting masks.

use cpumask::CpuMask;

fn main() {
    println!("=== CpuMask README Example ===");

    let present = CpuMask::parse("0,2,4-7\n");
    let possible = CpuMask::parse("0-5");

    let usable = present & possible;

    println!("present:  {present}");
    println!("possible: {possible}");
    println!("usable:   {usable} ({} processors)", usable.len());

    assert_eq!(usable.len(), 4);

    println!("README example completed successfully!");
}
