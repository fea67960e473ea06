//! A fixed-capacity set of processor indexes, with best-effort parsing of the
//! `cpulist` format used by Linux virtual filesystems that describe processors
//! (`/sys/devices/system/cpu/present` and similar).
//!
//! Example cpulist string: `0,2,4-7`
//!
//! # Format
//!
//! The input is a comma-separated list of items, where each item is either:
//!
//! * a single decimal processor index (e.g. `1`)
//! * an inclusive range of indexes separated by a dash (e.g. `2-4`)
//!
//! Whitespace is not part of the format.
//!
//! # Parsing policy
//!
//! Unlike a strict parser, [`CpuMask::parse()`] never fails. Kernel-generated
//! range lists occasionally carry surprises (trailing newlines, vendor quirks),
//! and a caller probing the hardware environment is better served by a smaller
//! set than by no answer at all. Concretely:
//!
//! * parsing stops at the first malformed item; indexes collected up to that
//!   point are kept;
//! * an item that begins with a newline terminates parsing;
//! * trailing non-digit content inside an otherwise valid item is ignored;
//! * indexes beyond the mask capacity of 32 are silently dropped.
//!
//! # Example
//!
//! ```
//! use cpumask::CpuMask;
//!
//! let present = CpuMask::parse("0,2,4-7\n");
//! assert_eq!(present.len(), 6);
//! assert!(present.contains(5));
//! assert!(!present.contains(1));
//!
//! println!("present processors: {present}");
//! ```

use std::fmt;
use std::ops::BitAnd;

use itertools::Itertools;

mod parse;

/// A set of processor indexes backed by a fixed-width bitmask.
///
/// The capacity is [`CpuMask::CAPACITY`] indexes; operations on indexes at or
/// beyond the capacity are silently ignored, matching the best-effort posture
/// of [`CpuMask::parse()`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CpuMask {
    bits: u32,
}

impl CpuMask {
    /// Number of processor indexes this mask can represent, starting from 0.
    pub const CAPACITY: u32 = 32;

    /// Creates a mask with no indexes set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Parses a cpulist string into a mask, keeping whatever valid prefix the
    /// input contains.
    ///
    /// This never fails; see the [package-level documentation][crate] for the
    /// exact leniency rules.
    ///
    /// ```
    /// use cpumask::CpuMask;
    ///
    /// let mask = CpuMask::parse("0-1");
    /// assert!(mask.contains(0));
    /// assert!(mask.contains(1));
    /// assert_eq!(mask.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        parse::parse(text)
    }

    /// Adds a processor index to the mask.
    ///
    /// Indexes at or beyond [`CpuMask::CAPACITY`] are ignored.
    pub fn set(&mut self, index: u32) {
        if index < Self::CAPACITY {
            self.bits |= 1_u32 << index;
        }
    }

    /// Whether the given processor index is in the mask.
    ///
    /// Indexes at or beyond [`CpuMask::CAPACITY`] are never in the mask.
    #[must_use]
    pub const fn contains(self, index: u32) -> bool {
        index < Self::CAPACITY && self.bits & (1_u32 << index) != 0
    }

    /// Number of processor indexes in the mask.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the mask contains no indexes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the set of indexes present in both masks.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Iterates the indexes in the mask in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u32> {
        (0..Self::CAPACITY).filter(move |&index| self.contains(index))
    }
}

impl BitAnd for CpuMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl FromIterator<u32> for CpuMask {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut mask = Self::empty();

        for index in iter {
            mask.set(index);
        }

        mask
    }
}

impl fmt::Display for CpuMask {
    /// Emits the mask in a form that [`CpuMask::parse()`] accepts, coalescing
    /// consecutive indexes into ranges (`0-3,7`). An empty mask emits an
    /// empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Consecutive indexes share a constant (index - position) delta, which
        // makes each run of consecutive indexes one chunk.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "positions are bounded by CAPACITY"
        )]
        let runs = self
            .iter()
            .enumerate()
            .chunk_by(|&(position, index)| index.wrapping_sub(position as u32));

        let mut first = true;

        for (_, run) in &runs {
            let run = run.map(|(_, index)| index).collect_vec();

            let (start, end) = (
                *run.first().expect("chunk_by never yields an empty group"),
                *run.last().expect("chunk_by never yields an empty group"),
            );

            if !first {
                f.write_str(",")?;
            }
            first = false;

            match run.len() {
                1 => write!(f, "{start}")?,
                2 => write!(f, "{start},{end}")?,
                _ => write!(f, "{start}-{end}")?,
            }
        }

        Ok(())
    }
}
