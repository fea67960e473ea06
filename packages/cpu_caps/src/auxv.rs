//! Decoding of the kernel-supplied auxiliary vector.
//!
//! The auxiliary vector is a sequence of fixed-width (tag, value) integer
//! pairs, terminated by a pair whose fields are both zero. On 32-bit targets
//! each field is a native-endian 32-bit integer. The vector is the kernel's
//! authoritative statement of hardware capability flags, so on targets where
//! it applies it outranks the free-text capability listing.

/// Tag of the hardware-capability bitmask entry.
pub(crate) const AT_HWCAP: u32 = 16;

/// Scans the raw auxiliary vector for `tag` and returns its value.
///
/// Scanning stops at the all-zero sentinel pair or at the end of the data;
/// a trailing partial pair is ignored. Returns 0 when the tag is not found,
/// which is indistinguishable from a tag that is present with value zero -
/// callers treat 0 as "no signal" either way.
pub(crate) fn find_tag_value(auxv: &[u8], tag: u32) -> u32 {
    for pair in auxv.chunks_exact(8) {
        let (tag_bytes, value_bytes) = pair.split_at(4);

        let entry_tag = u32::from_ne_bytes(
            tag_bytes
                .try_into()
                .expect("chunks_exact yields 4-byte halves"),
        );
        let entry_value = u32::from_ne_bytes(
            value_bytes
                .try_into()
                .expect("chunks_exact yields 4-byte halves"),
        );

        if entry_tag == 0 && entry_value == 0 {
            break;
        }

        if entry_tag == tag {
            return entry_value;
        }
    }

    0
}
