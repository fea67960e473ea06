//! Field extraction from the capability listing.
//!
//! The listing is a line-oriented `key : value` text blob of unknown length.
//! It is handled as raw bytes throughout: the kernel makes no encoding
//! promise and vendor strings have been observed to carry arbitrary bytes.

/// Extracts the value of the first occurrence of `field` that starts a line,
/// as a freshly allocated string.
///
/// The match is case-sensitive and must be followed by a `:` and a single
/// space somewhere before the value; the value runs to the next newline or
/// the end of the buffer. Returns `None` when the field never starts a line
/// or the separator pattern is missing - an absent field is a normal outcome,
/// not an error.
#[cfg(any(test, target_arch = "arm"))]
pub(crate) fn extract_field(buffer: &[u8], field: &str) -> Option<String> {
    let needle = field.as_bytes();
    let mut search_from = 0_usize;

    // Occurrences in the middle of a line (e.g. the field name appearing
    // inside another field's value) do not count.
    let at = loop {
        let at = find(buffer, needle, search_from)?;

        if at == 0 || buffer.get(at.wrapping_sub(1)) == Some(&b'\n') {
            break at;
        }

        search_from = at.saturating_add(needle.len());
    };

    let after_name = at.saturating_add(needle.len());

    let colon = buffer
        .iter()
        .skip(after_name)
        .position(|&byte| byte == b':')
        .map(|offset| after_name.saturating_add(offset))?;

    if buffer.get(colon.saturating_add(1)) != Some(&b' ') {
        return None;
    }

    let value_start = colon.saturating_add(2);
    let value_end = buffer
        .iter()
        .skip(value_start)
        .position(|&byte| byte == b'\n')
        .map_or(buffer.len(), |offset| value_start.saturating_add(offset));

    let value = buffer.get(value_start..value_end)?;

    Some(String::from_utf8_lossy(value).into_owned())
}

/// Whether a space/tab-separated token sequence contains an exact match for
/// `token`.
pub(crate) fn token_list_contains(list: &str, token: &str) -> bool {
    list.split([' ', '\t']).any(|candidate| candidate == token)
}

/// Parses the run of ASCII digits at the start of `text`, ignoring whatever
/// follows.
///
/// Returns `None` when the text does not start with a digit. Overflow wraps
/// silently; the fields this is applied to hold single-digit revisions.
pub(crate) fn leading_decimal(text: &str) -> Option<u32> {
    let digits = text
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|byte| u32::from(byte.wrapping_sub(b'0')));

    let mut value = None;

    for digit in digits {
        value = Some(
            value
                .unwrap_or(0_u32)
                .wrapping_mul(10)
                .wrapping_add(digit),
        );
    }

    value
}

#[cfg(any(test, target_arch = "arm"))]
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from.saturating_add(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_line_anchored_occurrence() {
        let buffer = b"foo : bar\nCPU architecture: 7\n";

        assert_eq!(
            extract_field(buffer, "CPU architecture"),
            Some("7".to_string())
        );
    }

    #[test]
    fn field_at_start_of_buffer_is_found() {
        let buffer = b"Processor\t: ARMv7 Processor rev 2 (v6l)\nfoo : bar\n";

        assert_eq!(
            extract_field(buffer, "Processor"),
            Some("ARMv7 Processor rev 2 (v6l)".to_string())
        );
    }

    #[test]
    fn mid_line_occurrence_is_not_a_field() {
        let buffer = b"model name : Fancy Processor 3000\n";

        assert_eq!(extract_field(buffer, "Processor"), None);
    }

    #[test]
    fn mid_line_occurrence_is_skipped_in_favor_of_a_later_line_start() {
        let buffer = b"model : Some Processor\nProcessor : ARMv6-compatible\n";

        assert_eq!(
            extract_field(buffer, "Processor"),
            Some("ARMv6-compatible".to_string())
        );
    }

    #[test]
    fn missing_separator_pattern_yields_absent() {
        // Colon present but not followed by a space.
        assert_eq!(extract_field(b"Features:half thumb\n", "Features"), None);

        // No colon at all.
        assert_eq!(extract_field(b"Features half thumb\n", "Features"), None);
    }

    #[test]
    fn value_may_run_to_end_of_buffer() {
        let buffer = b"CPU architecture: 7";

        assert_eq!(
            extract_field(buffer, "CPU architecture"),
            Some("7".to_string())
        );
    }

    #[test]
    fn absent_field_yields_absent() {
        assert_eq!(extract_field(b"foo : bar\n", "CPU architecture"), None);
    }

    #[test]
    fn empty_buffer_yields_absent() {
        assert_eq!(extract_field(b"", "CPU architecture"), None);
    }

    #[test]
    fn non_utf8_bytes_in_value_are_tolerated() {
        let buffer = b"Hardware : ven\xFFdor\n";

        let value = extract_field(buffer, "Hardware").unwrap();

        assert!(value.starts_with("ven"));
        assert!(value.ends_with("dor"));
    }

    #[test]
    fn token_membership_is_exact() {
        let list = "half thumb fastmult vfp edsp neon vfpv3";

        assert!(token_list_contains(list, "neon"));
        assert!(token_list_contains(list, "half"));
        assert!(token_list_contains(list, "vfpv3"));
        assert!(!token_list_contains(list, "vfp3"));
        assert!(!token_list_contains(list, "vfpv"));
        assert!(!token_list_contains(list, "idiva"));
    }

    #[test]
    fn tokens_may_be_tab_separated() {
        assert!(token_list_contains("swp\thalf\tthumb", "half"));
    }

    #[test]
    fn empty_list_contains_nothing() {
        assert!(!token_list_contains("", "neon"));
    }

    #[test]
    fn leading_decimal_stops_at_first_non_digit() {
        assert_eq!(leading_decimal("7"), Some(7));
        assert_eq!(leading_decimal("7TE"), Some(7));
        assert_eq!(leading_decimal("10"), Some(10));
    }

    #[test]
    fn leading_decimal_requires_a_digit() {
        assert_eq!(leading_decimal("AArch64"), None);
        assert_eq!(leading_decimal(""), None);
    }
}
