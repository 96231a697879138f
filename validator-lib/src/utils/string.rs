//! Small text helpers shared across the crate.

/// Trims surrounding whitespace from a raw header cell.
pub fn clean_header(raw: &str) -> String {
    raw.trim().to_string()
}

/// Case-insensitive header comparison, ignoring surrounding whitespace on
/// the actual header.
pub fn header_matches(actual: &str, logical: &str) -> bool {
    actual.trim().eq_ignore_ascii_case(logical)
}
