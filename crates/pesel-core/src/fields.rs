//! # Field Extraction
//!
//! Fixed-position slicing of the raw identifier. Nothing here validates
//! content: a short or malformed input yields whatever part of the range is
//! present, and an empty string when the range starts past the end.
//!
//! | Field  | Characters |
//! |--------|------------|
//! | year   | `[0, 2)`   |
//! | month  | `[2, 4)`   |
//! | day    | `[4, 6)`   |
//! | gender | `[9, 10)`  |
//!
//! Offsets count characters, not bytes, so arbitrary UTF-8 input never
//! splits a code point.

/// Two-digit year field.
pub fn year(identifier: &str) -> &str {
    char_span(identifier, 0, 2)
}

/// Two-digit, century-encoded month field.
pub fn month(identifier: &str) -> &str {
    char_span(identifier, 2, 2)
}

/// Two-digit day field.
pub fn day(identifier: &str) -> &str {
    char_span(identifier, 4, 2)
}

/// Single gender parity digit.
pub fn gender(identifier: &str) -> &str {
    char_span(identifier, 9, 1)
}

/// Return up to `len` characters starting at character `start`.
fn char_span(s: &str, start: usize, len: usize) -> &str {
    let mut bounds = s.char_indices().map(|(i, _)| i).skip(start);
    let Some(begin) = bounds.next() else {
        return "";
    };
    let end = bounds.nth(len.saturating_sub(1)).unwrap_or(s.len());
    &s[begin..end]
}

/// Parse a field consisting solely of ASCII digits.
///
/// Returns `None` for an empty field or any non-digit character; a field
/// that cannot be read as a number is "no result", never a fault.
pub(crate) fn parse_digits(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
