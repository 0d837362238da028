//! String utility functions for text processing

/// Parse the leading decimal digits of a string
///
/// Leading whitespace is skipped and parsing stops at the first non-digit,
/// so `"443abc"` yields `Some(443)`. Returns `None` when there are no
/// leading digits or the value overflows.
///
/// # Arguments
///
/// * `s` - The string to parse
pub fn parse_leading_u32(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse::<u32>().ok()
}

/// Split a string on any run of CR/LF characters, trimming each piece and
/// dropping empty lines
///
/// # Arguments
///
/// * `s` - The input text
pub fn non_empty_lines(s: &str) -> impl Iterator<Item = &str> {
    s.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Split a comma-separated list, returning `None` for an absent or empty value
pub fn split_list(value: Option<&str>) -> Option<Vec<String>> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| v.split(',').map(|s| s.to_string()).collect())
}
