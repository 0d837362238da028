pub mod base64;
pub mod string;
pub mod url;

pub use string::{non_empty_lines, parse_leading_u32, split_list};
pub use url::url_decode;

/// Serde helper: skip `None` and `Some("")`
pub(crate) fn is_empty_option_string(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, str::is_empty)
}

/// Serde helper: skip `None` and `Some(vec![])`
pub(crate) fn is_none_or_empty_vec(v: &Option<Vec<String>>) -> bool {
    v.as_ref().map_or(true, Vec::is_empty)
}
