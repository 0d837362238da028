//! URL encoding/decoding utilities

/// Decodes a URL-encoded string
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if decoding fails
///
/// # Examples
/// ```
/// use sub2clash::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Decodes an optional URL component, treating an empty component as absent
pub fn decode_component(input: Option<&str>) -> Option<String> {
    input.filter(|s| !s.is_empty()).map(url_decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_decode_utf8() {
        assert_eq!(url_decode("%E9%A6%99%E6%B8%AF"), "香港");
    }

    #[test]
    fn test_url_decode_invalid_returns_input() {
        assert_eq!(url_decode("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component(Some("a%20b")), Some("a b".to_string()));
        assert_eq!(decode_component(Some("")), None);
        assert_eq!(decode_component(None), None);
    }

    #[test]
    fn test_decode_component_malformed_escape_kept_raw() {
        assert_eq!(decode_component(Some("my%2")), Some("my%2".to_string()));
        assert_eq!(decode_component(Some("100%")), Some("100%".to_string()));
    }
}
