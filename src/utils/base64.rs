use base64::{engine::general_purpose, Engine as _};

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Pads a Base64 string with `=` up to a multiple of four characters.
pub fn add_base64_padding(input: &str) -> String {
    let mut padded = input.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    padded
}

/// Decodes a Base64 string into raw bytes.
///
/// Missing padding is tolerated, and both the standard and the URL-safe
/// alphabet are accepted.
pub fn base64_decode_bytes(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let padded = add_base64_padding(input.trim());
    general_purpose::STANDARD
        .decode(&padded)
        .or_else(|_| general_purpose::URL_SAFE.decode(&padded))
}
