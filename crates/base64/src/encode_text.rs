//! Text encode wrapper.

use crate::encode_bytes;

/// Encodes the UTF-8 bytes of a string to base64 text.
///
/// # Example
///
/// ```
/// use urlsafe_base64::encode_text;
///
/// assert_eq!(encode_text("Hello World", false), "SGVsbG8gV29ybGQ=");
/// assert_eq!(encode_text("Hello World", true), "SGVsbG8gV29ybGQ");
/// ```
pub fn encode_text(value: &str, url_safe: bool) -> String {
    let out = encode_bytes(value.as_bytes(), url_safe);
    // Both alphabets and the padding character are ASCII.
    String::from_utf8(out).expect("base64 output is ASCII")
}
