//! Text decode wrapper.

use crate::decode_bytes;
use crate::Base64Error;

/// Decodes base64 text to a UTF-8 string.
///
/// Accepts standard and URL-safe input, padded or not.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidBase64Input`] for malformed base64 and
/// [`Base64Error::InvalidUtf8`] when the decoded bytes are not valid UTF-8.
///
/// # Example
///
/// ```
/// use urlsafe_base64::decode_text;
///
/// assert_eq!(decode_text("SGVsbG8gV29ybGQ=").unwrap(), "Hello World");
/// assert_eq!(decode_text("SGVsbG8gV29ybGQ").unwrap(), "Hello World");
/// ```
pub fn decode_text(value: &str) -> Result<String, Base64Error> {
    let bytes = decode_bytes(value.as_bytes())?;
    String::from_utf8(bytes).map_err(|_| Base64Error::InvalidUtf8)
}
