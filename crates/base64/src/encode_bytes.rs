//! Allocating encode path.

use crate::encode_bytes_into;

/// Maximum possible encoded length for `length` input bytes: ceil(n / 3) * 4.
///
/// This is exact for standard encoding; URL-safe output may be up to two
/// bytes shorter after padding is trimmed.
pub fn encoded_upper_bound(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes a byte slice to base64, returned as ASCII bytes.
///
/// Standard output is padded with `=` to a multiple of 4 bytes. URL-safe
/// output uses `-` and `_` in place of `+` and `/` and carries no padding.
///
/// # Example
///
/// ```
/// use urlsafe_base64::encode_bytes;
///
/// assert_eq!(encode_bytes(b"hello world", false), b"aGVsbG8gd29ybGQ=");
/// assert_eq!(encode_bytes(b"hello world", true), b"aGVsbG8gd29ybGQ");
/// ```
pub fn encode_bytes(value: &[u8], url_safe: bool) -> Vec<u8> {
    let mut out = vec![0u8; encoded_upper_bound(value.len())];
    let written = encode_bytes_into(value, url_safe, &mut out);
    out.truncate(written);
    out
}
