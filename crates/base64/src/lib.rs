//! Standard and URL-safe base64 encoding and decoding.
//!
//! This crate provides base64 conversion with support for:
//! - Standard base64 with padding
//! - URL-safe base64 (RFC 4648 §5) without padding
//! - Binary output into caller-provided buffers
//!
//! Decoding accepts both variants transparently: URL-safe characters are
//! mapped back to the standard alphabet and missing padding is reconstructed
//! before the core transform runs.
//!
//! # Example
//!
//! ```
//! use urlsafe_base64::{decode_bytes, encode_bytes};
//!
//! let data = b"hello world";
//! let encoded = encode_bytes(data, true);
//! assert_eq!(encoded, b"aGVsbG8gd29ybGQ");
//! let decoded = decode_bytes(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

use thiserror::Error;

mod constants;
mod decode_bytes;
mod decode_text;
mod encode_bytes;
mod encode_bytes_into;
mod encode_text;

pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, PAD};
pub use decode_bytes::decode_bytes;
pub use decode_text::decode_text;
pub use encode_bytes::{encode_bytes, encoded_upper_bound};
pub use encode_bytes_into::encode_bytes_into;
pub use encode_text::encode_text;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The input does not conform to base64 alphabet or length rules.
    #[error("invalid base64 input")]
    InvalidBase64Input,
    /// Decoded bytes are not valid UTF-8 text.
    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}
