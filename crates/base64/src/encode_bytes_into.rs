//! Core encode path writing into a caller-provided buffer.

use crate::constants::ALPHABET_BYTES;

const PAD_BYTE: u8 = b'=';

/// Pre-computed two-character lookup table for base64 encoding.
/// Each entry is two bytes (big-endian) representing two base64 characters.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Encodes bytes into a destination buffer, returning the number of bytes
/// written.
///
/// The destination must hold at least [`encoded_upper_bound`] bytes for the
/// input length. The standard transform always runs first; when `url_safe` is
/// true, a single in-place pass substitutes `+` → `-` and `/` → `_` across the
/// written region and trailing `=` padding is dropped, so the returned count
/// is the post-trim length.
///
/// [`encoded_upper_bound`]: crate::encoded_upper_bound
///
/// # Example
///
/// ```
/// use urlsafe_base64::{encode_bytes_into, encoded_upper_bound};
///
/// let data = b"hello";
/// let mut dest = vec![0u8; encoded_upper_bound(data.len())];
/// let written = encode_bytes_into(data, false, &mut dest);
/// assert_eq!(&dest[..written], b"aGVsbG8=");
/// ```
pub fn encode_bytes_into(value: &[u8], url_safe: bool, dest: &mut [u8]) -> usize {
    let length = value.len();
    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut offset = 0;
    let mut i = 0;
    while i < base_length {
        let o1 = value[i];
        let o2 = value[i + 1];
        let o3 = value[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        dest[offset] = TABLE2[v1][0];
        dest[offset + 1] = TABLE2[v1][1];
        dest[offset + 2] = TABLE2[v2][0];
        dest[offset + 3] = TABLE2[v2][1];
        offset += 4;
        i += 3;
    }

    if extra_length == 1 {
        let o1 = value[base_length];
        let v1 = (o1 as usize) << 4;
        dest[offset] = TABLE2[v1][0];
        dest[offset + 1] = TABLE2[v1][1];
        dest[offset + 2] = PAD_BYTE;
        dest[offset + 3] = PAD_BYTE;
        offset += 4;
    } else if extra_length == 2 {
        let o1 = value[base_length];
        let o2 = value[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;

        dest[offset] = TABLE2[v1][0];
        dest[offset + 1] = TABLE2[v1][1];
        dest[offset + 2] = ALPHABET_BYTES[v2];
        dest[offset + 3] = PAD_BYTE;
        offset += 4;
    }

    if !url_safe {
        return offset;
    }

    // Substitute in place across the written region, then strip padding.
    for byte in dest[..offset].iter_mut() {
        *byte = match *byte {
            b'+' => b'-',
            b'/' => b'_',
            other => other,
        };
    }
    while offset > 0 && dest[offset - 1] == PAD_BYTE {
        offset -= 1;
    }

    offset
}
