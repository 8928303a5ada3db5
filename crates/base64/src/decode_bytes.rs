//! Decode path accepting both standard and URL-safe input.

use crate::constants::ALPHABET_BYTES;
use crate::Base64Error;

const PAD_BYTE: u8 = b'=';

/// Reverse lookup table for the standard alphabet; -1 marks bytes outside it.
static DECODE_TABLE: [i16; 256] = {
    let mut table = [-1i16; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i16;
        i += 1;
    }
    table
};

/// Decodes base64 bytes (standard or URL-safe, padded or not) to raw bytes.
///
/// URL-safe characters are mapped back to the standard alphabet and missing
/// padding is reconstructed from the input length before the core transform
/// runs, so both representations of the same data decode identically.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidBase64Input`] when the re-padded input
/// contains bytes outside the alphabet, has padding in a non-terminal
/// position, or has a length no padding amount can repair (length ≡ 1 mod 4).
///
/// # Example
///
/// ```
/// use urlsafe_base64::decode_bytes;
///
/// assert_eq!(decode_bytes(b"aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(decode_bytes(b"aGVsbG8").unwrap(), b"hello");
/// ```
pub fn decode_bytes(value: &[u8]) -> Result<Vec<u8>, Base64Error> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    // Padding to reconstruct: remainder 2 needs two bytes, 3 needs one.
    // Remainder 1 is never a valid base64 length and gets no padding, so the
    // length check below rejects it.
    let pad_offset = match value.len() % 4 {
        2 => 2,
        3 => 1,
        _ => 0,
    };

    let mut work = Vec::with_capacity(value.len() + pad_offset);
    work.extend_from_slice(value);
    // Reverse substitution across the copied input; a no-op for
    // standard-alphabet text.
    for byte in work.iter_mut() {
        *byte = match *byte {
            b'-' => b'+',
            b'_' => b'/',
            other => other,
        };
    }
    work.resize(value.len() + pad_offset, PAD_BYTE);

    let length = work.len();
    if !length.is_multiple_of(4) {
        return Err(Base64Error::InvalidBase64Input);
    }

    let mut padding = 0;
    if work[length - 1] == PAD_BYTE {
        padding = 1;
        if length > 1 && work[length - 2] == PAD_BYTE {
            padding = 2;
        }
    }

    let main_end = length - if padding > 0 { 4 } else { 0 };
    let buffer_length = (length >> 2) * 3 - padding;
    let mut buf = vec![0u8; buffer_length];

    let mut j = 0;
    let mut i = 0;

    while i < main_end {
        let sextet0 = DECODE_TABLE[work[i] as usize];
        let sextet1 = DECODE_TABLE[work[i + 1] as usize];
        let sextet2 = DECODE_TABLE[work[i + 2] as usize];
        let sextet3 = DECODE_TABLE[work[i + 3] as usize];

        if sextet0 < 0 || sextet1 < 0 || sextet2 < 0 || sextet3 < 0 {
            return Err(Base64Error::InvalidBase64Input);
        }

        let sextet0 = sextet0 as u8;
        let sextet1 = sextet1 as u8;
        let sextet2 = sextet2 as u8;
        let sextet3 = sextet3 as u8;

        buf[j] = (sextet0 << 2) | (sextet1 >> 4);
        buf[j + 1] = (sextet1 << 4) | (sextet2 >> 2);
        buf[j + 2] = (sextet2 << 6) | sextet3;
        j += 3;
        i += 4;
    }

    if padding == 0 {
        return Ok(buf);
    }

    if padding == 1 {
        let sextet0 = DECODE_TABLE[work[main_end] as usize];
        let sextet1 = DECODE_TABLE[work[main_end + 1] as usize];
        let sextet2 = DECODE_TABLE[work[main_end + 2] as usize];

        if sextet0 < 0 || sextet1 < 0 || sextet2 < 0 {
            return Err(Base64Error::InvalidBase64Input);
        }

        let sextet0 = sextet0 as u8;
        let sextet1 = sextet1 as u8;
        let sextet2 = sextet2 as u8;

        buf[j] = (sextet0 << 2) | (sextet1 >> 4);
        buf[j + 1] = (sextet1 << 4) | (sextet2 >> 2);
        return Ok(buf);
    }

    // padding == 2
    let sextet0 = DECODE_TABLE[work[main_end] as usize];
    let sextet1 = DECODE_TABLE[work[main_end + 1] as usize];

    if sextet0 < 0 || sextet1 < 0 {
        return Err(Base64Error::InvalidBase64Input);
    }

    let sextet0 = sextet0 as u8;
    let sextet1 = sextet1 as u8;

    buf[j] = (sextet0 << 2) | (sextet1 >> 4);
    Ok(buf)
}
