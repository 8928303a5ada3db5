//! Tests for base64 decoding.

use rand::Rng;
use urlsafe_base64::{decode_bytes, decode_text, encode_bytes, encode_text, Base64Error};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let encoded = encode_bytes(&blob, false);
        let decoded = decode_bytes(&encoded).unwrap();
        assert_eq!(decoded, blob);
    }
}

#[test]
fn accepts_both_variants() {
    for _ in 0..100 {
        let blob = generate_blob();
        let standard = encode_bytes(&blob, false);
        let url_safe = encode_bytes(&blob, true);
        let decoded1 = decode_bytes(&standard).unwrap();
        let decoded2 = decode_bytes(&url_safe).unwrap();
        assert_eq!(decoded1, blob);
        assert_eq!(decoded2, blob);
    }
}

#[test]
fn handles_invalid_values() {
    for _ in 0..100 {
        let blob = generate_blob();
        let mut invalid = encode_bytes(&blob, false);
        invalid.extend_from_slice(b"!!!!");
        let result = decode_bytes(&invalid);
        assert!(matches!(result, Err(Base64Error::InvalidBase64Input)));
    }
}

#[test]
fn rejects_remainder_one_length() {
    // A post-substitution length of 4k+1 cannot be repaired by padding.
    assert!(matches!(
        decode_bytes(b"SGVsbG8gV"),
        Err(Base64Error::InvalidBase64Input)
    ));
}

#[test]
fn empty_input() {
    assert_eq!(decode_bytes(b"").unwrap(), b"");
    assert_eq!(decode_text("").unwrap(), "");
}

#[test]
fn hello_world_padded_and_unpadded() {
    assert_eq!(decode_text("SGVsbG8gV29ybGQ=").unwrap(), "Hello World");
    assert_eq!(decode_text("SGVsbG8gV29ybGQ").unwrap(), "Hello World");
}

#[test]
fn known_binary_vector() {
    let expected = [
        161u8, 203, 187, 6, 69, 54, 110, 237, 102, 171, 236, 129, 217, 210, 255, 224,
    ];
    assert_eq!(decode_bytes(b"ocu7BkU2bu1mq-yB2dL_4A").unwrap(), expected);
    assert_eq!(decode_bytes(b"ocu7BkU2bu1mq+yB2dL/4A==").unwrap(), expected);
}

#[test]
fn text_round_trip() {
    let value = "The quick brown fox jumps over the lazy dog";
    assert_eq!(decode_text(&encode_text(value, false)).unwrap(), value);
    assert_eq!(decode_text(&encode_text(value, true)).unwrap(), value);
}

#[test]
fn non_utf8_payload_is_classified() {
    let encoded = String::from_utf8(encode_bytes(&[0x80, 0x81], false)).unwrap();
    assert!(matches!(
        decode_text(&encoded),
        Err(Base64Error::InvalidUtf8)
    ));
}
