use crate::{Hasher, HasherError};

use super::hasher::sha256::SHA256;
use super::utilities::fnv1a_32;

#[test]
fn test_sha256_hash() {
    let result = SHA256 {}.hash(b"abc").unwrap();

    assert_eq!(
        vec![
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae,
            0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61,
            0xf2, 0x00, 0x15, 0xad
        ],
        result
    );
}

#[test]
fn test_sha256_hash_base64() {
    let result = SHA256 {}.hash_base64(b"abc").unwrap();

    assert_eq!("ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0", result);
    assert_eq!(43, result.len());

    // set for Base64 url no padding
    let allowed_characters = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    assert!(result.chars().all(|c| allowed_characters.contains(c)));
}

#[test]
fn test_hasher_error_message() {
    assert_eq!("Could not hash", HasherError::CouldNotHash.to_string());
}

#[test]
fn test_fnv1a_32_reference_values() {
    assert_eq!(0x811c_9dc5, fnv1a_32(b""));
    assert_eq!(0xe40c_292c, fnv1a_32(b"a"));
    assert_eq!(0xbf9c_f968, fnv1a_32(b"foobar"));
}

#[test]
fn test_fnv1a_32_is_order_sensitive() {
    assert_ne!(fnv1a_32(b"ab"), fnv1a_32(b"ba"));
}
