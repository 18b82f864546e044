//! wyhash reference vectors and keying properties.

use crate::hash::mixers::GOLDEN_GAMMA;
use crate::hash::wyhash::{wyhash64, wyhash_bytes, wymix};

#[test]
fn test_wyhash_bytes_reference_vectors() {
    let vectors: [(&[u8], u64); 4] = [
        (b"", 0x38f94c439ac36242),
        (b"a", 0xca324e4dfad1a560),
        (b"hello world", 0x32c257998d073c59),
        (b"Fss7zbhbnM9ZanQ", 0x5366ac94ba27cab4),
    ];
    for (bytes, want) in vectors {
        assert_eq!(
            wyhash_bytes(bytes, 1),
            want,
            "{:?}",
            String::from_utf8_lossy(bytes)
        );
    }
}

#[test]
fn test_wyhash64_reference_vectors() {
    assert_eq!(wyhash64(42, GOLDEN_GAMMA), 0xe24d514df3d02b3c);
    assert_eq!(wyhash64(0, GOLDEN_GAMMA), 0x692ff8511f623ecc);
    assert_eq!(wyhash64(1, GOLDEN_GAMMA), 0xeb08e00fe82688b5);
    assert_eq!(wyhash64(0, 0), 0x60c06e5aa6716029);
    assert_eq!(wyhash64(u64::MAX, 1), 0x0bcb7c8491607e45);
}

#[test]
fn test_wymix_folds_the_wide_product() {
    // 2^32 * 2^32 = 2^64: high half 1, low half 0.
    assert_eq!(wymix(1 << 32, 1 << 32), 1);
    assert_eq!(wymix(0, u64::MAX), 0);
}

#[test]
fn test_seed_changes_every_hash() {
    let a = wyhash_bytes(b"benchmark", 1);
    let b = wyhash_bytes(b"benchmark", 2);
    assert_ne!(a, b);
}

// A trailing zero byte pads to the same chunk words as the empty tail;
// only the length mix separates them.
#[test]
fn test_length_breaks_zero_padding_ties() {
    assert_ne!(wyhash_bytes(b"", 1), wyhash_bytes(b"\0", 1));
    assert_ne!(wyhash_bytes(b"abc", 1), wyhash_bytes(b"abc\0", 1));
}
