use pretty_assertions::assert_eq;

use sha256_core::vectors::{check_known_answers, KNOWN_ANSWERS};
use sha256_core::{hash, hash_str, Digest};

#[test]
fn fips_180_4_vectors() {
    for vector in KNOWN_ANSWERS {
        let digest = hash(&vector.message()).expect("hash failed");
        assert_eq!(digest.to_hex(), vector.digest, "vector {}", vector.name);
        assert_eq!(
            Digest::from_hex(vector.digest).expect("from_hex failed"),
            digest
        );
    }

    check_known_answers().expect("known answers failed");
}

#[test]
fn text_input_hashes_utf8_bytes() {
    let text = "The quick brown fox jumps over the lazy dog";
    assert_eq!(
        hash_str(text).expect("hash failed").to_string(),
        "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
    );

    let non_ascii = "grüße";
    assert_eq!(
        hash_str(non_ascii).expect("hash failed"),
        hash(non_ascii.as_bytes()).expect("hash failed")
    );
}
