use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sha2::Digest as _;

use sha256_core::padding::{blocks, pad, padded_len};
use sha256_core::{hash, hash_batch, hash_hex, Digest};

fn differing_bits(a: &Digest, b: &Digest) -> u32 {
    a.as_bytes()
        .iter()
        .zip(b.as_bytes().iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum()
}

proptest! {
    #[test]
    fn hash_is_deterministic(message in proptest::collection::vec(any::<u8>(), 0..512)) {
        let first = hash(&message).expect("hash failed");
        let second = hash(&message).expect("hash failed");
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.as_bytes().len(), 32);
        prop_assert_eq!(hash_hex(&message).expect("hash failed").len(), 64);
    }

    #[test]
    fn hash_matches_sha2(message in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let expected = sha2::Sha256::digest(&message);
        prop_assert_eq!(&hash(&message).expect("hash failed").0[..], &expected[..]);
    }

    #[test]
    fn padding_preserves_message_and_length(message in proptest::collection::vec(any::<u8>(), 0..300)) {
        let padded = pad(&message).expect("pad failed");
        prop_assert_eq!(padded.len() % 64, 0);
        prop_assert_eq!(padded.len(), padded_len(message.len()).expect("padded_len failed"));
        prop_assert!(padded.len() >= message.len() + 9);
        prop_assert!(padded.len() < message.len() + 9 + 64);
        prop_assert_eq!(&padded[..message.len()], &message[..]);

        let mut len_field = [0u8; 8];
        len_field.copy_from_slice(&padded[padded.len() - 8..]);
        prop_assert_eq!(u64::from_be_bytes(len_field), 8 * message.len() as u64);
    }

    #[test]
    fn single_bit_flip_avalanches(
        message in proptest::collection::vec(any::<u8>(), 1..256),
        bit in any::<usize>(),
    ) {
        let bit = bit % (message.len() * 8);
        let mut flipped = message.clone();
        flipped[bit / 8] ^= 1 << (bit % 8);

        let changed = differing_bits(
            &hash(&message).expect("hash failed"),
            &hash(&flipped).expect("hash failed"),
        );
        // Expected around 128 of 256; anything this far out means the state is not mixing.
        prop_assert!(changed > 64 && changed < 192, "only {} bits changed", changed);
    }
}

#[test]
fn block_count_scales_with_input() {
    for k in 0..10 {
        let padded = pad(&vec![0xffu8; 64 * k]).expect("pad failed");
        assert_eq!(blocks(&padded).count(), k + 1);
    }
}

#[test]
fn batch_matches_sequential() {
    let messages: Vec<Vec<u8>> = (0..64usize).map(|i| vec![i as u8; i * 3]).collect();
    let refs: Vec<&[u8]> = messages.iter().map(Vec::as_slice).collect();

    let sequential: Vec<Digest> = refs
        .iter()
        .map(|m| hash(m).expect("hash failed"))
        .collect();
    assert_eq!(hash_batch(&refs).expect("batch failed"), sequential);
}

#[test]
fn digest_serde_roundtrip() {
    let digest = hash(b"abc").expect("hash failed");
    let json = serde_json::to_string(&digest).expect("serialize failed");
    let back: Digest = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(back, digest);
}
