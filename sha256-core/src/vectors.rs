//! Known-answer vectors from FIPS 180-4 and RFC 6234.

use anyhow::ensure;

use crate::error::{Error, Result};
use crate::sha256::hash;

/// A message given as `input` repeated `repeat` times, and its expected digest.
#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    pub name: &'static str,
    pub input: &'static [u8],
    pub repeat: usize,
    pub digest: &'static str,
}

impl KnownAnswer {
    pub fn message(&self) -> Vec<u8> {
        self.input.repeat(self.repeat)
    }
}

pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        input: b"",
        repeat: 1,
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        input: b"abc",
        repeat: 1,
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "two-block",
        input: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        repeat: 1,
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "896-bit",
        input: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        repeat: 1,
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
    KnownAnswer {
        name: "million-a",
        input: b"a",
        repeat: 1_000_000,
        digest: "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
    },
    KnownAnswer {
        name: "rfc6234-test4",
        input: b"0123456701234567012345670123456701234567012345670123456701234567",
        repeat: 10,
        digest: "594847328451bdfa85056225462cc1d867d877fb388df0ce35f25ab5562bfbb5",
    },
];

/// Hashes every known-answer vector and fails on the first mismatch.
pub fn check_known_answers() -> Result<()> {
    for vector in KNOWN_ANSWERS {
        let actual = hash(&vector.message())?.to_hex();
        ensure!(
            actual == vector.digest,
            Error::KnownAnswerMismatch {
                name: vector.name,
                expected: vector.digest,
                actual,
            }
        );
    }

    Ok(())
}
