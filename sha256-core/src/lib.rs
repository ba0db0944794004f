//! A portable implementation of the [SHA-256][1] cryptographic hash function.
//!
//! Hashing is one-shot: [`hash`] takes a complete in-memory message and returns its [`Digest`].
//!
//! [1]: https://csrc.nist.gov/publications/detail/fips/180/4/final

#![deny(clippy::all, clippy::perf, clippy::correctness)]
#![allow(clippy::unreadable_literal)]

pub mod compress;
pub mod consts;
pub mod digest;
pub mod error;
pub mod padding;
pub mod schedule;
pub mod settings;
pub mod vectors;

mod sha256;

pub use self::digest::Digest;
pub use self::error::{Error, Result};
pub use self::sha256::{hash, hash_batch, hash_hex, hash_str};

#[cfg(test)]
pub(crate) const TEST_SEED: [u8; 16] = [
    0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc, 0xe5,
];
