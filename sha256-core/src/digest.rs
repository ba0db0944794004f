use std::fmt::{self, Debug, Display, Formatter};

use byteorder::{ByteOrder, BE};
use serde::{Deserialize, Serialize};

use crate::consts::{DIGEST_LEN, STATE_LEN};
use crate::error::{Error, Result};

/// A finished SHA-256 digest.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, Hash)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a digest from exactly 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut out = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut out).map_err(|e| Error::InvalidHex(e.to_string()))?;
        Ok(Digest(out))
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

/// Serializes the final running state, H0 first, each word big-endian.
pub fn assemble(state: [u32; STATE_LEN]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    BE::write_u32_into(&state, &mut out);
    Digest(out)
}
