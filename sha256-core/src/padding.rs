use std::convert::TryFrom;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::{Error, Result};

/// Marker byte appended directly after the message: a single `1` bit followed by zeros.
const PAD_MARKER: u8 = 0b1000_0000;

/// Returns the length of a `byte_len` byte message in bits.
///
/// Fails with [`Error::LengthOverflow`] if the bit length does not fit in 64 bits, i.e. for
/// messages of 2^61 bytes or more.
pub fn bit_len(byte_len: usize) -> Result<u64> {
    u64::try_from(byte_len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or_else(|| Error::LengthOverflow(byte_len).into())
}

/// Returns the length of a `byte_len` byte message after padding: the smallest multiple of
/// [`BLOCK_LEN`] that leaves room for the marker byte and the length field.
pub fn padded_len(byte_len: usize) -> Result<usize> {
    bit_len(byte_len)?;
    let min_len = byte_len
        .checked_add(1 + LENGTH_FIELD_LEN)
        .ok_or(Error::LengthOverflow(byte_len))?;
    let blocks = min_len / BLOCK_LEN + usize::from(min_len % BLOCK_LEN != 0);

    blocks
        .checked_mul(BLOCK_LEN)
        .ok_or_else(|| Error::LengthOverflow(byte_len).into())
}

/// Pads `message` to a whole number of blocks.
///
/// The output starts with `message` unmodified, followed by `0x80`, as many zero bytes as needed
/// to reach 56 mod 64, and the original bit length as a big-endian `u64`.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let bits = bit_len(message.len())?;
    let total = padded_len(message.len())?;

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(PAD_MARKER);
    // May already be at 56 mod 64, in which case no zeros are added.
    padded.resize(total - LENGTH_FIELD_LEN, 0);
    padded.extend_from_slice(&bits.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "invalid padded length");
    Ok(padded)
}

/// Splits padded data into blocks, in message order.
pub fn blocks(padded: &[u8]) -> impl Iterator<Item = &[u8; BLOCK_LEN]> + '_ {
    debug_assert_eq!(padded.len() % BLOCK_LEN, 0, "invalid block length");

    padded.chunks_exact(BLOCK_LEN).map(|chunk| {
        <&[u8; BLOCK_LEN]>::try_from(chunk).expect("chunks_exact always yields full blocks")
    })
}
