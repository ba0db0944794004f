use log::{debug, log_enabled, trace, Level};
use rayon::prelude::*;

use crate::compress::compress;
use crate::consts::{BLOCK_LEN, H256, STATE_LEN};
use crate::digest::{assemble, Digest};
use crate::error::Result;
use crate::padding::{blocks, pad};
use crate::schedule::expand;
use crate::settings::SETTINGS;

/// A single hash computation: owns its running state from the initial value until `finish`.
#[derive(Clone)]
pub(crate) struct Sha256 {
    state: [u32; STATE_LEN],
    blocks: u64,
}

impl Default for Sha256 {
    fn default() -> Self {
        Sha256 {
            state: H256,
            blocks: 0,
        }
    }
}

impl Sha256 {
    pub fn new() -> Self {
        Sha256::default()
    }

    /// Hashes a complete message.
    pub fn digest(message: &[u8]) -> Result<Digest> {
        let padded = pad(message)?;
        trace!(
            "hashing {} bytes in {} blocks",
            message.len(),
            padded.len() / BLOCK_LEN
        );

        let mut sha = Sha256::new();
        for block in blocks(&padded) {
            sha.process_block(block);
        }
        Ok(sha.finish())
    }

    /// Folds the next block of padded input into the running state.
    pub fn process_block(&mut self, block: &[u8; BLOCK_LEN]) {
        let schedule = expand(block);
        compress(&mut self.state, &schedule);

        if log_enabled!(Level::Trace) {
            trace!("block {}: state {:08x?}", self.blocks, self.state);
        }
        self.blocks += 1;
    }

    pub fn finish(self) -> Digest {
        assemble(self.state)
    }
}

opaque_debug::implement!(Sha256);

/// Computes the SHA-256 digest of `message`.
///
/// Fails only if the bit length of `message` does not fit in 64 bits.
pub fn hash(message: &[u8]) -> Result<Digest> {
    Sha256::digest(message)
}

/// Computes the SHA-256 digest of `message`, rendered as lowercase hex.
pub fn hash_hex(message: &[u8]) -> Result<String> {
    hash(message).map(|digest| digest.to_hex())
}

/// Computes the SHA-256 digest of the UTF-8 bytes of `text`.
pub fn hash_str(text: &str) -> Result<Digest> {
    hash(text.as_bytes())
}

/// Hashes independent messages, returning one digest per message in the same order.
///
/// Large batches are spread over the rayon thread pool, see
/// [`Settings::parallel_batch_threshold`](crate::settings::Settings).
pub fn hash_batch(messages: &[&[u8]]) -> Result<Vec<Digest>> {
    hash_batch_with_threshold(messages, SETTINGS.parallel_batch_threshold)
}

pub(crate) fn hash_batch_with_threshold(
    messages: &[&[u8]],
    threshold: usize,
) -> Result<Vec<Digest>> {
    if messages.len() >= threshold {
        debug!("hashing batch of {} messages in parallel", messages.len());
        messages.par_iter().map(|message| hash(message)).collect()
    } else {
        debug!("hashing batch of {} messages", messages.len());
        messages.iter().map(|message| hash(message)).collect()
    }
}
