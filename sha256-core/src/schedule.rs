use byteorder::{ByteOrder, BE};

use crate::consts::{BLOCK_LEN, SCHEDULE_LEN};

/// The expanded message schedule for one block, one word per round.
pub type Schedule = [u32; SCHEDULE_LEN];

/// Number of schedule words taken directly from the block.
const BLOCK_WORDS: usize = BLOCK_LEN / 4;

#[inline(always)]
pub(crate) fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
pub(crate) fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expands a single block into its 64-word message schedule.
pub fn expand(block: &[u8; BLOCK_LEN]) -> Schedule {
    let mut w = [0u32; SCHEDULE_LEN];
    BE::read_u32_into(block, &mut w[..BLOCK_WORDS]);

    for i in BLOCK_WORDS..SCHEDULE_LEN {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }

    w
}
