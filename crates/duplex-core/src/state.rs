//! The 320-bit duplex state.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of 64-bit words in the state.
pub const STATE_WORDS: usize = 5;

/// Five 64-bit words, wiped on drop.
///
/// Equality is only derived for unit tests; compare states through
/// [`hamming_distance`] or [`State::words`] elsewhere. `PartialEq` on secret
/// words would not be constant time.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct State([u64; STATE_WORDS]);

impl State {
    /// Wraps raw state words.
    pub const fn new(words: [u64; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Builds the pre-initialization layout `[iv, key0, key1, nonce0, nonce1]`.
    pub const fn load(iv: u64, key: [u64; 2], nonce: [u64; 2]) -> Self {
        Self([iv, key[0], key[1], nonce[0], nonce[1]])
    }

    /// Returns the state words.
    #[inline]
    pub fn words(&self) -> &[u64; STATE_WORDS] {
        &self.0
    }

    /// Returns the state words mutably.
    #[inline]
    pub fn words_mut(&mut self) -> &mut [u64; STATE_WORDS] {
        &mut self.0
    }

    /// XORs `pair` into the two words starting at `offset`.
    #[inline]
    pub(crate) fn xor_pair(&mut self, offset: usize, pair: &[u64; 2]) {
        self.0[offset] ^= pair[0];
        self.0[offset + 1] ^= pair[1];
    }

    /// Returns words 3 and 4.
    #[inline]
    pub(crate) fn tail(&self) -> [u64; 2] {
        [self.0[3], self.0[4]]
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("State { [redacted] }")
    }
}

/// Counts differing bits between two states.
pub fn hamming_distance(a: &State, b: &State) -> u32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum()
}
