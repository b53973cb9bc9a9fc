//! Round transformations of the permutation.

use crate::constants::{ROTATIONS, ROUND_CONSTANTS};
use crate::permutation::Rounds;
use crate::state::State;

/// Adds the round constant for `step` of a `rounds`-round permutation into word 2.
#[inline]
pub fn add_constant(state: &mut State, step: usize, rounds: Rounds) {
    debug_assert!(step < rounds.count());
    state.words_mut()[2] ^= ROUND_CONSTANTS[rounds.first_constant() + step];
}

/// Applies the 5-bit S-box bitsliced across the five words.
#[inline]
pub fn substitute(state: &mut State) {
    let x = state.words_mut();
    x[0] ^= x[4];
    x[4] ^= x[3];
    x[2] ^= x[1];

    let t: [u64; 5] = core::array::from_fn(|k| !x[k] & x[(k + 1) % 5]);
    for (k, word) in x.iter_mut().enumerate() {
        *word ^= t[(k + 1) % 5];
    }

    x[1] ^= x[0];
    x[0] ^= x[4];
    x[3] ^= x[2];
}

/// Applies the linear diffusion layer: `w ^= (w >>> r1) ^ (w >>> r2)` per word.
#[inline]
pub fn diffuse(state: &mut State) {
    for (word, &(r1, r2)) in state.words_mut().iter_mut().zip(ROTATIONS.iter()) {
        *word ^= word.rotate_right(r1) ^ word.rotate_right(r2);
    }
}
