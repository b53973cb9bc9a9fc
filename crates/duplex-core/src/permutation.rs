//! Multi-round permutation over the 320-bit state.

use crate::round::{add_constant, diffuse, substitute};
use crate::state::State;

/// Round budget of one permutation call.
///
/// Only the two strengths used by the construction exist, so the
/// round-constant index `12 - rounds + step` always stays in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rounds {
    /// Six rounds, used between associated-data and message words.
    Six,
    /// Twelve rounds, used by initialization and finalization.
    Twelve,
}

impl Rounds {
    /// Number of rounds applied.
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Rounds::Six => 6,
            Rounds::Twelve => 12,
        }
    }

    /// Index of the round constant used by step 0.
    #[inline]
    pub(crate) const fn first_constant(self) -> usize {
        12 - self.count()
    }
}

/// Applies `rounds` rounds of constant addition, substitution and diffusion.
pub fn permute(state: &mut State, rounds: Rounds) {
    for step in 0..rounds.count() {
        add_constant(state, step, rounds);
        substitute(state);
        diffuse(state);
    }
}
