//! Permutation-based authenticated encryption with associated data.
//!
//! The construction runs a duplex over a 320-bit state of five 64-bit words:
//! - a 12-round permutation for initialization and finalization,
//! - a 6-round permutation between associated-data and message words,
//! - a 128-bit key, a 128-bit nonce and a 128-bit tag.
//!
//! Inputs are sequences of 64-bit words. Conversions to bytes are big-endian
//! (see [`Key::from_be_bytes`]); framing of arbitrary byte strings is left to
//! callers. Nonces must never repeat under one key.
//!
//! The tag does not bind the message length: a final plaintext word of zero
//! yields the same tag as the message without it. Callers must authenticate
//! the length themselves, for example by placing it in the associated data
//! as `duplex-envelope` does.
//!
//! The code is straight-line word arithmetic with no secret-dependent branches
//! or table lookups, but it has not been evaluated against power or EM
//! side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod aead;
mod constants;
mod error;
mod key;
mod permutation;
pub mod phases;
pub mod round;
mod state;

pub use crate::aead::{open, open_in_place, seal, seal_in_place};
pub use crate::constants::{AD_DOMAIN_SEPARATOR, IV, ROTATIONS, ROUND_CONSTANTS};
pub use crate::error::AuthenticationFailure;
pub use crate::key::{Key, Nonce, Tag};
pub use crate::permutation::{permute, Rounds};
pub use crate::phases::Duplex;
pub use crate::state::{hamming_distance, State, STATE_WORDS};
pub use subtle::ConstantTimeEq;
