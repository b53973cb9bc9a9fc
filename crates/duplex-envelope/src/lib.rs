//! Byte-oriented framing on top of `duplex-core`.
//!
//! The core works on 64-bit words. This crate packs byte strings into
//! big-endian words, authenticates the unpadded lengths, and stores the
//! result in a versioned [`Envelope`] serialized with `bincode`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod envelope;
mod error;
mod framing;

pub use envelope::{Envelope, SchemeId, ENVELOPE_VERSION};
pub use error::EnvelopeError;
pub use framing::{framed_associated_data, words_from_be_bytes, words_to_be_bytes, WORD_BYTES};
