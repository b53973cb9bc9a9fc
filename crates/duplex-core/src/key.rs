//! Fixed-width key, nonce and tag types.
//!
//! All three are two 64-bit words. Byte conversions are big-endian: word 0
//! is bytes `0..8`, word 1 is bytes `8..16`, matching the hexadecimal form
//! of the round-constant table.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

fn words_from_be(bytes: &[u8; 16]) -> [u64; 2] {
    let mut hi = [0u8; 8];
    let mut lo = [0u8; 8];
    hi.copy_from_slice(&bytes[..8]);
    lo.copy_from_slice(&bytes[8..]);
    [u64::from_be_bytes(hi), u64::from_be_bytes(lo)]
}

fn be_from_words(words: &[u64; 2]) -> [u8; 16] {
    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&words[0].to_be_bytes());
    out[8..].copy_from_slice(&words[1].to_be_bytes());
    out
}

/// 128-bit secret key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u64; 2]);

impl Key {
    /// Parses a key from 16 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self(words_from_be(&bytes))
    }

    /// Returns the key as 16 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        be_from_words(&self.0)
    }

    /// Returns the key words.
    #[inline]
    pub fn words(&self) -> &[u64; 2] {
        &self.0
    }

    #[inline]
    pub(crate) fn words_mut(&mut self) -> &mut [u64; 2] {
        &mut self.0
    }
}

impl From<[u64; 2]> for Key {
    fn from(value: [u64; 2]) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key { [redacted] }")
    }
}

/// 128-bit public nonce. Must never repeat under one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nonce([u64; 2]);

impl Nonce {
    /// Parses a nonce from 16 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self(words_from_be(&bytes))
    }

    /// Returns the nonce as 16 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        be_from_words(&self.0)
    }

    /// Returns the nonce words.
    #[inline]
    pub fn words(&self) -> &[u64; 2] {
        &self.0
    }
}

impl From<[u64; 2]> for Nonce {
    fn from(value: [u64; 2]) -> Self {
        Self(value)
    }
}

/// 128-bit authentication tag.
///
/// `PartialEq` is not derived; compare tags with [`ConstantTimeEq`].
#[derive(Clone, Copy, Debug)]
pub struct Tag([u64; 2]);

impl Tag {
    /// Parses a tag from 16 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self(words_from_be(&bytes))
    }

    /// Returns the tag as 16 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        be_from_words(&self.0)
    }

    /// Returns the tag words.
    #[inline]
    pub fn words(&self) -> &[u64; 2] {
        &self.0
    }
}

impl From<[u64; 2]> for Tag {
    fn from(value: [u64; 2]) -> Self {
        Self(value)
    }
}

impl ConstantTimeEq for Tag {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0]) & self.0[1].ct_eq(&other.0[1])
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x} {:016x}", self.0[0], self.0[1])
    }
}
