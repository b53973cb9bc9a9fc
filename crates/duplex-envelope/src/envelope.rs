//! Serialized sealed message.

use duplex_core::{open_in_place, seal_in_place, Key, Nonce, Tag};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::EnvelopeError;
use crate::framing::{framed_associated_data, word_count, words_from_be_bytes, words_to_be_bytes};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u32 = 1;

/// Scheme identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemeId {
    /// 320-bit duplex, 12/6-round permutation, 128-bit key/nonce/tag.
    Duplex320,
}

/// A sealed message with everything except the key needed to open it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Format version.
    pub version: u32,
    /// Scheme identifier.
    pub scheme: SchemeId,
    /// Nonce words.
    pub nonce: [u64; 2],
    /// Associated data, authenticated but stored in the clear.
    pub associated_data: Vec<u8>,
    /// Plaintext length in bytes before padding.
    pub message_len: u64,
    /// Ciphertext words.
    pub ciphertext: Vec<u64>,
    /// Authentication tag words.
    pub tag: [u64; 2],
}

impl Envelope {
    /// Seals `message` under `key` and `nonce`.
    pub fn seal(key: &Key, nonce: &Nonce, associated_data: &[u8], message: &[u8]) -> Self {
        let ad_words = framed_associated_data(associated_data, message.len());
        let mut ciphertext = words_from_be_bytes(message);
        let tag = seal_in_place(key, nonce, &ad_words, &mut ciphertext);
        Self {
            version: ENVELOPE_VERSION,
            scheme: SchemeId::Duplex320,
            nonce: *nonce.words(),
            associated_data: associated_data.to_vec(),
            message_len: message.len() as u64,
            ciphertext,
            tag: *tag.words(),
        }
    }

    /// Verifies the envelope and returns the plaintext bytes.
    pub fn open(&self, key: &Key) -> Result<Vec<u8>, EnvelopeError> {
        if self.version != ENVELOPE_VERSION {
            return Err(EnvelopeError::UnsupportedVersion(self.version));
        }
        let message_len =
            usize::try_from(self.message_len).map_err(|_| EnvelopeError::Truncated)?;
        if word_count(message_len) != self.ciphertext.len() {
            return Err(EnvelopeError::Truncated);
        }

        let ad_words = framed_associated_data(&self.associated_data, message_len);
        let mut words = self.ciphertext.clone();
        open_in_place(
            key,
            &Nonce::from(self.nonce),
            &ad_words,
            &mut words,
            &Tag::from(self.tag),
        )?;
        let plaintext = words_to_be_bytes(&words, message_len);
        words.zeroize();
        Ok(plaintext)
    }

    /// Serializes the envelope with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes an envelope with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn key() -> Key {
        Key::from_be_bytes(*b"0123456789abcdef")
    }

    #[test]
    fn seal_open_through_bytes() {
        let nonce = Nonce::from([1, 2]);
        let envelope = Envelope::seal(&key(), &nonce, b"header", b"attack at dawn");
        assert_eq!(envelope.ciphertext.len(), 2);

        let bytes = envelope.to_bytes().expect("serialize");
        let decoded = Envelope::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, envelope);
        assert_eq!(decoded.open(&key()).expect("open"), b"attack at dawn".to_vec());
    }

    #[test]
    fn arbitrary_lengths_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([30u8; 32]);
        for len in 0..40 {
            let mut message = vec![0u8; len];
            rng.fill_bytes(&mut message);
            let mut ad = vec![0u8; len % 11];
            rng.fill_bytes(&mut ad);
            let nonce = Nonce::from([rng.next_u64(), rng.next_u64()]);
            let envelope = Envelope::seal(&key(), &nonce, &ad, &message);
            assert_eq!(envelope.open(&key()).expect("open"), message);
        }
    }

    #[test]
    fn tampered_length_is_rejected() {
        let nonce = Nonce::from([3, 4]);
        let mut envelope = Envelope::seal(&key(), &nonce, b"", b"twelve bytes");
        envelope.message_len = 9;
        assert!(matches!(
            envelope.open(&key()),
            Err(EnvelopeError::Authentication(_))
        ));
        envelope.message_len = 20;
        assert!(matches!(envelope.open(&key()), Err(EnvelopeError::Truncated)));
    }

    #[test]
    fn dropping_a_zero_word_is_rejected() {
        let nonce = Nonce::from([11, 12]);
        let mut envelope = Envelope::seal(&key(), &nonce, b"", &[0u8; 8]);
        envelope.ciphertext.clear();
        envelope.message_len = 0;
        assert!(matches!(
            envelope.open(&key()),
            Err(EnvelopeError::Authentication(_))
        ));
    }

    #[test]
    fn tampered_associated_data_is_rejected() {
        let nonce = Nonce::from([5, 6]);
        let mut envelope = Envelope::seal(&key(), &nonce, b"v1", b"payload");
        envelope.associated_data = b"v2".to_vec();
        assert!(matches!(
            envelope.open(&key()),
            Err(EnvelopeError::Authentication(_))
        ));
    }

    #[test]
    fn wrong_key_is_rejected() {
        let nonce = Nonce::from([7, 8]);
        let envelope = Envelope::seal(&key(), &nonce, b"", b"payload");
        let other = Key::from_be_bytes([0u8; 16]);
        assert!(matches!(
            envelope.open(&other),
            Err(EnvelopeError::Authentication(_))
        ));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let nonce = Nonce::from([9, 10]);
        let mut envelope = Envelope::seal(&key(), &nonce, b"", b"payload");
        envelope.version = 2;
        assert!(matches!(
            envelope.open(&key()),
            Err(EnvelopeError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            Envelope::from_bytes(&[0xff; 3]),
            Err(EnvelopeError::Codec(_))
        ));
    }
}
