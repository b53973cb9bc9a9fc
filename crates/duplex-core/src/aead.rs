//! Sealing and opening: the public AEAD entry points.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::AuthenticationFailure;
use crate::key::{Key, Nonce, Tag};
use crate::phases::Duplex;

/// Encrypts `buffer` in place and returns the tag over `(associated_data, ciphertext)`.
pub fn seal_in_place(key: &Key, nonce: &Nonce, associated_data: &[u64], buffer: &mut [u64]) -> Tag {
    Duplex::start(key, nonce)
        .absorb(associated_data)
        .encrypt(buffer)
        .finalize()
}

/// Decrypts `buffer` in place and verifies `tag` in constant time.
///
/// On mismatch the buffer is zeroed before the error is returned, so no
/// unauthenticated plaintext is left behind.
pub fn open_in_place(
    key: &Key,
    nonce: &Nonce,
    associated_data: &[u64],
    buffer: &mut [u64],
    tag: &Tag,
) -> Result<(), AuthenticationFailure> {
    let expected = Duplex::start(key, nonce)
        .absorb(associated_data)
        .decrypt(buffer)
        .finalize();

    if bool::from(expected.ct_eq(tag)) {
        Ok(())
    } else {
        buffer.zeroize();
        Err(AuthenticationFailure)
    }
}

/// Encrypts `plaintext`, returning the ciphertext and tag.
pub fn seal(key: &Key, nonce: &Nonce, associated_data: &[u64], plaintext: &[u64]) -> (Vec<u64>, Tag) {
    let mut ciphertext = plaintext.to_vec();
    let tag = seal_in_place(key, nonce, associated_data, &mut ciphertext);
    (ciphertext, tag)
}

/// Decrypts `ciphertext` and returns the plaintext only if `tag` verifies.
pub fn open(
    key: &Key,
    nonce: &Nonce,
    associated_data: &[u64],
    ciphertext: &[u64],
    tag: &Tag,
) -> Result<Vec<u64>, AuthenticationFailure> {
    let mut plaintext = ciphertext.to_vec();
    open_in_place(key, nonce, associated_data, &mut plaintext, tag)?;
    Ok(plaintext)
}
