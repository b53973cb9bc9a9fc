//! Error types for the duplex AEAD.

use std::fmt;

/// Tag verification failed on `open`.
///
/// Carries no detail about how much of the tag matched, and the decrypted
/// buffer has already been wiped when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationFailure;

impl fmt::Display for AuthenticationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authentication failed")
    }
}

impl std::error::Error for AuthenticationFailure {}
