//! Envelope errors.

use std::fmt;

use duplex_core::AuthenticationFailure;

/// Errors produced when decoding or opening an [`Envelope`](crate::Envelope).
#[derive(Debug)]
pub enum EnvelopeError {
    /// The envelope was written by an unknown format version.
    UnsupportedVersion(u32),
    /// The ciphertext word count does not match the recorded message length.
    Truncated,
    /// Tag verification failed.
    Authentication(AuthenticationFailure),
    /// The serialized bytes could not be encoded or decoded.
    Codec(bincode::Error),
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeError::UnsupportedVersion(v) => write!(f, "unsupported envelope version {v}"),
            EnvelopeError::Truncated => {
                write!(f, "ciphertext length does not match the recorded message length")
            }
            EnvelopeError::Authentication(err) => write!(f, "{err}"),
            EnvelopeError::Codec(err) => write!(f, "envelope codec error: {err}"),
        }
    }
}

impl std::error::Error for EnvelopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvelopeError::Authentication(err) => Some(err),
            EnvelopeError::Codec(err) => Some(&**err),
            _ => None,
        }
    }
}

impl From<AuthenticationFailure> for EnvelopeError {
    fn from(err: AuthenticationFailure) -> Self {
        EnvelopeError::Authentication(err)
    }
}

impl From<bincode::Error> for EnvelopeError {
    fn from(err: bincode::Error) -> Self {
        EnvelopeError::Codec(err)
    }
}
