//! Byte/word conversion.

/// Bytes per state word.
pub const WORD_BYTES: usize = 8;

/// Packs `bytes` into big-endian words, zero-padding the final word.
pub fn words_from_be_bytes(bytes: &[u8]) -> Vec<u64> {
    bytes
        .chunks(WORD_BYTES)
        .map(|chunk| {
            let mut word = [0u8; WORD_BYTES];
            word[..chunk.len()].copy_from_slice(chunk);
            u64::from_be_bytes(word)
        })
        .collect()
}

/// Unpacks big-endian words and truncates to `len` bytes.
///
/// `len` is clamped to the number of bytes the words hold. The output is
/// allocated once, so no partial copy of the plaintext is left behind by a
/// reallocation.
pub fn words_to_be_bytes(words: &[u64], len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(words.len() * WORD_BYTES);
    for word in words {
        out.extend_from_slice(&word.to_be_bytes());
    }
    out.truncate(len);
    out
}

/// Associated-data words fed to the core: `[ad_len, message_len] ++ words(ad)`.
///
/// Prefixing both byte lengths authenticates the padding of the associated
/// data and of the message.
pub fn framed_associated_data(associated_data: &[u8], message_len: usize) -> Vec<u64> {
    let mut words = Vec::with_capacity(2 + associated_data.len().div_ceil(WORD_BYTES));
    words.push(associated_data.len() as u64);
    words.push(message_len as u64);
    words.extend(words_from_be_bytes(associated_data));
    words
}

/// Number of words needed to hold `len` bytes.
pub(crate) fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BYTES)
}
