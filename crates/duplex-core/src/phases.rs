//! Phase controller: initialization, associated data, message, finalization.
//!
//! The free functions operate on a caller-owned [`State`] and must be called in
//! the order `initialize → absorb_associated_data → encrypt | decrypt → finalize`.
//! [`Duplex`] wraps the same sequence in a typestate so that a skipped or
//! reordered phase does not compile.

use core::marker::PhantomData;

use crate::constants::{AD_DOMAIN_SEPARATOR, IV};
use crate::key::{Key, Nonce, Tag};
use crate::permutation::{permute, Rounds};
use crate::state::State;

/// Runs the initial 12-round permutation over `[IV, key, nonce]` and re-keys words 3 and 4.
pub fn initialize(state: &mut State, key: &Key) {
    permute(state, Rounds::Twelve);
    state.xor_pair(3, key.words());
}

/// Absorbs associated data one word at a time, then applies the domain separator.
///
/// The separator is applied even when `associated_data` is empty.
pub fn absorb_associated_data(state: &mut State, associated_data: &[u64]) {
    for &word in associated_data {
        state.words_mut()[0] ^= word;
        permute(state, Rounds::Six);
    }
    state.words_mut()[4] ^= AD_DOMAIN_SEPARATOR;
}

/// Encrypts `buffer` in place. Each ciphertext word replaces state word 0.
pub fn encrypt(state: &mut State, buffer: &mut [u64]) {
    let last = buffer.len().saturating_sub(1);
    for (i, word) in buffer.iter_mut().enumerate() {
        *word ^= state.words()[0];
        state.words_mut()[0] = *word;
        if i < last {
            permute(state, Rounds::Six);
        }
    }
}

/// Decrypts `buffer` in place. The ciphertext word, not the plaintext, re-enters the state.
pub fn decrypt(state: &mut State, buffer: &mut [u64]) {
    let last = buffer.len().saturating_sub(1);
    for (i, word) in buffer.iter_mut().enumerate() {
        let ciphertext = *word;
        *word = ciphertext ^ state.words()[0];
        state.words_mut()[0] = ciphertext;
        if i < last {
            permute(state, Rounds::Six);
        }
    }
}

/// Keys words 1 and 2, runs the final 12-round permutation and extracts the tag.
pub fn finalize(state: &mut State, key: &Key) -> Tag {
    state.xor_pair(1, key.words());
    permute(state, Rounds::Twelve);
    state.xor_pair(3, key.words());
    Tag::from(state.tail())
}

/// Phase marker: state initialized from key and nonce.
#[derive(Debug)]
pub struct Initialized;

/// Phase marker: associated data absorbed and domain-separated.
#[derive(Debug)]
pub struct Absorbed;

/// Phase marker: message encrypted or decrypted.
#[derive(Debug)]
pub struct Processed;

/// Working storage of one operation; wiped on drop through its fields.
struct Working {
    state: State,
    key: Key,
}

/// One in-flight AEAD operation.
///
/// The state and a copy of the key live in one heap allocation that stays put
/// across phase transitions (only the box pointer moves). Both are wiped when
/// the operation is dropped, including after [`Duplex::finalize`].
pub struct Duplex<P> {
    working: Box<Working>,
    _phase: PhantomData<P>,
}

impl<P> Duplex<P> {
    fn into_phase<Q>(self) -> Duplex<Q> {
        Duplex {
            working: self.working,
            _phase: PhantomData,
        }
    }
}

impl Duplex<Initialized> {
    /// Loads `[IV, key, nonce]` and runs initialization.
    pub fn start(key: &Key, nonce: &Nonce) -> Self {
        let mut working = Box::new(Working {
            state: State::default(),
            key: Key::from([0, 0]),
        });
        working.key.words_mut().copy_from_slice(key.words());
        let words = working.state.words_mut();
        words[0] = IV;
        words[1..3].copy_from_slice(key.words());
        words[3..].copy_from_slice(nonce.words());

        let Working { state, key: owned } = &mut *working;
        initialize(state, owned);
        Self {
            working,
            _phase: PhantomData,
        }
    }

    /// Absorbs associated data.
    pub fn absorb(mut self, associated_data: &[u64]) -> Duplex<Absorbed> {
        absorb_associated_data(&mut self.working.state, associated_data);
        self.into_phase()
    }
}

impl Duplex<Absorbed> {
    /// Encrypts `buffer` in place.
    pub fn encrypt(mut self, buffer: &mut [u64]) -> Duplex<Processed> {
        encrypt(&mut self.working.state, buffer);
        self.into_phase()
    }

    /// Decrypts `buffer` in place.
    pub fn decrypt(mut self, buffer: &mut [u64]) -> Duplex<Processed> {
        decrypt(&mut self.working.state, buffer);
        self.into_phase()
    }
}

impl Duplex<Processed> {
    /// Finalizes and returns the tag.
    pub fn finalize(mut self) -> Tag {
        let Working { state, key } = &mut *self.working;
        finalize(state, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_matches_reference_state() {
        let key = Key::from([0, 0]);
        let mut state = State::load(IV, *key.words(), [1, 2]);
        initialize(&mut state, &key);
        assert_eq!(
            state.words(),
            &[
                0xa7f7_eff3_fb76_5990,
                0x760a_80aa_3983_63c6,
                0xd72f_ed44_ba38_e762,
                0xce81_9b10_9cce_657b,
                0xf5eb_c762_1c45_e322,
            ]
        );
    }

    #[test]
    fn empty_associated_data_still_separates() {
        let mut with_sep = State::default();
        absorb_associated_data(&mut with_sep, &[]);
        assert_eq!(with_sep.words(), &[0, 0, 0, 0, 1]);
    }

    #[test]
    fn single_word_message_skips_trailing_permutation() {
        let mut state = State::new([0x55, 1, 2, 3, 4]);
        let mut buffer = [0xff];
        encrypt(&mut state, &mut buffer);
        assert_eq!(buffer, [0xaa]);
        assert_eq!(state.words(), &[0xaa, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_message_leaves_state_untouched() {
        let mut state = State::new([9, 8, 7, 6, 5]);
        encrypt(&mut state, &mut []);
        decrypt(&mut state, &mut []);
        assert_eq!(state.words(), &[9, 8, 7, 6, 5]);
    }

    #[test]
    fn decrypt_mirrors_encrypt_state() {
        let start = State::new([11, 22, 33, 44, 55]);
        let plaintext = [0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210, 42];

        let mut enc_state = start.clone();
        let mut buffer = plaintext;
        encrypt(&mut enc_state, &mut buffer);
        assert_ne!(buffer, plaintext);

        let mut dec_state = start;
        decrypt(&mut dec_state, &mut buffer);
        assert_eq!(buffer, plaintext);
        assert_eq!(enc_state, dec_state);
    }

    #[test]
    fn ciphertext_feeds_back_into_state() {
        let mut state = State::new([0xf0f0, 0, 0, 0, 0]);
        let mut buffer = [0x0f0f, 0];
        encrypt(&mut state, &mut buffer);
        assert_eq!(buffer[0], 0xffff);

        let mut expected = State::new([0xffff, 0, 0, 0, 0]);
        permute(&mut expected, Rounds::Six);
        assert_eq!(buffer[1], expected.words()[0]);
        assert_eq!(state.words()[1..], expected.words()[1..]);
    }

    #[test]
    fn typestate_matches_free_functions() {
        let key = Key::from([0x1111, 0x2222]);
        let nonce = Nonce::from([3, 4]);
        let ad = [5, 6];
        let mut via_typestate = [7, 8, 9];
        let mut via_functions = via_typestate;

        let tag_a = Duplex::start(&key, &nonce)
            .absorb(&ad)
            .encrypt(&mut via_typestate)
            .finalize();

        let mut state = State::load(IV, *key.words(), *nonce.words());
        initialize(&mut state, &key);
        absorb_associated_data(&mut state, &ad);
        encrypt(&mut state, &mut via_functions);
        let tag_b = finalize(&mut state, &key);

        assert_eq!(via_typestate, via_functions);
        assert_eq!(tag_a.words(), tag_b.words());
    }

    #[test]
    fn phase_transitions_keep_state_in_place() {
        let key = Key::from([0xaaaa, 0xbbbb]);
        let nonce = Nonce::from([1, 2]);
        let mut buffer = [3, 4];

        let initialized = Duplex::start(&key, &nonce);
        let address = &initialized.working.state as *const State;
        assert_eq!(initialized.working.key.words(), key.words());

        let absorbed = initialized.absorb(&[5]);
        assert_eq!(&absorbed.working.state as *const State, address);
        let processed = absorbed.encrypt(&mut buffer);
        assert_eq!(&processed.working.state as *const State, address);
    }

    #[test]
    fn start_loads_and_initializes() {
        let key = Key::from([0, 0]);
        let duplex = Duplex::start(&key, &Nonce::from([1, 2]));
        let mut expected = State::load(IV, [0, 0], [1, 2]);
        initialize(&mut expected, &key);
        assert_eq!(duplex.working.state, expected);
    }
}
