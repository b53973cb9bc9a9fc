//! Seals two words with associated data and opens them again.

use duplex_core::{open, seal, Key, Nonce};

fn main() {
    // Fixed key and nonce for reproducibility in the example only.
    let key = Key::from_be_bytes(*b"example key 0001");
    let nonce = Nonce::from([1, 2]);
    let associated_data = [0x787878, 0x878787];
    let plaintext = [u64::from_be_bytes(*b"first wd"), u64::from_be_bytes(*b"second w")];

    let (ciphertext, tag) = seal(&key, &nonce, &associated_data, &plaintext);
    let recovered =
        open(&key, &nonce, &associated_data, &ciphertext, &tag).expect("tag verifies");
    assert_eq!(recovered, plaintext);

    println!("tag: {tag}");
    println!("example succeeded; plaintext recovered");
}
