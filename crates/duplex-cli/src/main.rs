//! Command-line interface for `duplex-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use duplex_core::{open, seal, ConstantTimeEq, Duplex, Key, Nonce, Tag};
use duplex_envelope::Envelope;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Duplex AEAD CLI.
#[derive(Parser)]
#[command(
    name = "duplex",
    version,
    author,
    about = "Permutation-based duplex AEAD (320-bit state, 128-bit key)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt and authenticate a file into an envelope.
    Seal {
        /// 128-bit key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output path for the serialized envelope.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Associated data as hex (authenticated, not encrypted).
        #[arg(long, value_name = "HEX", default_value = "")]
        ad_hex: String,
        /// Explicit 128-bit nonce as 32 hex characters. Never reuse one under the same key.
        #[arg(long, value_name = "HEX", conflicts_with = "seed")]
        nonce_hex: Option<String>,
        /// Optional RNG seed for a reproducible nonce.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Verify an envelope and write the recovered plaintext.
    Open {
        /// 128-bit key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Path to the serialized envelope.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path (written only if authentication succeeds).
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run random round-trip and tamper checks against the core.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Seal and open the fixed reference vector and print the results.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Seal {
            key_hex,
            input,
            output,
            ad_hex,
            nonce_hex,
            seed,
        } => cmd_seal(&key_hex, &input, &output, &ad_hex, nonce_hex.as_deref(), seed),
        Commands::Open {
            key_hex,
            input,
            output,
        } => cmd_open(&key_hex, &input, &output),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo => cmd_demo(),
    }
}

fn cmd_seal(
    key_hex: &str,
    input_path: &PathBuf,
    output_path: &PathBuf,
    ad_hex: &str,
    nonce_hex: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let associated_data = hex::decode(ad_hex.trim()).context("decode associated data hex")?;
    let nonce = match nonce_hex {
        Some(hex_str) => parse_nonce_hex(hex_str)?,
        None => random_nonce(&mut seeded_rng(seed)),
    };
    let message =
        fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;

    let envelope = Envelope::seal(&key, &nonce, &associated_data, &message);
    let bytes = envelope.to_bytes().context("serialize envelope")?;
    fs::write(output_path, bytes).with_context(|| format!("write {}", output_path.display()))?;
    println!("nonce: {}", hex::encode(nonce.to_be_bytes()));
    println!("tag: {}", Tag::from(envelope.tag));
    Ok(())
}

fn cmd_open(key_hex: &str, input_path: &PathBuf, output_path: &PathBuf) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let bytes = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let envelope = Envelope::from_bytes(&bytes).context("deserialize envelope")?;
    let plaintext = envelope
        .open(&key)
        .with_context(|| format!("open {}", input_path.display()))?;
    fs::write(output_path, plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);

    for _ in 0..samples {
        let key = Key::from([rng.next_u64(), rng.next_u64()]);
        let nonce = random_nonce(&mut rng);
        let ad: Vec<u64> = (0..rng.gen_range(0..4)).map(|_| rng.next_u64()).collect();
        let message: Vec<u64> = (0..rng.gen_range(1..16)).map(|_| rng.next_u64()).collect();

        let (ciphertext, tag) = seal(&key, &nonce, &ad, &message);
        let recovered = open(&key, &nonce, &ad, &ciphertext, &tag)
            .context("round trip failed to authenticate")?;
        if recovered != message {
            bail!("round trip returned different plaintext");
        }

        let mut tampered = ciphertext;
        let idx = rng.gen_range(0..tampered.len());
        tampered[idx] ^= 1u64 << rng.gen_range(0..64u32);
        if open(&key, &nonce, &ad, &tampered, &tag).is_ok() {
            bail!("single-bit ciphertext tamper was accepted");
        }
    }
    println!("{samples} samples passed");
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let key = Key::from([0, 0]);
    let nonce = Nonce::from([1, 2]);
    let associated_data = [0x787878, 0x878787, 0x09090];
    let plaintext = [0x0123_4567_89ab_cdef, 0x1234_5678_90ab_cdef];

    let (ciphertext, tag) = seal(&key, &nonce, &associated_data, &plaintext);
    println!("ciphertext: {}", format_words(&ciphertext));
    println!("tag: {tag}");

    open(&key, &nonce, &associated_data, &ciphertext, &tag)
        .context("demo tag verification failed")?;

    let mut recovered = ciphertext.clone();
    let recomputed = Duplex::start(&key, &nonce)
        .absorb(&associated_data)
        .decrypt(&mut recovered)
        .finalize();
    println!("plaintext: {}", format_words(&recovered));
    println!("tag: {recomputed}");

    if recovered != plaintext || !bool::from(recomputed.ct_eq(&tag)) {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn format_words(words: &[u64]) -> String {
    words
        .iter()
        .map(|w| format!("{w:016x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_block_hex(hex_str: &str, what: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    if bytes.len() != 16 {
        bail!("{what} must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn parse_key_hex(hex_str: &str) -> Result<Key> {
    parse_block_hex(hex_str, "key").map(Key::from_be_bytes)
}

fn parse_nonce_hex(hex_str: &str) -> Result<Nonce> {
    parse_block_hex(hex_str, "nonce").map(Nonce::from_be_bytes)
}

fn random_nonce(rng: &mut impl RngCore) -> Nonce {
    Nonce::from([rng.next_u64(), rng.next_u64()])
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
