//! KRYPTOS - classical-cipher workbench.
//!
//! Command-line front end for the cryptanalysis engine: encrypt or decrypt
//! with a known key, break a ciphertext statistically, generate random
//! pads, or drive the whole thing from an interactive shell.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use memmap2::Mmap;

use kryptos::break_cipher;
use kryptos::cipher::{self, Method};
use kryptos::error::{Error, Result};
use kryptos::util::{bytes_to_string, format_bytes, hex_string, string_to_bytes};

/// Classical-cipher encryption and statistical cryptanalysis.
#[derive(Parser, Debug)]
#[command(name = "kryptos")]
#[command(about = "Classical-cipher encryption and statistical cryptanalysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt text with a chosen cipher method
    Encrypt(TransformArgs),
    /// Decrypt text with a known key
    Decrypt(TransformArgs),
    /// Recover plaintext without the key using statistical analysis
    Break(BreakArgs),
    /// Generate a random pad/IV, printed as hex
    Pad {
        /// Pad length in bytes
        #[arg(short, long)]
        size: usize,
    },
    /// Interactive encrypt/break loop
    Shell,
}

#[derive(Args, Debug)]
struct TransformArgs {
    /// Cipher method: caesar, vigenere, xor, one-time-pad, cbc (or 0-4)
    #[arg(short, long)]
    method: String,

    /// Key material (for one-time-pad encryption, omit to generate a
    /// random pad)
    #[arg(short, long)]
    key: Option<String>,

    #[command(flatten)]
    input: InputArgs,

    /// Encode space bytes instead of passing them through
    #[arg(long)]
    encode_spaces: bool,
}

#[derive(Args, Debug)]
struct BreakArgs {
    /// Break strategy: caesar, vigenere, or xor
    #[arg(short, long)]
    method: String,

    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Literal text input
    #[arg(short, long)]
    text: Option<String>,

    /// Read input bytes from a file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli.command) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(command: &Command) -> Result<()> {
    match command {
        Command::Encrypt(args) => println!("{}", run_transform(args, false)?),
        Command::Decrypt(args) => println!("{}", run_transform(args, true)?),
        Command::Break(args) => println!("{}", run_break(args)?),
        Command::Pad { size } => {
            let mut rng = rand::thread_rng();
            println!("{}", hex_string(&cipher::generate_pad(&mut rng, *size)));
        }
        Command::Shell => run_shell()?,
    }
    Ok(())
}

/// Apply the selected transform in the chosen direction. Decryption negates
/// additive keys; the XOR-based methods are their own inverse apart from
/// CBC, which needs its chain unwound.
fn transform(
    message: &[u8],
    key: &[u8],
    method: Method,
    space_encoding: bool,
    decrypt: bool,
) -> Result<Vec<u8>> {
    let first_key_byte = key
        .first()
        .copied()
        .ok_or(Error::InvalidKeyMaterial("key is empty"))?;

    match method {
        Method::Caesar => {
            let k = if decrypt {
                first_key_byte.wrapping_neg()
            } else {
                first_key_byte
            };
            Ok(cipher::caesar(message, k, space_encoding))
        }
        Method::Vigenere => {
            if decrypt {
                cipher::vigenere(message, &cipher::negate_key(key), space_encoding)
            } else {
                cipher::vigenere(message, key, space_encoding)
            }
        }
        Method::Xor => Ok(cipher::xor(message, first_key_byte, space_encoding)),
        Method::OneTimePad => cipher::one_time_pad(message, key),
        Method::Cbc => {
            if decrypt {
                cipher::cbc_decrypt(message, key)
            } else {
                cipher::cbc_encrypt(message, key)
            }
        }
    }
}

fn run_transform(args: &TransformArgs, decrypt: bool) -> Result<String> {
    let method: Method = args.method.parse()?;
    let message = load_input(&args.input)?;

    let key = match &args.key {
        Some(text) => string_to_bytes(text)?,
        None if !decrypt && method == Method::OneTimePad => {
            let mut rng = rand::thread_rng();
            let pad = cipher::generate_pad(&mut rng, message.len());
            info!("generated one-time pad: {}", hex_string(&pad));
            pad
        }
        None => return Err(Error::InvalidKeyMaterial("no key given")),
    };

    let out = transform(&message, &key, method, args.encode_spaces, decrypt)?;
    Ok(bytes_to_string(&out))
}

fn run_break(args: &BreakArgs) -> Result<String> {
    let method: Method = args.method.parse()?;
    let ciphertext = load_input(&args.input)?;
    break_cipher(&ciphertext, method)
}

fn load_input(input: &InputArgs) -> Result<Vec<u8>> {
    match (&input.text, &input.file) {
        (Some(text), _) => string_to_bytes(text),
        (None, Some(path)) => read_file(path),
        (None, None) => Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no input given",
        ))),
    }
}

/// Memory-map a file and snapshot its bytes, so large ciphertexts are not
/// buffered twice on the way in.
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };
    info!(
        "loaded {} ({})",
        path.display(),
        format_bytes(mmap.len() as u64)
    );
    Ok(mmap.to_vec())
}

// ---------------------------------------------------------------------------
// Interactive shell
// ---------------------------------------------------------------------------

fn run_shell() -> Result<()> {
    let mut lines = io::stdin().lock().lines();

    println!("kryptos interactive shell");
    loop {
        let choice = prompt(&mut lines, "[e]ncrypt, [b]reak, or [q]uit?")?;
        match choice.trim().to_ascii_lowercase().as_str() {
            "e" | "encrypt" => {
                if let Err(e) = shell_encrypt(&mut lines) {
                    error!("{e}");
                }
            }
            "b" | "break" => {
                if let Err(e) = shell_break(&mut lines) {
                    error!("{e}");
                }
            }
            "q" | "quit" | "" => break,
            other => println!("unrecognized choice: {other}"),
        }
    }
    println!("goodbye");
    Ok(())
}

fn shell_encrypt<I>(lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let menu: Vec<&str> = Method::ALL.iter().map(|m| m.name()).collect();
    let method: Method = prompt(lines, &format!("method ({}):", menu.join(", ")))?
        .trim()
        .parse()?;
    let message = string_to_bytes(&prompt(lines, "text to encrypt:")?)?;

    let key_input = prompt(lines, "key (blank to generate a random pad):")?;
    let key = if key_input.is_empty() {
        let mut rng = rand::thread_rng();
        let pad = cipher::generate_pad(&mut rng, message.len().max(1));
        println!("generated pad: {}", hex_string(&pad));
        pad
    } else {
        string_to_bytes(&key_input)?
    };

    let ciphertext = cipher::encrypt(&message, &key, method)?;
    println!("ciphertext: {}", bytes_to_string(&ciphertext));

    // A one-time pad has no statistical attack and no chain to unwind, so
    // there is nothing useful to offer back.
    if method == Method::OneTimePad {
        return Ok(());
    }

    let answer = prompt(lines, "decrypt it back? [y/N]")?;
    if answer.trim().eq_ignore_ascii_case("y") {
        let plain = match method {
            Method::Cbc => bytes_to_string(&cipher::cbc_decrypt(&ciphertext, &key)?),
            _ => break_cipher(&ciphertext, method)?,
        };
        println!("{plain}");
    }

    Ok(())
}

fn shell_break<I>(lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    let method: Method = prompt(lines, "method (caesar, vigenere, xor):")?
        .trim()
        .parse()?;
    let ciphertext = string_to_bytes(&prompt(lines, "ciphertext:")?)?;
    println!("{}", break_cipher(&ciphertext, method)?);
    Ok(())
}

/// Print a prompt and read one line; end-of-input reads as an empty answer
/// so the shell winds down instead of blocking.
fn prompt<I>(lines: &mut I, message: &str) -> Result<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{message} ");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?.unwrap_or_default())
}
