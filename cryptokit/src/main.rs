use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cipher;

use cipher::{Cipher, CipherKind};

/// Command-line arguments for the cryptokit program.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Cipher algorithm to use
    #[arg(short, long, value_enum, help = "Cipher algorithm")]
    cipher: CipherKind,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Path to the input file containing data to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Path to the output file where the result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Path to the key file; surrounding whitespace is ignored
    #[arg(short, long, help = "File containing the key for the cipher")]
    key: Option<String>,

    /// Path to a Playfair (5x5) or Vigenère (26x26) table file
    #[arg(short, long, help = "File containing the cipher table")]
    table: Option<String>,

    /// Read/write AES and DES ciphertext as base64(IV):base64(ciphertext) text
    #[arg(short, long, help = "Use base64 text for AES/DES ciphertext")]
    armor: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the cryptokit program.
fn main() -> Result<()> {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    run(&cli)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "cryptokit=debug,cipher_modes=debug,classical_ciphers=debug"
    } else {
        "cryptokit=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Read key and table sources
    let key = cli
        .key
        .as_deref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read key file {path}"))
                .map(|key| key.trim().to_string())
        })
        .transpose()?;

    let table = cli
        .table
        .as_deref()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("Failed to read table file {path}"))
        })
        .transpose()?;

    let cipher = Cipher::from_sources(cli.cipher, key.as_deref(), table.as_deref())?;

    // Read input file content
    let content: Vec<u8> = fs::read(&cli.file)
        .with_context(|| format!("Failed to read input file {}", cli.file))?;
    debug!(bytes = content.len(), file = %cli.file, "input loaded");

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            info!("Encrypting with {}", cipher.name());
            cipher.encrypt(&content, cli.armor)?
        }
        OperationMode::Decrypt => {
            info!("Decrypting with {}", cipher.name());
            cipher.decrypt(&content, cli.armor)?
        }
    };

    // Write result to output file
    fs::write(&cli.output, &result)
        .with_context(|| format!("Failed to write output file {}", cli.output))?;

    println!("Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}
