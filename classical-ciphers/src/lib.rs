//! # Classical Ciphers Library
//!
//! Pencil-and-paper ciphers implemented from scratch for teaching purposes.
//!
//! ## Supported Ciphers
//!
//! - **Playfair** - digraph substitution over a 5x5 key square (I/J merged)
//! - **Vigenère** - polyalphabetic substitution over a 26x26 table
//!
//! Both engines are built once, from a key or from a table supplied as text,
//! and are immutable afterwards. Table text may use any layout: only ASCII
//! letters are read.
//!
//! ## Usage
//!
//! ```rust
//! use classical_ciphers::{playfair, Playfair, Vigenere};
//!
//! let playfair = Playfair::from_key("monarchy");
//! let ciphertext = playfair.encrypt("balloon");
//! assert_eq!(playfair.decrypt(&ciphertext)?, playfair::prepare("balloon"));
//!
//! let vigenere = Vigenere::new("lemon")?;
//! assert_eq!(vigenere.encrypt("attack at dawn"), "LXFOPV EF RNHR");
//! # Ok::<(), classical_ciphers::CipherError>(())
//! ```
//!
//! None of this offers any real security.

pub mod error;
pub mod playfair;
pub mod text;
pub mod vigenere;

pub use error::{CipherError, Result, ValidationError};
pub use playfair::{Matrix, Playfair};
pub use vigenere::{Tabula, Vigenere};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
