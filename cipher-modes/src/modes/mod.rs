//! Cipher modes implementation

pub mod cbc;

pub use cbc::*;

/// Main struct for cipher modes
pub struct CipherModes;
