//! Module containing subcommands.

pub mod export;
pub mod import;
pub mod new;
pub mod public_key;

use anyhow::{Context as _, Result};
use s256pem::{Codec, PrivateKey};
use std::{
    fs,
    io::{self, Read as _},
    path::Path,
    str,
};

/// Reads the input from the specified path, where `-` is standard in.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read standard in")?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
    }
}

/// Reads a PEM encoded private key from the specified path.
pub fn read_private_key(codec: &Codec, path: &Path) -> Result<PrivateKey> {
    let pem = read_input(path)?;
    codec
        .pem_to_private_key(str::from_utf8(&pem)?)
        .context("failed to decode EC private key")
}

/// Decodes a hexadecimal string, ignoring surrounding whitespace and an
/// optional `0x` prefix.
pub fn permissive_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}
