//! Module implementing the `new` subcommand for generating a new PEM encoded
//! key pair.

use anyhow::Result;
use clap::Parser;
use s256pem::Codec;
use std::{fs, path::PathBuf};

#[derive(Debug, Parser)]
pub struct Options {
    /// Write the public key PEM to a file instead of standard out.
    #[clap(long)]
    public_key_out: Option<PathBuf>,
}

pub fn run(options: Options, codec: &Codec) -> Result<()> {
    let pair = codec.generate_pair()?;
    print!("{}", pair.private_key);
    match options.public_key_out {
        Some(path) => fs::write(path, pair.public_key)?,
        None => print!("{}", pair.public_key),
    }
    Ok(())
}
