//! Module implementing the `export` subcommand for displaying a private key's
//! raw secret.

use crate::cmd;
use anyhow::Result;
use clap::Parser;
use s256pem::Codec;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Options {
    /// Path to the private key PEM. Use `-` for standard in.
    #[clap(name = "PRIVATE_KEY", default_value = "-")]
    private_key: PathBuf,
}

pub fn run(options: Options, codec: &Codec) -> Result<()> {
    let key = cmd::read_private_key(codec, &options.private_key)?;
    println!("0x{}", hex::encode(key.secret()));
    Ok(())
}
