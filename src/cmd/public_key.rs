//! Module implementing the `public-key` subcommand for displaying the public
//! key PEM for a private key.

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
    let public_key = key.public_key(codec.arithmetic())?;
    print!("{}", codec.public_key_to_pem(&public_key)?);
    Ok(())
}
