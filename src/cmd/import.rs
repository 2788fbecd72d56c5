//! Module implementing the `import` subcommand for encoding a raw secret as a
//! private key PEM.

use crate::cmd;
use anyhow::{Context as _, Result};
use clap::Parser;
use s256pem::{Codec, PrivateKey};

#[derive(Debug, Parser)]
pub struct Options {
    /// The 32 byte private key secret specified as a hexadecimal string.
    #[clap(name = "SECRET", env = "PRIVATE_KEY", value_parser = permissive_hex_secret)]
    secret: [u8; 32],
}

pub fn run(options: Options, codec: &Codec) -> Result<()> {
    let key = PrivateKey::from_secret(options.secret)?;
    print!("{}", codec.private_key_to_pem(&key)?);
    Ok(())
}

fn permissive_hex_secret(s: &str) -> Result<[u8; 32]> {
    cmd::permissive_hex(s)?[..]
        .try_into()
        .context("private key secret must be exactly 32 bytes long")
}
