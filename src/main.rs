mod cmd;

use crate::cmd::*;
use clap::{Parser, Subcommand};
use s256pem::{envelope::LineEnding, Codec};
use std::{io, process};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(name = "s256pem", about = "PEM encoding for secp256k1 keys")]
struct Args {
    /// Use CRLF line endings for PEM output.
    #[clap(long, global = true, env = "S256PEM_CRLF")]
    crlf: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a new PEM encoded key pair.
    New(new::Options),
    /// Derive the public key PEM for a private key PEM.
    PublicKey(public_key::Options),
    /// Export the raw secret of a private key PEM.
    Export(export::Options),
    /// Import a raw secret as a private key PEM.
    Import(import::Options),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let codec = Codec::new().with_line_ending(if args.crlf {
        LineEnding::CRLF
    } else {
        LineEnding::LF
    });

    if let Err(err) = match args.command {
        Command::New(options) => new::run(options, &codec),
        Command::PublicKey(options) => public_key::run(options, &codec),
        Command::Export(options) => export::run(options, &codec),
        Command::Import(options) => import::run(options, &codec),
    } {
        if cfg!(debug_assertions) {
            eprintln!("ERROR: {:?}", err);
        } else {
            eprintln!("ERROR: {}", err);
        }
        process::exit(-1);
    }
}
