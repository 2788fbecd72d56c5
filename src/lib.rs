//! PEM encoding for secp256k1 keys.
//!
//! This crate implements encoding secp256k1 private keys as SEC1
//! `EC PRIVATE KEY` PEM envelopes and public keys as `EC PUBLIC KEY` PEM
//! envelopes, byte-for-byte compatible with other tooling, as well as strict
//! decoding of untrusted PEM text back into validated keys.

pub mod arithmetic;
mod codec;
pub mod envelope;
mod error;
pub mod key;
mod pair;
mod rand;
pub mod record;
pub mod scalar;

pub use self::{
    arithmetic::{Arithmetic, Secp256k1},
    codec::Codec,
    error::{Error, Result},
    key::{PrivateKey, PublicKey},
    pair::{new_pem_pair, PemPair},
};

#[cfg(test)]
mod fixtures;
