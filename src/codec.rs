//! PEM codec for secp256k1 private and public keys.

use crate::{
    arithmetic::{Arithmetic, Secp256k1},
    envelope::{self, LineEnding, PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL},
    error::{Error, Result},
    key::{PrivateKey, PublicKey},
    record,
};

/// Encodes and decodes secp256k1 keys as PEM text.
#[derive(Clone, Debug)]
pub struct Codec<A = Secp256k1> {
    arithmetic: A,
    line_ending: LineEnding,
}

impl Codec {
    /// Creates a new codec using `k256` for curve arithmetic.
    pub fn new() -> Self {
        Self::with_arithmetic(Secp256k1)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Codec<A>
where
    A: Arithmetic,
{
    /// Creates a new codec with the specified curve arithmetic.
    pub fn with_arithmetic(arithmetic: A) -> Self {
        Self {
            arithmetic,
            line_ending: LineEnding::LF,
        }
    }

    /// Sets the line ending used for encoded PEM text.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Returns the codec's curve arithmetic.
    pub fn arithmetic(&self) -> &A {
        &self.arithmetic
    }

    /// Encodes a private key as an `EC PRIVATE KEY` PEM.
    pub fn private_key_to_pem<'a>(
        &self,
        key: impl Into<Option<&'a PrivateKey>>,
    ) -> Result<String> {
        let key = key.into().ok_or(Error::NilInput)?;
        let der = record::encode_private_key(&self.arithmetic, key)?;
        envelope::wrap(PRIVATE_KEY_LABEL, &der, self.line_ending)
    }

    /// Decodes a private key from PEM text containing an `EC PRIVATE KEY`
    /// envelope.
    pub fn pem_to_private_key(&self, pem: &str) -> Result<PrivateKey> {
        let der = envelope::unwrap(pem)?.into_body(PRIVATE_KEY_LABEL)?;
        let key = record::decode_private_key(&self.arithmetic, &der)?;
        tracing::debug!("decoded EC private key");
        Ok(key)
    }

    /// Encodes a public key as an `EC PUBLIC KEY` PEM.
    pub fn public_key_to_pem<'a>(
        &self,
        key: impl Into<Option<&'a PublicKey>>,
    ) -> Result<String> {
        let key = key.into().ok_or(Error::NilInput)?;
        let der = record::encode_public_key(&self.arithmetic, key)?;
        envelope::wrap(PUBLIC_KEY_LABEL, &der, self.line_ending)
    }

    /// Decodes a public key from PEM text containing an `EC PUBLIC KEY`
    /// envelope.
    pub fn pem_to_public_key(&self, pem: &str) -> Result<PublicKey> {
        let der = envelope::unwrap(pem)?.into_body(PUBLIC_KEY_LABEL)?;
        let key = record::decode_public_key(&self.arithmetic, &der)?;
        tracing::debug!(?key, "decoded EC public key");
        Ok(key)
    }
}
