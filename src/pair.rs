//! Module implementing generation of new PEM encoded key pairs.

use crate::{arithmetic::Arithmetic, codec::Codec, error::Result, key::PrivateKey};

/// A PEM encoded key pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PemPair {
    /// The `EC PRIVATE KEY` PEM.
    pub private_key: String,
    /// The `EC PUBLIC KEY` PEM.
    pub public_key: String,
}

impl<A> Codec<A>
where
    A: Arithmetic,
{
    /// Generates a new random key pair and encodes both keys as PEM.
    pub fn generate_pair(&self) -> Result<PemPair> {
        let key = PrivateKey::random(self.arithmetic())?;
        let public_key = key.public_key(self.arithmetic())?;
        tracing::debug!(?public_key, "generated new secp256k1 key pair");

        Ok(PemPair {
            private_key: self.private_key_to_pem(&key)?,
            public_key: self.public_key_to_pem(&public_key)?,
        })
    }
}

/// Generates a new random secp256k1 key pair encoded as PEM.
pub fn new_pem_pair() -> Result<PemPair> {
    Codec::new().generate_pair()
}
