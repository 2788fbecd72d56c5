//! Module implementing secp256k1 private keys.

mod public;

pub use self::public::PublicKey;
use crate::{
    arithmetic::Arithmetic,
    error::{Error, Result},
    scalar::ORDER,
};
use ethnum::U256;
use std::fmt::{self, Debug, Formatter};

/// A secp256k1 private key.
#[derive(Clone, Eq, PartialEq)]
pub struct PrivateKey(U256);

impl PrivateKey {
    /// Creates a private key from a scalar, verifying that it is in the range
    /// `[1, N-1]`.
    pub fn new(scalar: U256) -> Result<Self> {
        if scalar == U256::ZERO || scalar >= ORDER {
            return Err(Error::ScalarOutOfRange);
        }
        Ok(Self(scalar))
    }

    /// Creates a private key from a big-endian secret.
    pub fn from_secret(secret: [u8; 32]) -> Result<Self> {
        Self::new(U256::from_be_bytes(secret))
    }

    /// Generates a new random private key.
    pub fn random(arithmetic: &impl Arithmetic) -> Result<Self> {
        Self::new(arithmetic.generate_scalar()?)
    }

    /// Returns the private scalar.
    pub fn scalar(&self) -> U256 {
        self.0
    }

    /// Returns the 32-byte big-endian secret.
    pub fn secret(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Returns the public key for the private key.
    pub fn public_key(&self, arithmetic: &impl Arithmetic) -> Result<PublicKey> {
        arithmetic
            .derive_public_point(self.0)
            .map(PublicKey::from_point_unchecked)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&format_args!("..")).finish()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0 = U256::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arithmetic::Secp256k1, fixtures};

    #[test]
    fn rejects_scalars_outside_of_curve_order() {
        assert!(PrivateKey::new(U256::ZERO).is_err());
        assert!(PrivateKey::new(ORDER).is_err());
        assert!(PrivateKey::new(ORDER - U256::ONE).is_ok());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let key = PrivateKey::from_secret(fixtures::PRIVATE_KEY).unwrap();
        assert_eq!(format!("{key:?}"), "PrivateKey(..)");
    }

    #[test]
    fn derives_public_key() {
        let key = PrivateKey::from_secret(fixtures::PRIVATE_KEY).unwrap();
        assert_eq!(
            key.public_key(&Secp256k1).unwrap().to_sec1_bytes(&Secp256k1),
            fixtures::PUBLIC_KEY,
        );
    }

    #[test]
    fn random_keys_differ() {
        let a = PrivateKey::random(&Secp256k1).unwrap();
        let b = PrivateKey::random(&Secp256k1).unwrap();
        assert_ne!(a, b);
    }
}
