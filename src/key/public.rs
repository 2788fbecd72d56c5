//! Module implementing public key operations.

use crate::{arithmetic::Arithmetic, error::Result, scalar::Point};

/// A secp256k1 public key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Parses a public key from its SEC1 encoding.
    pub fn from_sec1_bytes(arithmetic: &impl Arithmetic, bytes: &[u8]) -> Result<Self> {
        arithmetic.point_from_bytes(bytes).map(Self)
    }

    /// Wraps a point that the caller already knows to be on the curve.
    pub(crate) fn from_point_unchecked(point: Point) -> Self {
        Self(point)
    }

    /// Returns the affine point of the public key.
    pub fn point(&self) -> &Point {
        &self.0
    }

    /// Returns uncompressed SEC1 encoded bytes for the public key.
    pub fn to_sec1_bytes(&self, arithmetic: &impl Arithmetic) -> Vec<u8> {
        arithmetic.encode_point(&self.0)
    }
}
