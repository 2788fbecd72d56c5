//! Module defining the curve arithmetic used by the key codecs.
//!
//! The codecs never do point math themselves. Instead, they go through the
//! [`Arithmetic`] trait so that the `k256` backed [`Secp256k1`] implementation
//! can be substituted, for example to simulate entropy failures in tests.

use crate::{
    error::{Error, Result},
    rand,
    scalar::Point,
};
use ethnum::U256;
use k256::{elliptic_curve::sec1::ToEncodedPoint as _, EncodedPoint, FieldBytes};

/// Elliptic curve operations needed for encoding and decoding keys.
pub trait Arithmetic {
    /// Generates a new random private scalar in `[1, N-1]`.
    fn generate_scalar(&self) -> Result<U256>;

    /// Computes the public point `d*G` for a private scalar.
    fn derive_public_point(&self, scalar: U256) -> Result<Point>;

    /// Parses a SEC1 encoded point, verifying that it lies on the curve.
    fn point_from_bytes(&self, bytes: &[u8]) -> Result<Point>;

    /// Returns the SEC1 uncompressed encoding of a point.
    fn encode_point(&self, point: &Point) -> Vec<u8>;
}

/// The secp256k1 curve arithmetic implemented by the `k256` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1;

impl Arithmetic for Secp256k1 {
    fn generate_scalar(&self) -> Result<U256> {
        rand::scalar().map_err(|err| {
            tracing::error!(?err, "failed to read entropy");
            Error::GenerationFailed(err)
        })
    }

    fn derive_public_point(&self, scalar: U256) -> Result<Point> {
        let secret = k256::SecretKey::from_bytes(&FieldBytes::from(scalar.to_be_bytes()))
            .map_err(|_| Error::ScalarOutOfRange)?;
        point(&secret.public_key().to_encoded_point(false))
    }

    fn point_from_bytes(&self, bytes: &[u8]) -> Result<Point> {
        let public = k256::PublicKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPoint)?;
        point(&public.to_encoded_point(false))
    }

    fn encode_point(&self, point: &Point) -> Vec<u8> {
        EncodedPoint::from_affine_coordinates(
            &FieldBytes::from(point.x.to_be_bytes()),
            &FieldBytes::from(point.y.to_be_bytes()),
            false,
        )
        .as_bytes()
        .to_vec()
    }
}

fn point(encoded: &EncodedPoint) -> Result<Point> {
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Ok(Point {
            x: U256::from_be_bytes((*x).into()),
            y: U256::from_be_bytes((*y).into()),
        }),
        _ => Err(Error::InvalidPoint),
    }
}
