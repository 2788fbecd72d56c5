//! Fixed-width encoding of curve scalars and the affine point type.

use crate::error::{Error, Result};
use ethnum::U256;

/// The order of the secp256k1 base point.
pub const ORDER: U256 = U256::from_words(
    0xfffffffffffffffffffffffffffffffe,
    0xbaaedce6af48a03bbfd25e8cd0364141,
);

/// The byte width of a private scalar for the secp256k1 curve order.
pub const SCALAR_WIDTH: usize = 32;

/// An affine curve point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Point {
    pub x: U256,
    pub y: U256,
}

/// Returns the number of bytes needed to represent every value less than
/// `order`.
pub fn byte_width(order: U256) -> usize {
    let bits = 256 - order.leading_zeros() as usize;
    (bits + 7) / 8
}

/// Encodes a scalar as a big-endian integer left-padded with zeros to exactly
/// `width` bytes.
pub fn encode_scalar(d: U256, width: usize) -> Vec<u8> {
    debug_assert!(width <= 32);
    debug_assert!(d.leading_zeros() as usize >= (32 - width) * 8);
    d.to_be_bytes()[32 - width..].to_vec()
}

/// Decodes a big-endian private scalar for a curve with the specified order.
///
/// Encoders are allowed to add leading zero bytes beyond the fixed width of
/// the curve, so those are stripped before the width is checked. The decoded
/// scalar must be a valid non-zero value less than the order.
pub fn decode_scalar(bytes: &[u8], order: U256) -> Result<U256> {
    let width = byte_width(order);

    let mut scalar = bytes;
    while scalar.len() > width {
        match scalar.split_first() {
            Some((0, rest)) => scalar = rest,
            _ => return Err(Error::MalformedLength(bytes.len())),
        }
    }

    let mut buf = [0_u8; 32];
    buf[32 - scalar.len()..].copy_from_slice(scalar);
    let d = U256::from_be_bytes(buf);

    if d == U256::ZERO || d >= order {
        return Err(Error::ScalarOutOfRange);
    }
    Ok(d)
}
