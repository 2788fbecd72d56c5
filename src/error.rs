//! Module containing the error type for encoding and decoding keys.

use der::asn1::ObjectIdentifier;
use std::io;
use thiserror::Error;

/// An error encoding, decoding or generating secp256k1 keys.
#[derive(Debug, Error)]
pub enum Error {
    /// No key was provided where one was required.
    #[error("input key is nil")]
    NilInput,

    /// The text does not contain a well-formed PEM envelope.
    #[error("PEM envelope not found")]
    EnvelopeNotFound,

    /// The PEM envelope is labeled for a different kind of key.
    #[error("unexpected PEM label '{found}', expected '{expected}'")]
    UnexpectedLabel {
        expected: &'static str,
        found: String,
    },

    /// The envelope payload is not the expected DER structure.
    #[error("malformed key structure")]
    StructureMalformed(#[source] der::Error),

    /// The DER encoder rejected a record.
    #[error("error encoding key structure")]
    Encoding(#[source] der::Error),

    /// The PEM encoder rejected a label or body.
    #[error("error encoding PEM envelope")]
    Envelope(#[source] pem_rfc7468::Error),

    /// The EC private key record has a version other than 1.
    #[error("unknown EC private key version {0}")]
    InvalidVersion(i64),

    /// The private scalar is wider than the curve order, even after stripping
    /// leading zero bytes.
    #[error("invalid private key length {0}")]
    MalformedLength(usize),

    /// The private scalar is zero or not less than the curve order.
    #[error("invalid elliptic curve private key value")]
    ScalarOutOfRange,

    /// The record names a curve other than secp256k1.
    #[error("unsupported elliptic curve {0}")]
    UnsupportedCurve(ObjectIdentifier),

    /// The bytes do not encode a point on the curve.
    #[error("invalid elliptic curve point")]
    InvalidPoint,

    /// The public key embedded in a private key record does not belong to the
    /// private scalar.
    #[error("embedded public key does not match private key")]
    PublicKeyMismatch,

    /// Reading entropy for a new private key failed.
    #[error("creating new secp256k1 private key")]
    GenerationFailed(#[source] io::Error),
}

/// Result type with [`Error`] as the error variant.
pub type Result<T, E = Error> = std::result::Result<T, E>;
