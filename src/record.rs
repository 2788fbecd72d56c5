//! DER records for secp256k1 private and public keys.
//!
//! Private keys use the SEC1 `ECPrivateKey` structure:
//!
//! ```text
//! ECPrivateKey ::= SEQUENCE {
//!   version        INTEGER { ecPrivkeyVer1(1) },
//!   privateKey     OCTET STRING,
//!   parameters [0] EXPLICIT OBJECT IDENTIFIER OPTIONAL,
//!   publicKey  [1] EXPLICIT BIT STRING OPTIONAL
//! }
//! ```
//!
//! Public keys use a `SubjectPublicKeyInfo` structure where both the algorithm
//! and its parameters are the secp256k1 curve identifier.

use crate::{
    arithmetic::Arithmetic,
    error::{Error, Result},
    key::{PrivateKey, PublicKey},
    scalar::{self, ORDER},
};
use der::{
    asn1::{BitString, ObjectIdentifier, OctetString},
    Decode as _, Encode as _, Sequence,
};
use spki::{AlgorithmIdentifier, SubjectPublicKeyInfo};

/// The secp256k1 curve object identifier.
pub const CURVE_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

/// The only supported `ECPrivateKey` version.
pub const VERSION: i64 = 1;

/// The SEC1 `ECPrivateKey` record.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct EcPrivateKey {
    pub version: i64,
    pub private_key: OctetString,
    #[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
    pub named_curve: Option<ObjectIdentifier>,
    #[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
    pub public_key: Option<BitString>,
}

/// The public key record, with the curve identifier as algorithm parameters.
pub type PublicKeyInfo = SubjectPublicKeyInfo<ObjectIdentifier, BitString>;

/// Encodes a private key as a DER `ECPrivateKey` record, including the curve
/// identifier and the uncompressed public key.
pub fn encode_private_key(arithmetic: &impl Arithmetic, key: &PrivateKey) -> Result<Vec<u8>> {
    let width = scalar::byte_width(ORDER);
    let public_key = key.public_key(arithmetic)?;

    let record = EcPrivateKey {
        version: VERSION,
        private_key: OctetString::new(scalar::encode_scalar(key.scalar(), width))
            .map_err(Error::Encoding)?,
        named_curve: Some(CURVE_OID),
        public_key: Some(bit_string(&public_key.to_sec1_bytes(arithmetic))?),
    };

    record.to_der().map_err(Error::Encoding)
}

/// Decodes and validates a DER `ECPrivateKey` record.
///
/// The curve identifier and public key fields are optional. When present, they
/// must name secp256k1 and match the private scalar respectively.
pub fn decode_private_key(arithmetic: &impl Arithmetic, der: &[u8]) -> Result<PrivateKey> {
    let record = EcPrivateKey::from_der(der).map_err(|err| {
        tracing::debug!(?err, "failed to parse EC private key");
        Error::StructureMalformed(err)
    })?;
    if record.version != VERSION {
        return Err(Error::InvalidVersion(record.version));
    }

    let key = PrivateKey::new(scalar::decode_scalar(
        record.private_key.as_bytes(),
        ORDER,
    )?)?;

    if let Some(oid) = record.named_curve {
        if oid != CURVE_OID {
            return Err(Error::UnsupportedCurve(oid));
        }
    }
    if let Some(public_key) = &record.public_key {
        let bytes = public_key.as_bytes().ok_or(Error::InvalidPoint)?;
        let embedded = PublicKey::from_sec1_bytes(arithmetic, bytes)?;
        if embedded != key.public_key(arithmetic)? {
            return Err(Error::PublicKeyMismatch);
        }
    }

    Ok(key)
}

/// Encodes a public key as a DER public key record.
pub fn encode_public_key(arithmetic: &impl Arithmetic, key: &PublicKey) -> Result<Vec<u8>> {
    let record = PublicKeyInfo {
        algorithm: AlgorithmIdentifier {
            oid: CURVE_OID,
            parameters: Some(CURVE_OID),
        },
        subject_public_key: bit_string(&key.to_sec1_bytes(arithmetic))?,
    };

    record.to_der().map_err(Error::Encoding)
}

/// Decodes and validates a DER public key record.
pub fn decode_public_key(arithmetic: &impl Arithmetic, der: &[u8]) -> Result<PublicKey> {
    let record = PublicKeyInfo::from_der(der).map_err(|err| {
        tracing::debug!(?err, "failed to parse EC public key");
        Error::StructureMalformed(err)
    })?;

    let algorithm = record.algorithm;
    for oid in std::iter::once(algorithm.oid).chain(algorithm.parameters) {
        if oid != CURVE_OID {
            return Err(Error::UnsupportedCurve(oid));
        }
    }

    let bytes = record
        .subject_public_key
        .as_bytes()
        .ok_or(Error::InvalidPoint)?;
    PublicKey::from_sec1_bytes(arithmetic, bytes)
}

/// Wraps bytes in a bit string with no unused bits.
fn bit_string(bytes: &[u8]) -> Result<BitString> {
    BitString::from_bytes(bytes).map_err(Error::Encoding)
}
