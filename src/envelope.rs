//! PEM envelopes for DER encoded keys.

use crate::error::{Error, Result};
pub use pem_rfc7468::LineEnding;

/// PEM label for secp256k1 private keys.
pub const PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";

/// PEM label for secp256k1 public keys.
pub const PUBLIC_KEY_LABEL: &str = "EC PUBLIC KEY";

const BEGIN_BOUNDARY: &str = "-----BEGIN ";
const END_BOUNDARY: &str = "-----END ";
const BOUNDARY_DELIMITER: &str = "-----";

/// A decoded PEM envelope.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Envelope {
    pub label: String,
    pub body: Vec<u8>,
}

impl Envelope {
    /// Returns the envelope body if it has the expected label.
    pub fn into_body(self, expected: &'static str) -> Result<Vec<u8>> {
        if self.label != expected {
            return Err(Error::UnexpectedLabel {
                expected,
                found: self.label,
            });
        }
        Ok(self.body)
    }
}

/// Wraps a DER body in a PEM envelope with the specified label.
pub fn wrap(label: &str, body: &[u8], line_ending: LineEnding) -> Result<String> {
    pem_rfc7468::encode_string(label, line_ending, body).map_err(|err| {
        tracing::error!(?err, label, "failed to encode PEM");
        Error::Envelope(err)
    })
}

/// Extracts the first PEM envelope from some text.
///
/// Text before the pre-encapsulation boundary and after the
/// post-encapsulation boundary is ignored.
pub fn unwrap(text: &str) -> Result<Envelope> {
    let pem = locate(text).ok_or(Error::EnvelopeNotFound)?;
    let (label, body) = pem_rfc7468::decode_vec(pem.as_bytes()).map_err(|err| {
        tracing::debug!(?err, "failed to decode PEM");
        Error::EnvelopeNotFound
    })?;

    Ok(Envelope {
        label: label.to_owned(),
        body,
    })
}

fn locate(text: &str) -> Option<&str> {
    let start = text.find(BEGIN_BOUNDARY)?;
    let end = {
        let post = start + text[start..].find(END_BOUNDARY)? + END_BOUNDARY.len();
        post + text[post..].find(BOUNDARY_DELIMITER)? + BOUNDARY_DELIMITER.len()
    };
    Some(&text[start..end])
}
