//! Base64 decoding of symmetric-encryption envelopes.
//!
//! A secret arrives from the service as four independently base64-encoded
//! byte strings: the wrapped key, the ciphertext, the initialization
//! vector, and the authentication tag. This module strips the transport
//! encoding and nothing more; length checks and the AEAD operation belong
//! to the decryption layer.

use {
    base64::Engine,
    zeroize::{Zeroize, ZeroizeOnDrop},
};

/// The envelope field that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Cipher,
    Key,
    Iv,
    Tag,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cipher => "cipher text",
            Self::Key => "key",
            Self::Iv => "IV",
            Self::Tag => "tag",
        })
    }
}

/// Errors produced while stripping the envelope encoding.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// One of the four fields was not valid standard base64.
    #[error("unable to decode {field}: {source}")]
    BadField {
        field: Field,
        #[source]
        source: base64::DecodeError,
    },
}

impl EnvelopeError {
    /// The envelope field the error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::BadField { field, .. } => *field,
        }
    }
}

/// A symmetric-encryption envelope after encoding removal.
///
/// Holds raw bytes only; no semantic interpretation is imposed. The
/// buffers are wiped when the value is dropped since `key` is live key
/// material.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct DecodedPayload {
    pub key: Vec<u8>,
    pub cipher: Vec<u8>,
    pub iv: Vec<u8>,
    pub tag: Vec<u8>,
}

/// Decode the four base64 fields of an encrypted-secret payload.
///
/// All-or-nothing: if any field is malformed no payload is produced.
/// Fields are decoded cipher first, then key, IV, and tag, so when
/// several are malformed the error names the earliest one in that order.
pub fn decode(
    key: &str,
    cipher: &str,
    iv: &str,
    tag: &str,
) -> Result<DecodedPayload, EnvelopeError> {
    let cipher = decode_field(Field::Cipher, cipher)?;
    let key = decode_field(Field::Key, key)?;
    let iv = decode_field(Field::Iv, iv)?;
    let tag = decode_field(Field::Tag, tag)?;

    Ok(DecodedPayload {
        key,
        cipher,
        iv,
        tag,
    })
}

fn decode_field(field: Field, value: &str) -> Result<Vec<u8>, EnvelopeError> {
    base64::engine::general_purpose::STANDARD
        .decode(value)
        .map_err(|source| EnvelopeError::BadField { field, source })
}
