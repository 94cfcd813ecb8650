//! Wire-format utilities for encrypted secrets.
//!
//! Decodes the base64 transport encoding of symmetric-encryption
//! envelopes, canonicalizes logical secret paths, validates the closed
//! enumerations shared with the service API, and fingerprints ordered
//! string lists. Everything here is pure and safe to call from any
//! thread; the decryption primitive itself lives downstream.

pub mod envelope;
pub mod fingerprint;
pub mod path;
pub mod validate;

pub use {
    envelope::{DecodedPayload, EnvelopeError, Field},
    fingerprint::hash_of,
    path::{ROOT_PATH, normalize, split_segments},
    validate::{is_valid_environment, is_valid_secret_type},
};
