//! Closed enumerations shared with the service API.
//!
//! The service rejects anything outside these sets, so the client checks
//! them before making a call. Matching is exact: no case folding, no
//! trimming, no aliases.

/// Environment short codes the service recognizes.
const ENVIRONMENTS: &[&str] = &["prod", "dev", "test", "staging"];

/// Secret visibility scopes the service recognizes.
const SECRET_TYPES: &[&str] = &["personal", "shared"];

/// Whether `env` is one of the recognized environment codes.
pub fn is_valid_environment(env: &str) -> bool {
    ENVIRONMENTS.contains(&env)
}

/// Whether `secret_type` is one of the recognized visibility scopes.
pub fn is_valid_secret_type(secret_type: &str) -> bool {
    SECRET_TYPES.contains(&secret_type)
}
