//! Service token read from the process environment.
//!
//! The only ambient environment read in the workspace lives here, at the
//! CLI edge; guards take the token as a parameter so they stay pure.

use secrecy::SecretString;

/// Environment variable carrying the service-authentication token.
pub const TOKEN_ENV_VAR: &str = "CACHET_TOKEN";

/// Read the service token from [`TOKEN_ENV_VAR`], treating an empty
/// value the same as an unset one.
pub fn from_env() -> Option<SecretString> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|token| !token.is_empty())
        .map(SecretString::new)
}
