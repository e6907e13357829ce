//! Bearer credential loading from the process environment

use std::fmt;

use crate::error::{DropletError, Result};

/// Environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "DO_TOKEN";

/// An opaque bearer token for the provider API.
///
/// Held for the process lifetime and never mutated. The `Debug`
/// representation redacts the token value so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token value, for building the `Authorization` header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Read a bearer credential from the named environment variable.
///
/// # Errors
///
/// Returns a configuration error if `var_name` is empty, or if the
/// variable is unset or holds an empty value.
pub fn load_credential(var_name: &str) -> Result<Credential> {
    if var_name.is_empty() {
        return Err(DropletError::Config(
            "no environment variable name given".to_string(),
        ));
    }

    match std::env::var(var_name) {
        Ok(value) if !value.is_empty() => Ok(Credential::new(value)),
        _ => Err(DropletError::Config(format!(
            "environment variable {} is not set or empty",
            var_name
        ))),
    }
}
