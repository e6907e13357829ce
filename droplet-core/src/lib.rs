//! Droplet Core Library
//!
//! Shared types, API models, and credential handling for the dropletctl
//! project. This crate is used by the CLI binary and by its test utilities.

pub mod api;
pub mod credential;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use api::{ApiErrorBody, DropletListResponse, Links, Meta, Pages};
pub use credential::{load_credential, Credential, TOKEN_ENV_VAR};
pub use error::*;
pub use types::*;
