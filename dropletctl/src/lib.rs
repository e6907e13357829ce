//! dropletctl CLI Library
//!
//! This library provides the core functionality for the dropletctl tool.
//!
//! # Public API
//!
//! The primary public API is the [`client::DropletClient`] which provides
//! programmatic access to the provider's droplet list endpoint.
//! Configuration types are also available via [`config::CliConfig`] and
//! [`config::ConfigBuilder`].
//!
//! ```no_run
//! use droplet_core::Credential;
//! use dropletctl::client::DropletClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let credential = Credential::new("dop_v1_example");
//! let client = DropletClient::new(&credential)?;
//!
//! let droplets = client.list_all_droplets().await?;
//! println!("{} droplets", droplets.len());
//! # Ok(())
//! # }
//! ```

// Internal CLI implementation - not part of public API
#[doc(hidden)]
pub mod cli;

/// HTTP client for the provider's droplet API.
pub mod client;

/// Configuration types for the CLI tool.
pub mod config;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

#[cfg(test)]
pub mod test_utils;
