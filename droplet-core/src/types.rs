//! Core types and data structures for droplet listings

use serde::{Deserialize, Serialize};

/// Interface type of a network attachment reachable from the internet.
pub const NETWORK_TYPE_PUBLIC: &str = "public";

/// Interface type of a network attachment internal to the provider network.
pub const NETWORK_TYPE_PRIVATE: &str = "private";

/// A virtual machine instance as reported by the provider.
///
/// Droplets are immutable snapshots fetched once per invocation; nothing in
/// this crate mutates them after deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Droplet {
    /// Provider-assigned numeric identifier
    pub id: u64,
    /// Human-readable droplet name
    pub name: String,
    /// Creation timestamp, passed through verbatim
    pub created_at: String,
    /// Lifecycle status reported by the provider (e.g. "active")
    #[serde(default)]
    pub status: String,
    /// Attached network interfaces
    #[serde(default)]
    pub networks: Networks,
}

impl Droplet {
    /// Addresses of all public IPv4 interfaces, in source order.
    pub fn public_v4_addresses(&self) -> impl Iterator<Item = &str> {
        self.networks
            .v4
            .iter()
            .filter(|iface| iface.is_public())
            .map(|iface| iface.address.as_str())
    }
}

/// Network interfaces attached to a droplet, grouped by IP version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Networks {
    /// IPv4 interfaces, in the order the provider reports them
    #[serde(default)]
    pub v4: Vec<NetworkInterface>,
}

/// A single network attachment.
///
/// The interface type is kept as a plain string so values other than
/// "public"/"private" pass through verbatim rather than failing the whole
/// listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkInterface {
    /// Interface type: "public" or "private"
    #[serde(rename = "type")]
    pub kind: String,
    /// IP address of this interface
    #[serde(rename = "ip_address")]
    pub address: String,
}

impl NetworkInterface {
    /// Whether this interface is reachable from the internet.
    pub fn is_public(&self) -> bool {
        self.kind == NETWORK_TYPE_PUBLIC
    }
}
