//! Output formatting for droplet reports
//!
//! Plain formatters reproduce the classic line-oriented report output;
//! table and JSON variants are selected through the output format option.

use colored::*;
use droplet_core::Droplet;
use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
}

/// One line of basic info per droplet: `<name> (<id>) Created: <created>.`
///
/// Input order is preserved. An empty collection yields a notice instead
/// of silence.
pub fn format_basic_info(droplets: &[Droplet]) -> String {
    if droplets.is_empty() {
        return "No droplets\n".to_string();
    }

    let mut output = String::new();
    for droplet in droplets {
        output.push_str(&format!(
            "{} ({}) Created: {}.\n",
            droplet.name, droplet.id, droplet.created_at
        ));
    }
    output
}

/// A header line per droplet followed by one tab-indented line per
/// network interface, in the order the provider reported them.
pub fn format_network_info(droplets: &[Droplet]) -> String {
    if droplets.is_empty() {
        return "No droplets\n".to_string();
    }

    let mut output = String::new();
    for droplet in droplets {
        output.push_str(&format!("{} ({}):\n", droplet.name, droplet.id));
        for iface in &droplet.networks.v4 {
            output.push_str(&format!("\t{}: {}\n", iface.kind, iface.address));
        }
    }
    output
}

/// Public IPv4 addresses of the first droplet whose name matches exactly,
/// concatenated with no separator.
///
/// Returns `None` when no droplet has that name; a matching droplet with
/// no public interface yields `Some("")`. The two cases are distinct so
/// callers can emit a diagnostic for the former.
pub fn format_public_ip(name: &str, droplets: &[Droplet]) -> Option<String> {
    let droplet = droplets.iter().find(|d| d.name == name)?;
    Some(droplet.public_v4_addresses().collect())
}

/// Render the basic report as a rounded table.
pub fn format_droplet_table(droplets: &[Droplet]) -> String {
    #[derive(Tabled)]
    struct DropletRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "ID")]
        id: u64,
        #[tabled(rename = "Status")]
        status: String,
        #[tabled(rename = "Created")]
        created: String,
    }

    let rows: Vec<DropletRow> = droplets
        .iter()
        .map(|droplet| DropletRow {
            name: droplet.name.clone().cyan().to_string(),
            id: droplet.id,
            status: if droplet.status == "active" {
                droplet.status.clone().green().to_string()
            } else {
                droplet.status.clone().yellow().to_string()
            },
            created: droplet.created_at.clone(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!("{}\n{}", "Droplets:".bold(), table)
}

/// Render the network report as a rounded table, one row per interface.
pub fn format_network_table(droplets: &[Droplet]) -> String {
    #[derive(Tabled)]
    struct InterfaceRow {
        #[tabled(rename = "Droplet")]
        droplet: String,
        #[tabled(rename = "Type")]
        kind: String,
        #[tabled(rename = "Address")]
        address: String,
    }

    let mut rows = Vec::new();
    for droplet in droplets {
        for iface in &droplet.networks.v4 {
            rows.push(InterfaceRow {
                droplet: format!("{} ({})", droplet.name, droplet.id),
                kind: if iface.is_public() {
                    iface.kind.clone().green().to_string()
                } else {
                    iface.kind.clone().dimmed().to_string()
                },
                address: iface.address.clone(),
            });
        }
    }

    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!("{}\n{}", "Droplet networks:".bold(), table)
}

/// Render the public addresses of one droplet as a rounded table.
pub fn format_public_ip_table(droplet: &Droplet) -> String {
    #[derive(Tabled)]
    struct AddressRow {
        #[tabled(rename = "Public address")]
        address: String,
    }

    let rows: Vec<AddressRow> = droplet
        .public_v4_addresses()
        .map(|address| AddressRow {
            address: address.to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!(
        "{}\n{}",
        format!("{} ({}):", droplet.name, droplet.id).bold(),
        table
    )
}
