//! Report execution handlers
//!
//! Each handler is a pure read over the already-fetched droplet
//! collection; the only I/O is writing the report to standard output.

use anyhow::Result;
use droplet_core::Droplet;

use super::commands::OutputFormat;

/// Handle the basic-info report
pub fn handle_basic_report(droplets: &[Droplet], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(droplets)?);
        }
        OutputFormat::Table => {
            println!("{}", crate::format::format_droplet_table(droplets));
        }
        OutputFormat::Plain => {
            print!("{}", crate::format::format_basic_info(droplets));
        }
    }

    Ok(())
}

/// Handle the network-info report
pub fn handle_network_report(droplets: &[Droplet], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let networks: Vec<_> = droplets
                .iter()
                .map(|droplet| {
                    serde_json::json!({
                        "name": droplet.name,
                        "id": droplet.id,
                        "networks": droplet.networks,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&networks)?);
        }
        OutputFormat::Table => {
            println!("{}", crate::format::format_network_table(droplets));
        }
        OutputFormat::Plain => {
            print!("{}", crate::format::format_network_info(droplets));
        }
    }

    Ok(())
}

/// Handle the public-IP report for a single named droplet
pub fn handle_public_ip_report(
    name: &str,
    droplets: &[Droplet],
    format: &OutputFormat,
) -> Result<()> {
    let Some(droplet) = droplets.iter().find(|d| d.name == name) else {
        // Stdout stays silent and the exit code unchanged; the stderr
        // diagnostic distinguishes "not found" from "no public interface".
        eprintln!("dropletctl: no droplet named '{}'", name);
        return Ok(());
    };

    match format {
        OutputFormat::Json => {
            let addresses: Vec<&str> = droplet.public_v4_addresses().collect();
            let report = serde_json::json!({
                "name": droplet.name,
                "public_addresses": addresses,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("{}", crate::format::format_public_ip_table(droplet));
        }
        OutputFormat::Plain => {
            let addresses = crate::format::format_public_ip(name, droplets).unwrap_or_default();
            print!("{}", addresses);
        }
    }

    Ok(())
}

/// Generate shell completion script on stdout
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = super::commands::Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
