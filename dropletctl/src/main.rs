//! dropletctl
//!
//! Command-line interface for listing the droplets in a DigitalOcean
//! account.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use droplet_core::{load_credential, DropletError, TOKEN_ENV_VAR};
use dropletctl::cli::{
    generate_completion, handle_basic_report, handle_network_report, handle_public_ip_report, Cli,
    OutputFormat, ReportMode,
};
use dropletctl::client::DropletClient;
use dropletctl::config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        generate_completion(shell);
        return Ok(());
    }

    // Select the report before any credential or network work; a bare
    // invocation prints usage and does nothing else.
    let Some(mode) = cli.report_mode() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Build configuration using priority chain: defaults → file → env → CLI args
    let mut builder = CliConfig::builder();

    // Load config file (unless --no-config is specified)
    builder = builder.with_config_file(!cli.no_config)?;

    // Apply environment variable overrides
    builder = builder.with_env_overrides();

    // Apply CLI argument overrides (highest priority)
    if let Some(ref url) = cli.api_url {
        builder = builder.with_api_url(url)?;
    }
    if let Some(ref format) = cli.format {
        let format_str = match format {
            OutputFormat::Plain => "plain",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        };
        builder = builder.with_output_format(format_str)?;
    }
    if let Some(verbose) = cli.verbose {
        builder = builder.with_verbose(verbose);
    }

    // Build final configuration with validation
    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let output_format = match config.output_format.as_str() {
        "json" => OutputFormat::Json,
        "table" => OutputFormat::Table,
        _ => OutputFormat::Plain,
    };
    let verbose = config.verbose;

    if verbose {
        eprintln!("Verbose mode enabled");
        eprintln!("API URL: {}", config.api_url);
        eprintln!("Output format: {:?}", output_format);
    }

    let credential = match load_credential(TOKEN_ENV_VAR) {
        Ok(credential) => credential,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Set the {} environment variable to a valid API token.",
                TOKEN_ENV_VAR
            );
            std::process::exit(1);
        }
    };

    let client = match DropletClient::with_config(&config.api_url, &credential, config.timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if verbose {
        eprintln!("Fetching droplet listing from {}...", config.api_url);
    }

    let droplets = match client.list_all_droplets().await {
        Ok(droplets) => droplets,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // An account with zero droplets is fatal, distinct from a failed fetch.
    if droplets.is_empty() {
        eprintln!("Error: {}", DropletError::EmptyResult);
        std::process::exit(1);
    }

    if verbose {
        eprintln!("Fetched {} droplets", droplets.len());
    }

    let result = match mode {
        ReportMode::Basic => handle_basic_report(&droplets, &output_format),
        ReportMode::Network => handle_network_report(&droplets, &output_format),
        ReportMode::PublicIp(ref name) => {
            handle_public_ip_report(name, &droplets, &output_format)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
