//! CLI flag definitions and report selection

use clap::Parser;

/// Droplet listing CLI
#[derive(Parser, Debug)]
#[command(name = "dropletctl")]
#[command(version, about = "List droplets in a DigitalOcean account", long_about = None)]
pub struct Cli {
    /// Print basic info for every droplet
    #[arg(long)]
    pub list_droplets: bool,

    /// Print network interfaces for every droplet
    #[arg(long)]
    pub list_droplets_network: bool,

    /// Print public IP address(es) for the named droplet
    #[arg(long, value_name = "NAME")]
    pub public_droplet_ip: Option<String>,

    /// API base URL (overrides config file)
    #[arg(short, long)]
    pub api_url: Option<String>,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging (overrides config file)
    #[arg(short, long)]
    pub verbose: Option<bool>,

    /// Don't load config file
    #[arg(long)]
    pub no_config: bool,

    /// Generate shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Report selected by the listing flags, evaluated in priority order;
    /// the first flag that is set wins. `None` means no report was
    /// requested and the caller should print usage.
    pub fn report_mode(&self) -> Option<ReportMode> {
        if self.list_droplets {
            Some(ReportMode::Basic)
        } else if self.list_droplets_network {
            Some(ReportMode::Network)
        } else if let Some(name) = &self.public_droplet_ip {
            Some(ReportMode::PublicIp(name.clone()))
        } else {
            None
        }
    }
}

/// The report to run over the fetched droplet collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportMode {
    /// One line of basic info per droplet
    Basic,
    /// Network interfaces per droplet
    Network,
    /// Public address(es) of a single named droplet
    PublicIp(String),
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Classic line-oriented output
    Plain,
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl From<&OutputFormat> for crate::format::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => crate::format::OutputFormat::Plain,
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
