use crate::config::ClientConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rdw-vehicle")]
#[command(about = "Look up a Dutch vehicle registration in the RDW open data")]
pub struct CliConfig {
    /// License plate, hyphens and spaces are ignored (e.g. 11-ZKZ-3)
    pub license_plate: Option<String>,

    #[arg(long, help = "TOML file with client settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, help = "Print the vehicle as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Config file (if any) first, then command line overrides on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(timeout) = self.timeout {
            config.request_timeout = timeout;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(plate) = &self.license_plate {
            config.license_plate = Some(plate.clone());
        }

        Ok(config)
    }
}
