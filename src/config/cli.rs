use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "sim-info")]
#[command(about = "Query the platform telephony service for SIM card identity")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, default_value = "10", help = "Query timeout in seconds")]
    pub timeout: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("timeout", self.timeout, 1, 300)
    }
}
