pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::fixed::FixedTelephony;
pub use adapters::modem_manager::ModemManagerTelephony;
pub use core::provider::SimInformation;
pub use domain::model::{CellularProvider, SimCard};
pub use domain::ports::TelephonyService;
pub use utils::error::{Result, SimError};
