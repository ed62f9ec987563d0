pub mod provider;

pub use crate::domain::model::{CellularProvider, SimCard};
pub use crate::domain::ports::TelephonyService;
pub use crate::utils::error::Result;
