pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::ClientConfig;
pub use crate::core::client::RdwClient;
pub use crate::domain::model::{
    Dataset, Vehicle, VehicleInterior, VehicleOdometerJudgement, VehicleType,
};
pub use crate::domain::plate::normalize_license_plate;
pub use crate::domain::ports::VehicleLookup;
pub use crate::utils::error::{ErrorKind, RdwError, Result};
