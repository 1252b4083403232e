pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;

pub use core::{engine::BootEngine, launcher::ServerLauncher, sequence::StandardSequence};
pub use domain::model::{BootConfig, EnvSnapshot, LaunchPlan, RuntimeReport, DEFAULT_PORT};
pub use domain::ports::{BootSequence, BootSettings, Launcher};
pub use utils::error::{BootError, Result};
