pub mod engine;
pub mod launcher;
pub mod sequence;

pub use crate::domain::model::{BootConfig, EnvSnapshot, LaunchPlan};
pub use crate::domain::ports::{BootSequence, BootSettings, Launcher};
pub use crate::utils::error::Result;
