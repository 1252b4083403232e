#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::ports::BootSettings;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_app_target, validate_non_empty_string, validate_path, Validate,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "forge-boot"))]
#[cfg_attr(
    feature = "cli",
    command(about = "One-shot bootstrap supervisor for the forge_kernel service")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "forge_kernel.py"))]
    pub entrypoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "forge_kernel:app"))]
    pub app: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "0.0.0.0"))]
    pub host: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "uvicorn"))]
    pub server: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl BootSettings for CliConfig {
    fn entrypoint(&self) -> &str {
        &self.entrypoint
    }

    fn app_target(&self) -> &str {
        &self.app
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn server(&self) -> &str {
        &self.server
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("entrypoint", &self.entrypoint)?;
        validate_app_target("app", &self.app)?;
        validate_non_empty_string("host", &self.host)?;
        validate_non_empty_string("server", &self.server)?;
        Ok(())
    }
}
