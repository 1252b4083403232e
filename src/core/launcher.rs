use crate::core::{LaunchPlan, Launcher};
use crate::utils::error::{BootError, Result};
use std::process::Command;

/// Hands control to the ASGI server. On Unix the supervisor's process image
/// is replaced via `exec`, so `launch` only returns on failure. On other
/// targets the child is spawned and awaited, and its exit status is returned
/// unchanged for the caller to propagate.
#[derive(Debug, Clone, Default)]
pub struct ServerLauncher;

impl ServerLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(plan: &LaunchPlan) -> Command {
        let mut cmd = Command::new(&plan.program);
        cmd.args(plan.args());
        cmd
    }
}

impl Launcher for ServerLauncher {
    #[cfg(unix)]
    fn launch(&self, plan: &LaunchPlan) -> Result<i32> {
        use std::os::unix::process::CommandExt;

        // exec only returns when the replacement failed
        let source = Self::command(plan).exec();
        Err(BootError::HandoffError {
            program: plan.program.clone(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn launch(&self, plan: &LaunchPlan) -> Result<i32> {
        let status = Self::command(plan)
            .status()
            .map_err(|source| BootError::HandoffError {
                program: plan.program.clone(),
                source,
            })?;
        Ok(status.code().unwrap_or(1))
    }
}
