use crate::domain::model::{LaunchPlan, RuntimeReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Static settings for the boot sequence, provided by the CLI layer.
pub trait BootSettings: Send + Sync {
    fn entrypoint(&self) -> &str;
    fn app_target(&self) -> &str;
    fn host(&self) -> &str;
    fn server(&self) -> &str;
}

/// The ordered diagnostic and precondition steps that run before handoff.
/// Each step is fallible; the engine aborts the sequence on the first error.
#[async_trait]
pub trait BootSequence: Send + Sync {
    async fn report_runtime(&self) -> Result<RuntimeReport>;
    async fn list_workdir(&self) -> Result<Vec<String>>;
    async fn report_env(&self) -> Result<Vec<(String, String)>>;
    async fn check_entrypoint(&self) -> Result<()>;
    async fn resolve_port(&self) -> Result<u16>;
    fn launch_plan(&self, port: u16) -> LaunchPlan;
}

/// Terminal handoff seam. The production implementation replaces the
/// process image on Unix and only returns on failure; the fallback awaits
/// the child and returns its exit status for the caller to propagate.
pub trait Launcher: Send + Sync {
    fn launch(&self, plan: &LaunchPlan) -> Result<i32>;
}
