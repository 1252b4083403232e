use crate::core::{BootSequence, Launcher};
use crate::utils::error::Result;

/// Drives the boot steps strictly in order. The first failure aborts the
/// whole sequence; nothing is retried.
pub struct BootEngine<S: BootSequence, L: Launcher> {
    sequence: S,
    launcher: L,
}

impl<S: BootSequence, L: Launcher> BootEngine<S, L> {
    pub fn new(sequence: S, launcher: L) -> Self {
        Self { sequence, launcher }
    }

    /// Runs diagnostics, checks preconditions, then invokes the launcher
    /// exactly once. On Unix a successful handoff never returns; the
    /// returned status only exists on the wait-and-propagate fallback.
    pub async fn run(&self) -> Result<i32> {
        tracing::info!("🚀 Starting boot sequence");

        let report = self.sequence.report_runtime().await?;
        tracing::debug!("Runtime report: {:?}", report);

        let entries = self.sequence.list_workdir().await?;
        tracing::info!("📂 Working directory entries ({}):", entries.len());
        for name in &entries {
            tracing::info!("  {}", name);
        }

        let env = self.sequence.report_env().await?;
        tracing::info!("🔍 Environment ({} entries after filtering):", env.len());
        for (key, value) in &env {
            tracing::info!("  {}={}", key, value);
        }

        self.sequence.check_entrypoint().await?;

        let port = self.sequence.resolve_port().await?;
        tracing::info!("🔌 Resolved port: {}", port);

        let plan = self.sequence.launch_plan(port);
        tracing::info!(
            "➡️ Handing off to '{}' on {}",
            plan.program,
            plan.bind_address()
        );
        self.launcher.launch(&plan)
    }
}
