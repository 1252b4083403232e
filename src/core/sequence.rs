use crate::core::{BootConfig, BootSequence, BootSettings, EnvSnapshot, LaunchPlan};
use crate::domain::model::RuntimeReport;
use crate::utils::error::{BootError, Result};
use crate::utils::monitor::RuntimeReporter;
use crate::utils::redact::SensitiveFilter;
use std::fs;
use std::path::PathBuf;

/// Production implementation of the boot steps. All reads go through the
/// one-shot environment snapshot and the configured working directory.
pub struct StandardSequence<C: BootSettings> {
    config: C,
    env: EnvSnapshot,
    workdir: PathBuf,
    filter: SensitiveFilter,
    reporter: RuntimeReporter,
}

impl<C: BootSettings> StandardSequence<C> {
    pub fn new(config: C, env: EnvSnapshot, workdir: PathBuf) -> Self {
        Self {
            config,
            env,
            workdir,
            filter: SensitiveFilter::new(),
            reporter: RuntimeReporter::new(),
        }
    }

    fn entrypoint_path(&self) -> PathBuf {
        self.workdir.join(self.config.entrypoint())
    }
}

#[async_trait::async_trait]
impl<C: BootSettings> BootSequence for StandardSequence<C> {
    async fn report_runtime(&self) -> Result<RuntimeReport> {
        let report = self.reporter.report(&self.workdir);
        self.reporter.log_report(&report);
        tracing::debug!("{}", serde_json::to_string(&report)?);
        Ok(report)
    }

    async fn list_workdir(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.workdir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    async fn report_env(&self) -> Result<Vec<(String, String)>> {
        Ok(self.filter.filter(self.env.entries()))
    }

    async fn check_entrypoint(&self) -> Result<()> {
        let path = self.entrypoint_path();
        if !path.is_file() {
            tracing::error!("❌ Entrypoint file not found: {}", path.display());
            return Err(BootError::MissingEntrypointError {
                path: self.config.entrypoint().to_string(),
            });
        }
        tracing::info!("✅ Entrypoint present: {}", self.config.entrypoint());
        Ok(())
    }

    async fn resolve_port(&self) -> Result<u16> {
        let config = BootConfig::resolve(&self.env)?;
        Ok(config.port)
    }

    fn launch_plan(&self, port: u16) -> LaunchPlan {
        LaunchPlan {
            program: self.config.server().to_string(),
            app_target: self.config.app_target().to_string(),
            host: self.config.host().to_string(),
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct MockSettings {
        entrypoint: String,
    }

    impl MockSettings {
        fn new() -> Self {
            Self {
                entrypoint: "forge_kernel.py".to_string(),
            }
        }
    }

    impl BootSettings for MockSettings {
        fn entrypoint(&self) -> &str {
            &self.entrypoint
        }

        fn app_target(&self) -> &str {
            "forge_kernel:app"
        }

        fn host(&self) -> &str {
            "0.0.0.0"
        }

        fn server(&self) -> &str {
            "uvicorn"
        }
    }

    fn snapshot(vars: &[(&str, &str)]) -> EnvSnapshot {
        EnvSnapshot::from_entries(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn sequence_in(
        dir: &TempDir,
        vars: &[(&str, &str)],
    ) -> StandardSequence<MockSettings> {
        StandardSequence::new(
            MockSettings::new(),
            snapshot(vars),
            dir.path().to_path_buf(),
        )
    }

    #[tokio::test]
    async fn test_list_workdir_returns_sorted_entries() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.txt"), b"").unwrap();
        std::fs::write(dir.path().join("a.txt"), b"").unwrap();

        let sequence = sequence_in(&dir, &[]);
        let names = sequence.list_workdir().await.unwrap();

        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[tokio::test]
    async fn test_list_workdir_fails_for_missing_directory() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        let sequence = StandardSequence::new(
            MockSettings::new(),
            snapshot(&[]),
            gone,
        );

        assert!(sequence.list_workdir().await.is_err());
    }

    #[tokio::test]
    async fn test_report_env_omits_sensitive_entries() {
        let dir = TempDir::new().unwrap();
        let sequence = sequence_in(
            &dir,
            &[
                ("API_SECRET", "abc123"),
                ("PORT", "5000"),
                ("PATH", "/usr/bin"),
            ],
        );

        let env = sequence.report_env().await.unwrap();

        assert!(env.iter().all(|(k, _)| k != "API_SECRET"));
        assert!(env.iter().all(|(_, v)| !v.contains("abc123")));
        assert!(env.iter().any(|(k, v)| k == "PORT" && v == "5000"));
    }

    #[tokio::test]
    async fn test_check_entrypoint_present() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("forge_kernel.py"), b"app = object()").unwrap();

        let sequence = sequence_in(&dir, &[]);
        assert!(sequence.check_entrypoint().await.is_ok());
    }

    #[tokio::test]
    async fn test_check_entrypoint_absent_names_the_file() {
        let dir = TempDir::new().unwrap();
        let sequence = sequence_in(&dir, &[]);

        let err = sequence.check_entrypoint().await.unwrap_err();
        assert!(err.to_string().contains("forge_kernel.py"));
    }

    #[tokio::test]
    async fn test_resolve_port_reads_snapshot_not_process_env() {
        let dir = TempDir::new().unwrap();
        let sequence = sequence_in(&dir, &[("PORT", "9090")]);

        assert_eq!(sequence.resolve_port().await.unwrap(), 9090);
    }

    #[tokio::test]
    async fn test_launch_plan_uses_settings_and_resolved_port() {
        let dir = TempDir::new().unwrap();
        let sequence = sequence_in(&dir, &[]);

        let plan = sequence.launch_plan(8000);
        assert_eq!(plan.program, "uvicorn");
        assert_eq!(plan.app_target, "forge_kernel:app");
        assert_eq!(plan.bind_address(), "0.0.0.0:8000");
    }
}
