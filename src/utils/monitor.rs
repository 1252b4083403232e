use crate::domain::model::RuntimeReport;
use std::path::Path;
#[cfg(feature = "cli")]
use sysinfo::System;

/// Collects the runtime identity emitted as the first diagnostic step.
#[derive(Debug, Clone, Default)]
pub struct RuntimeReporter;

impl RuntimeReporter {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "cli")]
    pub fn report(&self, working_dir: &Path) -> RuntimeReport {
        RuntimeReport {
            supervisor: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            os: System::long_os_version().unwrap_or_else(|| "unknown".to_string()),
            kernel: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
            host: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            working_dir: working_dir.display().to_string(),
        }
    }

    // 非CLI環境：不依賴 sysinfo
    #[cfg(not(feature = "cli"))]
    pub fn report(&self, working_dir: &Path) -> RuntimeReport {
        RuntimeReport {
            supervisor: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            os: std::env::consts::OS.to_string(),
            kernel: "unknown".to_string(),
            host: "unknown".to_string(),
            working_dir: working_dir.display().to_string(),
        }
    }

    pub fn log_report(&self, report: &RuntimeReport) {
        tracing::info!(
            "🖥️ {} v{} on {} (kernel {}, host {})",
            report.supervisor,
            report.version,
            report.os,
            report.kernel,
            report.host
        );
        tracing::info!("📁 Working directory: {}", report.working_dir);
    }
}
