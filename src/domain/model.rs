use crate::utils::error::{BootError, Result};
use serde::{Deserialize, Serialize};

/// Port used when the `PORT` variable is unset or empty.
pub const DEFAULT_PORT: u16 = 8000;

/// Ordered capture of the process environment, taken exactly once at startup.
/// Every later step reads this snapshot, never `std::env` directly, so the
/// diagnostic listing and port resolution always agree.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    entries: Vec<(String, String)>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self {
            entries: std::env::vars().collect(),
        }
    }

    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

/// Startup configuration resolved from the environment snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootConfig {
    pub port: u16,
}

impl BootConfig {
    /// `PORT` unset or empty falls back to the default; a non-numeric or
    /// out-of-range value is rejected rather than passed through.
    pub fn resolve(env: &EnvSnapshot) -> Result<Self> {
        let port = match env.get("PORT") {
            None => DEFAULT_PORT,
            Some(raw) if raw.trim().is_empty() => DEFAULT_PORT,
            Some(raw) => {
                raw.trim()
                    .parse::<u16>()
                    .map_err(|e| BootError::InvalidConfigValueError {
                        field: "PORT".to_string(),
                        value: raw.to_string(),
                        reason: format!("not a valid port number: {}", e),
                    })?
            }
        };

        Ok(Self { port })
    }
}

/// The command that receives control at the end of the sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub app_target: String,
    pub host: String,
    pub port: u16,
}

impl LaunchPlan {
    pub fn args(&self) -> Vec<String> {
        vec![
            self.app_target.clone(),
            "--host".to_string(),
            self.host.clone(),
            "--port".to_string(),
            self.port.to_string(),
            "--log-level".to_string(),
            "debug".to_string(),
        ]
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Identity diagnostics emitted before any check runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeReport {
    pub supervisor: String,
    pub version: String,
    pub os: String,
    pub kernel: String,
    pub host: String,
    pub working_dir: String,
}
