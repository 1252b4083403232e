use clap::Parser;
use forge_boot::utils::{logger, validation::Validate};
use forge_boot::{BootEngine, CliConfig, EnvSnapshot, ServerLauncher, StandardSequence};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting forge-boot supervisor");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 環境快照只取一次，之後所有步驟都讀這份
    let env = EnvSnapshot::capture();
    let workdir = std::env::current_dir()?;

    let sequence = StandardSequence::new(config, env, workdir);
    let engine = BootEngine::new(sequence, ServerLauncher::new());

    match engine.run().await {
        Ok(status) => {
            // Only reachable on targets without exec: the child has been
            // awaited and its exit status is propagated unchanged.
            std::process::exit(status);
        }
        Err(e) => {
            tracing::error!(
                "❌ Boot sequence failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                forge_boot::utils::error::ErrorSeverity::Low => 1,
                forge_boot::utils::error::ErrorSeverity::Medium => 2,
                forge_boot::utils::error::ErrorSeverity::High => 1,
                forge_boot::utils::error::ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
