use anyhow::Context;
use clap::Parser;
use neighborhood_pets::app::commands::run_command;
use neighborhood_pets::utils::error::ErrorSeverity;
use neighborhood_pets::utils::logger::{self, LogFormat};
use neighborhood_pets::utils::validation::Validate;
use neighborhood_pets::{CliConfig, Settings, TomlConfig};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match &config.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?,
        ),
        None => None,
    };

    if let Some(file) = &file_config {
        if let Err(e) = file.validate() {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    let settings = Settings::resolve(
        file_config.as_ref(),
        config.data_file.clone(),
        config.log_format.clone(),
    );

    // 驗證配置
    if let Err(e) = settings.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 初始化日誌
    let format = LogFormat::parse(&settings.log_format).unwrap_or_default();
    logger::init_logger(config.verbose, settings.log_level.as_deref(), format);

    tracing::debug!("Settings: {:?}", settings);

    let result = run_command(
        &config.command,
        Path::new(&settings.data_file),
        &mut std::io::stdout().lock(),
    );

    if let Err(e) = result {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
