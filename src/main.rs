use clap::Parser;
use death_clock::utils::{logger, validation::Validate};
use death_clock::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting death-clock");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match death_clock::app::run(&config).await {
        Ok(outcome) => {
            tracing::info!(
                "✅ Finished for {}: {:?}",
                outcome.answer.name,
                outcome.countdown
            );
            println!("✅ Record saved to: {}", config.record_file);
        }
        Err(e) => {
            tracing::error!("❌ death-clock failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
