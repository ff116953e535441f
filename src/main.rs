use clap::Parser;
use geo_sum_bench::utils::{logger, validation::Validate};
use geo_sum_bench::{CliConfig, LineConsole, MenuLoop};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting geo-sum-bench");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Resolved config: {:?}", config);

    if config.monitoring_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut console = LineConsole::stdio();
    let mut menu = MenuLoop::new(&config);
    let exit = menu.run(&mut console)?;

    tracing::info!("✅ Session finished ({:?}): {:?}", exit, menu.summary());
    Ok(())
}
