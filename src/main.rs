use clap::Parser;
use serde_json::json;
use std::sync::Arc;
use ticker_logo::utils::{logger, validation::Validate};
use ticker_logo::{build_resolver, CliConfig, ResolutionCache, Ticker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.json_logs);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    let file_config = match config.validate().and_then(|_| config.load_toml()) {
        Ok(file_config) => file_config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let cache = Arc::new(ResolutionCache::new());
    let resolver = build_resolver(&file_config, Arc::clone(&cache))?;

    if config.dry_run {
        for raw in &config.tickers {
            let candidates = Ticker::parse(raw)
                .map(|t| resolver.sequencer().build(&t))
                .unwrap_or_default();
            println!("{}", json!({ "ticker": raw, "candidates": candidates }));
        }
        return Ok(());
    }

    tracing::info!("Resolving {} ticker(s)", config.tickers.len());
    let states = resolver.resolve_many(config.tickers.as_slice(), config.size).await;

    for (raw, state) in config.tickers.iter().zip(states) {
        println!("{}", serde_json::to_string(&json!({ "ticker": raw, "render": state }))?);
    }

    let stats = cache.stats();
    tracing::info!(
        "Done: {} resolved, {} failed",
        stats.resolved,
        stats.failed
    );

    Ok(())
}
