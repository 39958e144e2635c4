use clap::Parser;
use knative_cost_calc::utils::{logger, validation::Validate};
use knative_cost_calc::{BatchPipeline, CliConfig, LocalStorage, ReportEngine, SinglePipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting knative-cost-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let result = if config.batch.is_some() {
        ReportEngine::new(BatchPipeline::new(storage, config)).run()
    } else {
        ReportEngine::new(SinglePipeline::new(storage, config)).run()
    };

    match result {
        Ok(Some(path)) => {
            tracing::info!("✅ Calculation completed");
            println!("📁 Results exported to: {}", path);
        }
        Ok(None) => {
            tracing::info!("✅ Calculation completed");
        }
        Err(e) => {
            tracing::error!("❌ Calculation failed: {}", e);
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}
