use clap::Parser;
use folio_hydrate::core::ConfigProvider;
use folio_hydrate::utils::{logger, validation::Validate};
use folio_hydrate::{CliConfig, LocalStorage, PortfolioPipeline, SiteEngine, SiteError, TomlConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting folio-hydrate CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("Using site file: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => run(config).await,
                Err(e) => Err(e),
            }
        }
        None => run(cli).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Hydration failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<(), SiteError> {
    // 驗證配置
    config.validate()?;

    let site = LocalStorage::new(config.site_dir());
    let output = LocalStorage::new(config.output_path());
    let pipeline = PortfolioPipeline::new(site, output, config)?;

    let report = SiteEngine::new(pipeline).run().await?;

    if report.hydrated {
        tracing::info!("✅ Portfolio page hydrated");
        println!("✅ Portfolio page hydrated");
    } else {
        tracing::warn!("⚠️ Profile unavailable, static template content published");
        println!("⚠️ Profile unavailable, static template content published");
    }
    if let Some(title) = &report.document_title {
        println!("📄 {}", title);
    }
    println!("📁 Output saved to: {}", report.output_path);

    Ok(())
}
