use catalog_etl::core::ConfigProvider;
use catalog_etl::utils::error::ErrorSeverity;
use catalog_etl::utils::{logger, validation::Validate};
use catalog_etl::{CatalogPipeline, CliConfig, EtlEngine, LocalStorage, TomlConfig};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            let config =
                config.with_overrides(cli.csv_folder.clone(), cli.output.clone(), cli.include_size);
            convert(config).await
        }
        None => convert(cli).await,
    }
}

async fn convert<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let pipeline = CatalogPipeline::new(LocalStorage::current_dir(), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ CONVERSION COMPLETE!\n");
            println!("📝 Next steps:");
            println!("   1. Check the output: {}", summary.output_path);
            println!("   2. Run the merge step to combine products sold by several stores\n");
        }
        Err(e) if e.severity() == ErrorSeverity::Low => {
            // nothing to convert: guidance only, not a failure
            println!("❌ {}", e.user_friendly_message());
            println!("   {}\n", e.recovery_suggestion());
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
