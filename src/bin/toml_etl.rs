use clap::Parser;
use ticket_etl::config::toml_config::TomlConfig;
use ticket_etl::core::ConfigProvider;
use ticket_etl::utils::{logger, validation::Validate};
use ticket_etl::{EtlEngine, LocalSource, TicketPipeline};

#[derive(Parser)]
#[command(name = "toml-ticket-etl")]
#[command(about = "Ticket reformat driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "ticket-etl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override transform.filled_by from config
    #[arg(long)]
    filled_by: Option<String>,

    /// Override load.copy_to_clipboard from config
    #[arg(long)]
    copy: Option<bool>,

    /// Dry run - parse and count rows without printing or copying
    #[arg(long)]
    dry_run: bool,
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Name: {}", config.pipeline.name);
    if let Some(description) = &config.pipeline.description {
        tracing::info!("  Description: {}", description);
    }
    tracing::info!("  Input: {}", config.input_path().unwrap_or("stdin"));
    tracing::info!("  Filled by: {}", config.filled_by());
    tracing::info!("  Format: {:?}", config.output_format());
    tracing::info!("  Copy to clipboard: {}", config.copy_to_clipboard());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based ticket reformat");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(filled_by) = args.filled_by {
        tracing::info!("🔧 filled_by overridden to: {}", filled_by);
        config.transform.filled_by = filled_by;
    }
    if let Some(copy) = args.copy {
        tracing::info!("🔧 copy_to_clipboard overridden to: {}", copy);
        config.load.copy_to_clipboard = copy;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config);

    let source = LocalSource::new(config.input_path());
    let pipeline = TicketPipeline::new(source, config);
    let engine = EtlEngine::new(pipeline);

    let outcome = if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be printed or copied");
        engine.dry_run().await.map(|result| {
            let with_job = result.rows.iter().filter(|r| !r.job_name.is_empty()).count();
            tracing::info!(
                "🔍 {} rows would be written, {} with a job name",
                result.rows.len(),
                with_job
            );
        })
    } else {
        engine.run().await.map(|outcome| {
            tracing::info!("✅ Reformatted {} ticket rows", outcome.rows_written);
        })
    };

    if let Err(e) = outcome {
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());

        if e.exit_code() > 0 {
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
