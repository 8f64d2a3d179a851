use clap::Parser;
use quote_cart::app::{run_quote, BatchOutcome, Shell};
use quote_cart::core::ConfigProvider;
use quote_cart::domain::ports::QuoteSink;
use quote_cart::utils::error::{ErrorSeverity, QuoteError};
use quote_cart::utils::{logger, validation::Validate};
use quote_cart::{
    CliConfig, FileQuoteSink, LocalStorage, QuoteRequestFile, RestBackend, SinkKind, Storefront,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting quote-cart");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ quote-cart failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(cli: CliConfig) -> Result<(), QuoteError> {
    let config = cli.resolve()?;
    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");
    tracing::debug!(
        "Backend: {}, sink: {:?}, output: {}",
        config.backend_url(),
        config.sink(),
        config.output_path()
    );

    let backend = RestBackend::from_config(&config)?;
    let sink = build_sink(&config, backend.clone());
    let storefront = Storefront::new(backend);

    match cli.command {
        quote_cart::config::Command::Shell => {
            let catalog = storefront.load_catalog().await;
            let mut shell = Shell::new(&storefront, sink.as_ref(), catalog);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            shell.run(stdin, &mut stdout).await?;
        }
        quote_cart::config::Command::Catalog => {
            let catalog = storefront.load_catalog().await;
            print!("{}", catalog.render(&Default::default()));
        }
        quote_cart::config::Command::Quote { request, dry_run } => {
            tracing::info!("📁 Loading quote request from: {}", request);
            let request = QuoteRequestFile::from_file(&request)?;

            match run_quote(&storefront, sink.as_ref(), request, dry_run).await? {
                BatchOutcome::DryRun(quote) => {
                    println!("{}", serde_json::to_string_pretty(&quote)?);
                }
                BatchOutcome::Submitted(reference) => {
                    println!("✅ Quote request submitted successfully!");
                    println!("📁 {}", reference);
                }
            }
        }
    }

    Ok(())
}

fn build_sink(config: &TomlConfig, backend: RestBackend) -> Box<dyn QuoteSink> {
    match config.sink() {
        SinkKind::Rest => Box::new(backend),
        SinkKind::File => {
            let storage = LocalStorage::new(config.output_path().to_string());
            Box::new(FileQuoteSink::new(storage, config.output_path().to_string()))
        }
    }
}
