use crate::config::toml_config::{TomlConfig, DEFAULT_CONFIG_FILE};
use crate::utils::error::{QuoteError, Result};
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "quote-cart")]
#[command(about = "Browse the agency service catalog and build a quote request")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override backend.url
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Override backend.anon_key
    #[arg(long, global = true)]
    pub anon_key: Option<String>,

    /// Override checkout.output_path
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive cart session
    Shell,
    /// Print the service catalog
    Catalog,
    /// Build and submit a quote from a request file
    Quote {
        /// Path to the request TOML file
        #[arg(short, long)]
        request: String,

        /// Show the quote without submitting it
        #[arg(long)]
        dry_run: bool,
    },
}

impl CliConfig {
    /// 合併設定檔與命令列覆蓋
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                tracing::info!("📁 Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                TomlConfig::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                let url = self
                    .backend_url
                    .clone()
                    .ok_or_else(|| QuoteError::MissingConfigError {
                        field: "backend.url (pass --config or --backend-url)".to_string(),
                    })?;
                TomlConfig::with_backend(url)
            }
        };

        if let Some(url) = &self.backend_url {
            config.backend.url = url.clone();
            tracing::info!("🔧 backend.url overridden to: {}", url);
        }
        if let Some(key) = &self.anon_key {
            config.backend.anon_key = Some(key.clone());
        }
        if let Some(path) = &self.output_path {
            config.checkout.output_path = Some(path.clone());
            tracing::info!("🔧 checkout.output_path overridden to: {}", path);
        }

        Ok(config)
    }
}
