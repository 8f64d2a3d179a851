pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileQuoteSink, LocalStorage, RestBackend};
pub use config::{QuoteRequestFile, SinkKind, TomlConfig};
pub use crate::core::{session::Session, storefront::Storefront};
pub use utils::error::{QuoteError, Result};
