#[cfg(feature = "cli")]
pub mod cli;
pub mod request;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use request::{QuoteRequestFile, RequestedItem};
pub use toml_config::{SinkKind, TomlConfig};
