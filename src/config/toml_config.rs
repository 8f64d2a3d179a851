use crate::core::ConfigProvider;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_CONFIG_FILE: &str = "quote-cart.toml";
pub const DEFAULT_OUTPUT_PATH: &str = "./quotes";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    File,
    Rest,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub sink: SinkKind,
    pub output_path: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex"))
}

impl TomlConfig {
    /// 只用後端網址建立設定（沒有設定檔時）
    pub fn with_backend(url: String) -> Self {
        Self {
            backend: BackendConfig {
                url,
                anon_key: None,
                timeout_seconds: None,
            },
            checkout: CheckoutConfig::default(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SUPABASE_ANON_KEY})；找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("backend.url", &self.backend.url)?;
        validation::validate_path("checkout.output_path", self.output_path())?;
        validation::validate_positive_number("backend.timeout_seconds", self.timeout_seconds(), 1)?;

        if let Some(key) = &self.backend.anon_key {
            if env_var_pattern().is_match(key) {
                return Err(QuoteError::InvalidConfigValueError {
                    field: "backend.anon_key".to_string(),
                    value: key.clone(),
                    reason: "environment variable is not set".to_string(),
                });
            }
        }

        if self.checkout.sink == SinkKind::Rest {
            validation::validate_required_field("backend.anon_key", &self.backend.anon_key)?;
        }

        Ok(())
    }

    pub fn sink(&self) -> SinkKind {
        self.checkout.sink
    }
}

impl ConfigProvider for TomlConfig {
    fn backend_url(&self) -> &str {
        &self.backend.url
    }

    fn anon_key(&self) -> Option<&str> {
        self.backend.anon_key.as_deref()
    }

    fn output_path(&self) -> &str {
        self.checkout
            .output_path
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn timeout_seconds(&self) -> u64 {
        self.backend.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
