use crate::domain::model::QuoteRequest;
use crate::domain::ports::{QuoteSink, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// 把報價請求寫成 JSON 檔
pub struct FileQuoteSink<S: Storage> {
    storage: S,
    output_path: String,
}

impl<S: Storage> FileQuoteSink<S> {
    pub fn new(storage: S, output_path: String) -> Self {
        Self {
            storage,
            output_path,
        }
    }

    pub fn file_name(request: &QuoteRequest) -> String {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!(
            "quote-{}-{}.json",
            request.submitted_at.format("%Y%m%dT%H%M%S%3fZ"),
            &suffix[..8]
        )
    }
}

#[async_trait]
impl<S: Storage> QuoteSink for FileQuoteSink<S> {
    async fn submit(&self, request: &QuoteRequest) -> Result<String> {
        let file_name = Self::file_name(request);
        let json_data = serde_json::to_string_pretty(request)?;

        tracing::debug!("Writing quote ({} bytes) to storage", json_data.len());
        self.storage
            .write_file(&file_name, json_data.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.output_path, file_name))
    }
}
