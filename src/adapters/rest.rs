//! PostgREST（Supabase 風格）後端。
//!
//! 讀取：`GET {base_url}/rest/v1/{table}?select=..&{filter}&order=..`
//! 寫入：`POST {base_url}/rest/v1/quote_requests`
use crate::domain::model::{BlogPost, PortfolioItem, QuoteRequest, Service};
use crate::domain::ports::{ConfigProvider, ContentProvider, QuoteSink};
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const SERVICES_TABLE: &str = "services";
pub const BLOG_POSTS_TABLE: &str = "blog_posts";
pub const PORTFOLIO_TABLE: &str = "portfolio_items";
pub const QUOTE_REQUESTS_TABLE: &str = "quote_requests";

const BLOG_POST_COLUMNS: &str =
    "id,title,slug,excerpt,category,featured_image,published_at,read_time";

#[derive(Debug, Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    anon_key: Option<String>,
}

impl RestBackend {
    pub fn new(base_url: &str, anon_key: Option<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.backend_url(),
            config.anon_key().map(str::to_string),
            config.timeout_seconds(),
        )
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.anon_key {
            Some(key) => request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = self.table_url(table);
        tracing::debug!("Making API request to: {} {:?}", url, query);

        let response = self
            .authorize(self.client.get(&url))
            .query(query)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuoteError::RemoteStatusError {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let records: Vec<T> = response.json().await?;
        tracing::debug!("Fetched {} record(s) from {}", records.len(), table);
        Ok(records)
    }
}

#[async_trait]
impl ContentProvider for RestBackend {
    async fn services(&self) -> Result<Vec<Service>> {
        self.select(
            SERVICES_TABLE,
            &[
                ("select", "*".to_string()),
                ("is_active", "eq.true".to_string()),
                ("order", "category.asc".to_string()),
            ],
        )
        .await
    }

    async fn blog_posts(&self, limit: usize) -> Result<Vec<BlogPost>> {
        self.select(
            BLOG_POSTS_TABLE,
            &[
                ("select", BLOG_POST_COLUMNS.to_string()),
                ("published", "eq.true".to_string()),
                ("order", "published_at.desc".to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn portfolio_items(&self) -> Result<Vec<PortfolioItem>> {
        self.select(
            PORTFOLIO_TABLE,
            &[
                ("select", "*".to_string()),
                ("is_published", "eq.true".to_string()),
                ("order", "featured.desc,order_index.asc".to_string()),
            ],
        )
        .await
    }

    // 作品集頁面不篩選 is_published
    async fn all_portfolio_items(&self) -> Result<Vec<PortfolioItem>> {
        self.select(
            PORTFOLIO_TABLE,
            &[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
    }
}

#[async_trait]
impl QuoteSink for RestBackend {
    async fn submit(&self, request: &QuoteRequest) -> Result<String> {
        let url = self.table_url(QUOTE_REQUESTS_TABLE);
        tracing::debug!("Posting quote request to: {}", url);

        let response = self
            .authorize(self.client.post(&url))
            .header("Prefer", "return=minimal")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuoteError::RemoteStatusError {
                table: QUOTE_REQUESTS_TABLE.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(format!(
            "{}@{}",
            QUOTE_REQUESTS_TABLE,
            request.submitted_at.to_rfc3339()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url_strips_trailing_slash() {
        let backend = RestBackend::new("https://demo.supabase.co/", None, 5).unwrap();
        assert_eq!(
            backend.table_url(SERVICES_TABLE),
            "https://demo.supabase.co/rest/v1/services"
        );
    }
}
