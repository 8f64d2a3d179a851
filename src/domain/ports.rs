use crate::domain::model::{BlogPost, PortfolioItem, QuoteRequest, Service};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn anon_key(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// 遠端內容來源：回傳符合條件的零或多筆資料，或可取回的錯誤
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Active services, ordered by category.
    async fn services(&self) -> Result<Vec<Service>>;
    /// Most recent published posts.
    async fn blog_posts(&self, limit: usize) -> Result<Vec<BlogPost>>;
    /// Published portfolio items, featured first.
    async fn portfolio_items(&self) -> Result<Vec<PortfolioItem>>;
    /// Every portfolio item, newest first, published or not.
    async fn all_portfolio_items(&self) -> Result<Vec<PortfolioItem>>;
}

/// 結帳送出的目的地
#[async_trait]
pub trait QuoteSink: Send + Sync {
    /// Returns a reference to where the quote ended up (a path or a remote id).
    async fn submit(&self, request: &QuoteRequest) -> Result<String>;
}
