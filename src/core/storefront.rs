use crate::core::catalog::Catalog;
use crate::domain::model::{BlogPost, PortfolioItem};
use crate::domain::ports::ContentProvider;
use crate::utils::error::Result;

pub const HOME_BLOG_LIMIT: usize = 3;

/// 讀取遠端內容。失敗時只記錄日誌並回傳空結果，不重試。
pub struct Storefront<P: ContentProvider> {
    provider: P,
}

#[derive(Debug, Clone, Default)]
pub struct StorefrontContent {
    pub catalog: Catalog,
    pub blog_posts: Vec<BlogPost>,
    pub portfolio_items: Vec<PortfolioItem>,
}

impl<P: ContentProvider> Storefront<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn load_catalog(&self) -> Catalog {
        let services = or_empty("services", self.provider.services().await);
        tracing::info!("Loaded {} active service(s)", services.len());
        Catalog::new(services)
    }

    pub async fn load_blog_posts(&self) -> Vec<BlogPost> {
        or_empty("blog posts", self.provider.blog_posts(HOME_BLOG_LIMIT).await)
    }

    pub async fn load_portfolio(&self) -> Vec<PortfolioItem> {
        or_empty("portfolio", self.provider.portfolio_items().await)
    }

    /// 作品集頁面用的完整清單
    pub async fn load_full_portfolio(&self) -> Vec<PortfolioItem> {
        let items = or_empty("portfolio", self.provider.all_portfolio_items().await);
        tracing::info!("Loaded {} portfolio item(s)", items.len());
        items
    }

    /// 三個來源彼此獨立，同時發出
    pub async fn load_all(&self) -> StorefrontContent {
        let (catalog, blog_posts, portfolio_items) = tokio::join!(
            self.load_catalog(),
            self.load_blog_posts(),
            self.load_portfolio()
        );

        StorefrontContent {
            catalog,
            blog_posts,
            portfolio_items,
        }
    }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("❌ Error loading {}: {}", what, e);
            tracing::warn!("💡 {}", e.recovery_suggestion());
            Vec::new()
        }
    }
}
