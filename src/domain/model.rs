use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 目錄中的一項服務，由遠端資料庫擁有，購物車只讀取
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub read_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub services_used: Vec<String>,
    #[serde(default)]
    pub ai_enhanced: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(Uuid);

impl CartItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl Default for CartItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// 一筆已選服務加上使用者備註
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub service: Service,
    pub notes: String,
}

impl CartItem {
    pub fn new(service: Service) -> Self {
        Self {
            id: CartItemId::new(),
            service,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLine {
    pub service_id: String,
    pub service_name: String,
    pub category: String,
    pub notes: String,
}

impl From<&CartItem> for QuoteLine {
    fn from(item: &CartItem) -> Self {
        Self {
            service_id: item.service.id.clone(),
            service_name: item.service.name.clone(),
            category: item.service.category.clone(),
            notes: item.notes.clone(),
        }
    }
}

/// 結帳時交給外部送出流程的內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub contact: ContactDetails,
    pub items: Vec<QuoteLine>,
    pub submitted_at: DateTime<Utc>,
}

impl QuoteRequest {
    pub fn new(contact: ContactDetails, items: &[CartItem]) -> Self {
        Self {
            contact,
            items: items.iter().map(QuoteLine::from).collect(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_deserializes_with_missing_lists() {
        let json = serde_json::json!({
            "id": "svc-1",
            "name": "Brand Film",
            "category": "creative"
        });

        let service: Service = serde_json::from_value(json).unwrap();
        assert!(service.features.is_empty());
        assert!(service.is_active);
    }

    #[test]
    fn test_cart_item_id_parse() {
        let id = CartItemId::new();
        assert_eq!(CartItemId::parse(&id.to_string()), Some(id));
        assert_eq!(CartItemId::parse("not-a-uuid"), None);
    }
}
