use crate::domain::model::ContactDetails;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 批次報價的請求檔
///
/// ```toml
/// [contact]
/// name = "Jo Rivera"
/// email = "jo@studio.io"
///
/// [[items]]
/// service_id = "svc-brand-film"
/// notes = "30s and 15s cuts"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequestFile {
    pub contact: ContactDetails,
    #[serde(default)]
    pub items: Vec<RequestedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestedItem {
    pub service_id: String,
    pub notes: Option<String>,
}

impl QuoteRequestFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for QuoteRequestFile {
    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(QuoteError::ValidationError {
                message: "request file lists no [[items]]".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_file() {
        let request = QuoteRequestFile::from_toml_str(
            r#"
[contact]
name = "Jo Rivera"
email = "jo@studio.io"
company = "Rivera Studio"

[[items]]
service_id = "svc-1"
notes = "rush delivery"

[[items]]
service_id = "svc-2"
"#,
        )
        .unwrap();

        assert_eq!(request.contact.company.as_deref(), Some("Rivera Studio"));
        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[1].notes, None);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_without_items_is_invalid() {
        let request = QuoteRequestFile::from_toml_str(
            r#"
[contact]
name = "Jo"
email = "jo@studio.io"
"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }
}
