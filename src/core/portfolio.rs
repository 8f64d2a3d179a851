use crate::domain::model::PortfolioItem;

/// 不篩選分類時使用的標籤
pub const ALL: &str = "All";

/// `All` followed by every distinct category, in the order they first appear.
pub fn categories(items: &[PortfolioItem]) -> Vec<&str> {
    let mut categories = vec![ALL];
    for item in items {
        if !categories[1..].contains(&item.category.as_str()) {
            categories.push(item.category.as_str());
        }
    }
    categories
}

/// 分類需完全相符（大小寫有別）；`All` 回傳全部
pub fn filter_by_category<'a>(items: &'a [PortfolioItem], category: &str) -> Vec<&'a PortfolioItem> {
    items
        .iter()
        .filter(|item| category == ALL || item.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> PortfolioItem {
        PortfolioItem {
            id: id.to_string(),
            title: format!("Work {}", id),
            client: String::new(),
            category: category.to_string(),
            description: String::new(),
            video_url: String::new(),
            thumbnail_url: None,
            duration: None,
            tags: vec![],
            services_used: vec![],
            ai_enhanced: false,
            featured: false,
        }
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let items = vec![
            item("1", "Music Video"),
            item("2", "Commercial"),
            item("3", "Music Video"),
            item("4", "Documentary"),
        ];

        assert_eq!(
            categories(&items),
            vec!["All", "Music Video", "Commercial", "Documentary"]
        );
        assert_eq!(categories(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_by_category() {
        let items = vec![item("1", "Music Video"), item("2", "Commercial"), item("3", "Music Video")];

        let ids = |selected: Vec<&PortfolioItem>| -> Vec<String> {
            selected.iter().map(|i| i.id.clone()).collect()
        };

        assert_eq!(ids(filter_by_category(&items, "All")), vec!["1", "2", "3"]);
        assert_eq!(ids(filter_by_category(&items, "Music Video")), vec!["1", "3"]);
        assert!(filter_by_category(&items, "music video").is_empty());
        assert!(filter_by_category(&items, "Weddings").is_empty());
    }
}
