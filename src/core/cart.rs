use crate::domain::model::{CartItem, CartItemId, Service};
use std::collections::HashSet;

/// 目前選取服務的唯一來源
///
/// 寫入只能透過下面幾個方法；找不到的 id 一律當作 no-op，不回錯誤。
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同一個 service id 只會有一筆；重複加入時不做任何事。
    /// 回傳是否真的新增了一筆。
    pub fn add_to_cart(&mut self, service: Service) -> bool {
        if self.contains_service(&service.id) {
            tracing::debug!("Service {} already in cart, ignoring", service.id);
            return false;
        }

        tracing::debug!("Adding service {} ({}) to cart", service.id, service.name);
        self.items.push(CartItem::new(service));
        true
    }

    pub fn remove_from_cart(&mut self, item_id: CartItemId) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == item_id)?;
        let removed = self.items.remove(index);
        tracing::debug!("Removed cart item {} ({})", item_id, removed.service.name);
        Some(removed)
    }

    pub fn update_cart_item_notes(&mut self, item_id: CartItemId, text: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.notes = text.into();
                true
            }
            None => false,
        }
    }

    pub fn cart_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, item_id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn contains_service(&self, service_id: &str) -> bool {
        self.items.iter().any(|item| item.service.id == service_id)
    }

    pub fn added_service_ids(&self) -> HashSet<&str> {
        self.items
            .iter()
            .map(|item| item.service.id.as_str())
            .collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn service(id: &str, category: &str) -> Service {
        Service {
            id: id.to_string(),
            name: format!("Service {}", id),
            category: category.to_string(),
            description: String::new(),
            detailed_description: String::new(),
            features: vec![],
            benefits: vec![],
            use_cases: vec![],
            is_active: true,
        }
    }

    #[test]
    fn test_distinct_adds_are_counted() {
        let mut cart = CartStore::new();
        for id in ["a", "b", "c", "d"] {
            assert!(cart.add_to_cart(service(id, "creative")));
        }
        assert_eq!(cart.cart_count(), 4);
        assert_eq!(cart.cart_count(), cart.items().len());
    }

    #[test]
    fn test_duplicate_add_is_idempotent() {
        let mut cart = CartStore::new();
        assert!(cart.add_to_cart(service("a", "creative")));
        assert!(!cart.add_to_cart(service("a", "creative")));
        assert_eq!(cart.cart_count(), 1);
    }

    #[test]
    fn test_new_items_start_with_empty_notes() {
        let mut cart = CartStore::new();
        cart.add_to_cart(service("a", "creative"));
        assert_eq!(cart.items()[0].notes, "");
    }

    #[test]
    fn test_double_remove_is_noop() {
        let mut cart = CartStore::new();
        cart.add_to_cart(service("a", "creative"));
        let id = cart.items()[0].id;

        assert!(cart.remove_from_cart(id).is_some());
        assert!(cart.remove_from_cart(id).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_notes_on_missing_item_leaves_cart_unchanged() {
        let mut cart = CartStore::new();
        cart.add_to_cart(service("a", "creative"));
        let before = cart.items().to_vec();

        assert!(!cart.update_cart_item_notes(CartItemId::new(), "ignored"));
        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn test_add_remove_annotate_scenario() {
        let mut cart = CartStore::new();
        cart.add_to_cart(service("A", "creative"));
        cart.add_to_cart(service("B", "marketing"));
        assert_eq!(cart.cart_count(), 2);

        let a = cart.items()[0].id;
        let b = cart.items()[1].id;
        cart.remove_from_cart(a);
        assert_eq!(cart.cart_count(), 1);
        assert_eq!(cart.items()[0].service.id, "B");

        assert!(cart.update_cart_item_notes(b, "rush delivery"));
        assert_eq!(cart.get(b).unwrap().notes, "rush delivery");
    }

    #[test]
    fn test_removed_service_can_be_added_again_with_fresh_notes() {
        let mut cart = CartStore::new();
        cart.add_to_cart(service("a", "creative"));
        let first = cart.items()[0].id;
        cart.update_cart_item_notes(first, "old notes");
        cart.remove_from_cart(first);

        assert!(cart.add_to_cart(service("a", "creative")));
        let second = &cart.items()[0];
        assert_ne!(second.id, first);
        assert_eq!(second.notes, "");
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = CartStore::new();
        for id in ["z", "a", "m"] {
            cart.add_to_cart(service(id, "creative"));
        }
        let ids: Vec<&str> = cart.items().iter().map(|i| i.service.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        assert!(cart.added_service_ids().contains("m"));
    }
}
