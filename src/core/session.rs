use crate::core::cart::CartStore;
use crate::core::overlay::Overlay;
use crate::domain::model::{CartItem, CartItemId, ContactDetails, QuoteRequest, Service};
use crate::domain::ports::QuoteSink;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_email, validate_non_empty};

/// 一個瀏覽階段：購物車和浮層狀態的唯一擁有者。
///
/// Front ends hold a `Session` and go through its methods; there is no shared
/// global cart.
#[derive(Debug, Default)]
pub struct Session {
    cart: CartStore,
    overlay: Overlay,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn cart_count(&self) -> usize {
        self.cart.cart_count()
    }

    pub fn add_to_cart(&mut self, service: Service) -> bool {
        self.cart.add_to_cart(service)
    }

    pub fn remove_from_cart(&mut self, item_id: CartItemId) -> Option<CartItem> {
        self.cart.remove_from_cart(item_id)
    }

    pub fn update_cart_item_notes(&mut self, item_id: CartItemId, text: impl Into<String>) -> bool {
        self.cart.update_cart_item_notes(item_id, text)
    }

    pub fn open_cart(&mut self) -> bool {
        self.overlay.open_cart()
    }

    pub fn close_cart(&mut self) -> bool {
        self.overlay.close_cart()
    }

    pub fn close_checkout(&mut self) -> bool {
        self.overlay.close_checkout()
    }

    /// 從購物車進入結帳。購物車為空時不會轉換（抽屜不顯示結帳按鈕）。
    ///
    /// Returns a snapshot of the items handed to checkout.
    pub fn initiate_checkout(&mut self) -> Option<Vec<CartItem>> {
        if self.cart.is_empty() {
            tracing::debug!("Checkout requested with an empty cart, ignoring");
            return None;
        }
        if !self.overlay.initiate_checkout() {
            return None;
        }

        tracing::info!("Checkout started with {} item(s)", self.cart.cart_count());
        Some(self.cart.items().to_vec())
    }

    /// Builds the quote request from the current cart. Only valid while the
    /// checkout surface is open.
    pub fn prepare_quote(&self, contact: ContactDetails) -> Result<QuoteRequest> {
        if !self.overlay.is_checkout_open() {
            return Err(QuoteError::CheckoutError {
                message: "checkout is not open".to_string(),
            });
        }
        if self.cart.is_empty() {
            return Err(QuoteError::CheckoutError {
                message: "the cart is empty".to_string(),
            });
        }

        validate_non_empty("name", &contact.name)?;
        validate_email("email", &contact.email)?;

        let contact = ContactDetails {
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            company: contact
                .company
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            message: contact.message.filter(|m| !m.trim().is_empty()),
        };

        Ok(QuoteRequest::new(contact, self.cart.items()))
    }

    /// 送出報價。成功後清空購物車並關閉浮層；失敗時狀態不變。
    pub async fn submit<S: QuoteSink + ?Sized>(
        &mut self,
        contact: ContactDetails,
        sink: &S,
    ) -> Result<String> {
        let request = self.prepare_quote(contact)?;
        let reference = sink.submit(&request).await?;

        tracing::info!(
            "Quote with {} item(s) submitted: {}",
            request.items.len(),
            reference
        );
        self.cart.clear();
        self.overlay.close_checkout();
        Ok(reference)
    }
}
