pub mod cart;
pub mod catalog;
pub mod drawer;
pub mod overlay;
pub mod portfolio;
pub mod session;
pub mod storefront;

pub use crate::domain::model::{CartItem, CartItemId, ContactDetails, QuoteRequest, Service};
pub use crate::domain::ports::{ConfigProvider, ContentProvider, QuoteSink, Storage};
pub use crate::utils::error::Result;
