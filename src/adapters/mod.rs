// Adapters layer: concrete implementations for external systems (http backend, storage).

pub mod rest;
pub mod storage;

pub use rest::RestBackend;
pub use storage::{FileQuoteSink, LocalStorage};
