//! Application services — one module per use-case.

pub mod content_service;

pub use content_service::ContentService;
