//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod viewer_service;

pub use viewer_service::ViewerService;
