//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod contact_service;
pub mod gallery_service;
pub mod scroll_service;

pub use contact_service::ContactService;
pub use gallery_service::GalleryService;
pub use scroll_service::ScrollService;
