//! State management for the portfolio application.

use crate::image_cache::ImageCache;
use crate::services::GalleryService;
use std::sync::{Arc, Mutex};

pub mod gallery;
pub mod scroll_lock;
pub mod sections;

pub use gallery::GalleryController;
pub use scroll_lock::ScrollLock;
pub use sections::SectionTracker;

/// Application-wide state container.
pub struct AppState {
    pub sections: Arc<Mutex<SectionTracker>>,
    pub gallery: Arc<Mutex<GalleryController>>,
    /// Lock the gallery holds while open; the page binds interactivity to it.
    pub scroll_lock: ScrollLock,
    /// LRU cache for decoded gallery images.
    pub image_cache: Arc<Mutex<ImageCache>>,
    /// Timer slot for the smooth-scroll tween.
    pub scroll_tween_timer: Arc<Mutex<Option<slint::Timer>>>,
    /// Gallery open/close handle, installed once at startup.
    gallery_service: once_cell::sync::OnceCell<GalleryService>,
}

impl AppState {
    pub fn new() -> Self {
        let scroll_lock = ScrollLock::new();
        Self {
            sections: Arc::new(Mutex::new(SectionTracker::new())),
            gallery: Arc::new(Mutex::new(GalleryController::new(scroll_lock.clone()))),
            scroll_lock,
            image_cache: Arc::new(Mutex::new(ImageCache::new(
                crate::config::IMAGE_CACHE_CAPACITY,
            ))),
            scroll_tween_timer: Arc::new(Mutex::new(None)),
            gallery_service: once_cell::sync::OnceCell::new(),
        }
    }

    /// Installs the shared gallery handle. Called exactly once during startup.
    pub fn install_gallery(&self, service: GalleryService) {
        if self.gallery_service.set(service).is_err() {
            panic!("install_gallery called twice");
        }
    }

    /// Returns the shared gallery handle.
    ///
    /// Requesting it before `install_gallery` is a wiring bug and fails
    /// loudly rather than silently dropping the caller's request.
    pub fn gallery_handle(&self) -> &GalleryService {
        self.gallery_service
            .get()
            .expect("gallery service requested before install_gallery ran")
    }
}
