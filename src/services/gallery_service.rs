//! Gallery coordination: transitions, view updates, and eager prefetch.
//!
//! The shared open/close handle every project card consumes. Locks the
//! controller, applies the transition, then pushes the snapshot and the
//! current image to the view.

use crate::image_cache::ImageCache;
use crate::state::gallery::{GalleryCommand, GalleryController, GallerySnapshot, OverlayKey};
use crate::state::ScrollLock;
use crate::ui::gallery_display;
use log::debug;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared handle for the gallery overlay.
#[derive(Clone)]
pub struct GalleryService {
    ui: slint::Weak<crate::AppWindow>,
    gallery: Arc<Mutex<GalleryController>>,
    cache: Arc<Mutex<ImageCache>>,
    scroll_lock: ScrollLock,
}

impl GalleryService {
    pub fn new(
        ui: slint::Weak<crate::AppWindow>,
        gallery: Arc<Mutex<GalleryController>>,
        cache: Arc<Mutex<ImageCache>>,
        scroll_lock: ScrollLock,
    ) -> Self {
        Self {
            ui,
            gallery,
            cache,
            scroll_lock,
        }
    }

    /// Opens the overlay with a project's capture set and kicks off a
    /// background decode of every image in it. Prefetch completion is never a
    /// precondition for navigation; the display path handles misses itself.
    pub fn open(&self, title: &str, images: Vec<PathBuf>, start_index: i64) {
        let snapshot = {
            let mut gallery = self.gallery.lock().unwrap();
            gallery.open(images, title, start_index)
        };
        self.push(&snapshot);

        let prefetch: Vec<PathBuf> = {
            let gallery = self.gallery.lock().unwrap();
            gallery.images().to_vec()
        };
        gallery_display::prefetch_set(self.cache.clone(), prefetch);

        self.display_current();
    }

    pub fn close(&self) {
        let snapshot = {
            let mut gallery = self.gallery.lock().unwrap();
            gallery.close()
        };
        self.push(&snapshot);
    }

    pub fn next(&self) {
        self.apply(GalleryCommand::Next);
    }

    pub fn prev(&self) {
        self.apply(GalleryCommand::Prev);
    }

    pub fn jump(&self, index: i64) {
        let snapshot = {
            let mut gallery = self.gallery.lock().unwrap();
            gallery.jump(index)
        };
        self.push(&snapshot);
        self.display_current();
    }

    /// Routes a raw key event. Returns whether the overlay consumed it; keys
    /// while closed fall through untouched.
    pub fn handle_key(&self, key_text: &str) -> bool {
        let Some(key) = OverlayKey::from_key_text(key_text) else {
            return false;
        };

        let command = {
            let gallery = self.gallery.lock().unwrap();
            gallery.route_key(key)
        };

        match command {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    fn apply(&self, command: GalleryCommand) {
        let snapshot = {
            let mut gallery = self.gallery.lock().unwrap();
            match command {
                GalleryCommand::Close => gallery.close(),
                GalleryCommand::Next => gallery.next(),
                GalleryCommand::Prev => gallery.prev(),
            }
        };
        self.push(&snapshot);

        if snapshot.open {
            self.display_current();
        }
    }

    fn display_current(&self) {
        gallery_display::display_current(self.ui.clone(), self.gallery.clone(), self.cache.clone());
    }

    fn push(&self, snapshot: &GallerySnapshot) {
        debug!(
            "Gallery view update: open={} index={}/{}",
            snapshot.open, snapshot.index, snapshot.len
        );
        if let Some(ui) = self.ui.upgrade() {
            crate::ui::set_gallery_info(&ui, snapshot, self.scroll_lock.is_locked());
        }
    }
}
