//! Gallery image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding, then
//! `slint::invoke_from_event_loop` to update the UI from the background
//! thread. Every decode is tagged with the gallery's open generation and the
//! index it was requested for; results that arrive after the gallery moved on
//! are dropped silently.

use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::state::GalleryController;
use log::debug;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Displays the gallery's current image, cache-first.
///
/// Cache hit: the image is shown immediately. Miss: the overlay switches to
/// its loading state while a rayon worker decodes, and the result is applied
/// only if the gallery still shows the same (generation, index) slot.
pub fn display_current(
    ui: slint::Weak<crate::AppWindow>,
    gallery: Arc<Mutex<GalleryController>>,
    cache: Arc<Mutex<ImageCache>>,
) {
    let snapshot = gallery.lock().unwrap().snapshot();
    if !snapshot.open {
        return;
    }
    let Some(path) = snapshot.current.clone() else {
        return;
    };

    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));
    if let Some(cached_image) = cached {
        if let Some(ui) = ui.upgrade() {
            let image = image_loader::create_slint_image(
                cached_image.data,
                cached_image.width,
                cached_image.height,
            );
            crate::ui::set_gallery_image(&ui, image);
        }
        return;
    }

    if let Some(ui) = ui.upgrade() {
        crate::ui::set_gallery_loading(&ui);
    }

    let generation = snapshot.generation;
    let index = snapshot.index;
    rayon::spawn(move || {
        let result = image_loader::load_image_blocking(&path);

        let _ = slint::invoke_from_event_loop(move || {
            if let Ok((data, width, height)) = &result {
                if let Ok(mut cache) = cache.lock() {
                    cache.put(path.clone(), CachedImage::new(data.clone(), *width, *height));
                }
            }

            let current = gallery.lock().unwrap().snapshot();
            if !current.open || current.generation != generation || current.index != index {
                debug!("Dropping stale decode result for {}", path.display());
                return;
            }

            let Some(ui) = ui.upgrade() else {
                return;
            };

            match result {
                Ok((data, width, height)) => {
                    let image = image_loader::create_slint_image(data, width, height);
                    crate::ui::set_gallery_image(&ui, image);
                }
                Err(e) => {
                    crate::ui::set_gallery_error(&ui, "Failed to load capture", e.to_string());
                }
            }
        });
    });
}

/// Eagerly decodes a whole capture set into the cache.
///
/// Fired on gallery open so next/prev feel instantaneous. Failures are
/// ignored here; the display path reports them when the slot is actually
/// shown.
pub fn prefetch_set(cache: Arc<Mutex<ImageCache>>, images: Vec<PathBuf>) {
    for path in images {
        let already_cached = cache
            .lock()
            .ok()
            .map(|mut c| c.contains(&path))
            .unwrap_or(true);
        if already_cached {
            continue;
        }

        let cache = cache.clone();
        rayon::spawn(move || match image_loader::load_image_blocking(&path) {
            Ok((data, width, height)) => {
                if let Ok(mut cache) = cache.lock() {
                    cache.put(path, CachedImage::new(data, width, height));
                }
            }
            Err(e) => {
                debug!("Prefetch failed for {}: {}", path.display(), e);
            }
        });
    }
}
