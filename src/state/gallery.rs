//! Gallery overlay state machine.
//!
//! Owns the open/closed state, the carousel index, and the page scroll lock.
//! The lock is held as an RAII guard tied to the open state, so every exit
//! path, including dropping the whole controller, releases it.

use crate::state::scroll_lock::{ScrollLock, ScrollLockGuard};
use log::debug;
use std::path::PathBuf;

/// Key presses the overlay understands while open.
///
/// The codepoints are the ones Slint delivers in `KeyEvent.text` (the macOS
/// function-key private-use area for the arrows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Escape,
    Next,
    Prev,
}

impl OverlayKey {
    pub fn from_key_text(text: &str) -> Option<Self> {
        match text.chars().next()? {
            '\u{001b}' => Some(Self::Escape),
            '\u{f703}' => Some(Self::Next),
            '\u{f702}' => Some(Self::Prev),
            _ => None,
        }
    }
}

/// Transition a routed key press asks for. Applied through the same
/// `close`/`next`/`prev` entry points as the on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    Close,
    Next,
    Prev,
}

/// Read-only view of the gallery pushed to the UI after each transition.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySnapshot {
    pub open: bool,
    pub title: String,
    pub index: usize,
    pub len: usize,
    /// Increments on every `open`; image decodes are tagged with it so results
    /// from a previous session are dropped on arrival.
    pub generation: u64,
    pub current: Option<PathBuf>,
}

/// The gallery overlay controller. One instance per application, shared by
/// dependency injection; tests construct their own with a private lock.
pub struct GalleryController {
    open: bool,
    images: Vec<PathBuf>,
    title: String,
    current_index: usize,
    generation: u64,
    scroll_lock: ScrollLock,
    lock_guard: Option<ScrollLockGuard>,
}

impl GalleryController {
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            open: false,
            images: Vec::new(),
            title: String::new(),
            current_index: 0,
            generation: 0,
            scroll_lock,
            lock_guard: None,
        }
    }

    /// Opens the overlay with a new image set, replacing any previous state.
    ///
    /// `start_index` is wrapped into range with `rem_euclid`, so negative and
    /// past-the-end values land on a lawful index instead of failing. Opening
    /// while already open swaps the content without touching the scroll lock.
    pub fn open(&mut self, images: Vec<PathBuf>, title: &str, start_index: i64) -> GallerySnapshot {
        self.current_index = if images.is_empty() {
            0
        } else {
            start_index.rem_euclid(images.len() as i64) as usize
        };
        self.images = images;
        self.title = title.to_string();
        self.open = true;
        self.generation += 1;

        if self.lock_guard.is_none() {
            self.lock_guard = self.scroll_lock.acquire();
        }

        debug!(
            "Gallery opened: '{}' ({} images, index {})",
            self.title,
            self.images.len(),
            self.current_index
        );
        self.snapshot()
    }

    /// Closes the overlay. The image set and index stay behind so the close
    /// transition does not flash empty content. Idempotent.
    pub fn close(&mut self) -> GallerySnapshot {
        self.open = false;
        self.lock_guard = None;
        self.snapshot()
    }

    /// Advances to the next image, wrapping at the end. No-op while closed or
    /// with an empty set.
    pub fn next(&mut self) -> GallerySnapshot {
        self.step(1)
    }

    /// Steps back to the previous image, wrapping at the start.
    pub fn prev(&mut self) -> GallerySnapshot {
        self.step(-1)
    }

    /// Jumps straight to an index (pagination dots). Wrapped like `open`.
    pub fn jump(&mut self, index: i64) -> GallerySnapshot {
        if self.open && !self.images.is_empty() {
            self.current_index = index.rem_euclid(self.images.len() as i64) as usize;
        }
        self.snapshot()
    }

    fn step(&mut self, delta: i64) -> GallerySnapshot {
        if self.open && !self.images.is_empty() {
            let len = self.images.len() as i64;
            self.current_index = (self.current_index as i64 + delta).rem_euclid(len) as usize;
        }
        self.snapshot()
    }

    /// Routes a key press. Only open overlays consume keys; while closed
    /// every key falls through untouched.
    pub fn route_key(&self, key: OverlayKey) -> Option<GalleryCommand> {
        if !self.open {
            return None;
        }

        Some(match key {
            OverlayKey::Escape => GalleryCommand::Close,
            OverlayKey::Next => GalleryCommand::Next,
            OverlayKey::Prev => GalleryCommand::Prev,
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn snapshot(&self) -> GallerySnapshot {
        GallerySnapshot {
            open: self.open,
            title: self.title.clone(),
            index: self.current_index,
            len: self.images.len(),
            generation: self.generation,
            current: self.images.get(self.current_index).cloned(),
        }
    }

    /// The full image set, for eager prefetching on open.
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn controller() -> (GalleryController, ScrollLock) {
        let lock = ScrollLock::new();
        (GalleryController::new(lock.clone()), lock)
    }

    #[test]
    fn open_wraps_out_of_range_start_index() {
        let (mut gallery, _lock) = controller();
        let snap = gallery.open(paths(&["a.png", "b.png", "c.png"]), "Demo", 5);
        assert_eq!(snap.index, 2);
        assert_eq!(snap.current, Some(PathBuf::from("c.png")));
    }

    #[test]
    fn open_wraps_negative_start_index() {
        let (mut gallery, _lock) = controller();
        let snap = gallery.open(paths(&["a.png", "b.png", "c.png"]), "Demo", -1);
        assert_eq!(snap.index, 2);
    }

    #[test]
    fn next_and_prev_wrap_both_ends() {
        let (mut gallery, _lock) = controller();
        gallery.open(paths(&["a.png", "b.png", "c.png"]), "Demo", 0);

        assert_eq!(gallery.prev().index, 2);
        assert_eq!(gallery.next().index, 0);
        assert_eq!(gallery.next().index, 1);
    }

    #[test]
    fn single_image_navigation_stays_put() {
        let (mut gallery, _lock) = controller();
        gallery.open(paths(&["only.png"]), "One", 0);

        assert_eq!(gallery.next().index, 0);
        assert_eq!(gallery.prev().index, 0);
    }

    #[test]
    fn empty_set_is_accepted_and_inert() {
        let (mut gallery, lock) = controller();
        let snap = gallery.open(Vec::new(), "Empty", 3);

        assert!(snap.open);
        assert_eq!(snap.len, 0);
        assert_eq!(snap.current, None);
        assert!(lock.is_locked());

        assert_eq!(gallery.next().index, 0);
        assert_eq!(gallery.jump(7).index, 0);
    }

    #[test]
    fn close_keeps_content_for_the_transition() {
        let (mut gallery, _lock) = controller();
        gallery.open(paths(&["a.png", "b.png"]), "Demo", 1);
        let snap = gallery.close();

        assert!(!snap.open);
        assert_eq!(snap.title, "Demo");
        assert_eq!(snap.index, 1);
        assert_eq!(snap.len, 2);
    }

    #[test]
    fn double_close_does_not_panic() {
        let (mut gallery, lock) = controller();
        gallery.open(paths(&["a.png"]), "Demo", 0);
        gallery.close();
        let snap = gallery.close();

        assert!(!snap.open);
        assert!(!lock.is_locked());
    }

    #[test]
    fn open_acquires_lock_and_close_releases() {
        let (mut gallery, lock) = controller();
        assert!(!lock.is_locked());

        gallery.open(paths(&["a.png"]), "Demo", 0);
        assert!(lock.is_locked());

        gallery.close();
        assert!(!lock.is_locked());
    }

    #[test]
    fn open_while_open_does_not_double_lock() {
        let (mut gallery, lock) = controller();
        gallery.open(paths(&["a.png"]), "First", 0);
        let snap = gallery.open(paths(&["x.png", "y.png"]), "Second", 1);

        assert!(lock.is_locked());
        assert_eq!(snap.title, "Second");
        assert_eq!(snap.index, 1);

        gallery.close();
        assert!(!lock.is_locked());
    }

    #[test]
    fn dropping_open_controller_releases_lock() {
        let lock = ScrollLock::new();
        {
            let mut gallery = GalleryController::new(lock.clone());
            gallery.open(paths(&["a.png"]), "Demo", 0);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn generation_increments_per_open() {
        let (mut gallery, _lock) = controller();
        let first = gallery.open(paths(&["a.png"]), "A", 0).generation;
        gallery.close();
        let second = gallery.open(paths(&["b.png"]), "B", 0).generation;
        assert!(second > first);
    }

    #[test]
    fn keys_route_only_while_open() {
        let (mut gallery, _lock) = controller();
        assert_eq!(gallery.route_key(OverlayKey::Escape), None);

        gallery.open(paths(&["a.png", "b.png"]), "Demo", 0);
        assert_eq!(
            gallery.route_key(OverlayKey::Escape),
            Some(GalleryCommand::Close)
        );
        assert_eq!(
            gallery.route_key(OverlayKey::Next),
            Some(GalleryCommand::Next)
        );

        gallery.close();
        assert_eq!(gallery.route_key(OverlayKey::Next), None);
    }

    #[test]
    fn key_text_parsing() {
        assert_eq!(OverlayKey::from_key_text("\u{001b}"), Some(OverlayKey::Escape));
        assert_eq!(OverlayKey::from_key_text("\u{f703}"), Some(OverlayKey::Next));
        assert_eq!(OverlayKey::from_key_text("\u{f702}"), Some(OverlayKey::Prev));
        assert_eq!(OverlayKey::from_key_text("a"), None);
        assert_eq!(OverlayKey::from_key_text(""), None);
    }
}
