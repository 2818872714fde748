//! Page scroll lock shared between the gallery overlay and the page view.

use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single-owner lock for page scrolling.
///
/// The gallery overlay acquires it while open; the page `Flickable` binds its
/// interactivity to `is_locked`. Release happens when the guard drops, so the
/// lock cannot stay stuck after an abnormal teardown.
#[derive(Clone, Default)]
pub struct ScrollLock {
    locked: Arc<AtomicBool>,
}

/// Guard returned by [`ScrollLock::acquire`]. Dropping it releases the lock.
pub struct ScrollLockGuard {
    locked: Arc<AtomicBool>,
}

impl ScrollLock {
    /// Creates a new, unlocked scroll lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock, or returns `None` if it is already held.
    ///
    /// A refused acquire is logged: the gallery must never try to double-lock.
    pub fn acquire(&self) -> Option<ScrollLockGuard> {
        if self
            .locked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Page scroll lock already held, refusing second acquire");
            return None;
        }

        Some(ScrollLockGuard {
            locked: self.locked.clone(),
        })
    }

    /// Returns whether the lock is currently held.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locked.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_release() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire().unwrap();
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn second_acquire_is_refused() {
        let lock = ScrollLock::new();
        let _guard = lock.acquire().unwrap();
        assert!(lock.acquire().is_none());
        assert!(lock.is_locked());
    }

    #[test]
    fn reacquire_after_release() {
        let lock = ScrollLock::new();
        drop(lock.acquire().unwrap());
        assert!(lock.acquire().is_some());
    }
}
