//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - Slint callbacks run on the UI thread and apply state transitions directly.
//! - `rayon::spawn` handles CPU-heavy image decodes off-thread.
//! - `slint::invoke_from_event_loop` hands decode results back to the UI thread.

pub mod gallery_display;
pub mod handlers;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
