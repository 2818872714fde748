//! Helper functions to set multiple ViewState properties in a grouped manner.
//!
//! Instead of scattering individual setters across handlers and services,
//! these group the properties that always change together.

use crate::state::gallery::GallerySnapshot;
use crate::state::SectionTracker;
use log::error;
use slint::ComponentHandle;

/// Pushes a gallery snapshot and the scroll-lock state to the view.
///
/// Groups: gallery-open, gallery-title, gallery-index, gallery-count,
/// page-scroll-locked
pub fn set_gallery_info(ui: &crate::AppWindow, snapshot: &GallerySnapshot, locked: bool) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_gallery_open(snapshot.open);
    view_state.set_gallery_title(snapshot.title.as_str().into());
    view_state.set_gallery_index(snapshot.index as i32);
    view_state.set_gallery_count(snapshot.len as i32);
    view_state.set_page_scroll_locked(locked);
}

/// Shows a decoded image in the overlay and clears the loading/error state.
pub fn set_gallery_image(ui: &crate::AppWindow, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_gallery_image(image);
    view_state.set_gallery_loading(false);
    view_state.set_gallery_error("".into());
}

/// Marks the overlay as waiting for a decode.
pub fn set_gallery_loading(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_gallery_loading(true);
    view_state.set_gallery_error("".into());
}

/// Logs a decode failure and shows the overlay's error placeholder.
pub fn set_gallery_error(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_gallery_loading(false);
    view_state.set_gallery_error(error_message.into());
}

/// Pushes the tracker's visibility flags and active section to the view.
///
/// Groups: home-visible, about-visible, projects-visible, contact-visible,
/// active-section
pub fn set_section_flags(ui: &crate::AppWindow, tracker: &SectionTracker) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_home_visible(tracker.visibility_of("home"));
    view_state.set_about_visible(tracker.visibility_of("about"));
    view_state.set_projects_visible(tracker.visibility_of("projects"));
    view_state.set_contact_visible(tracker.visibility_of("contact"));
    view_state.set_active_section(tracker.active_section().into());
}

/// Sets the contact form's outcome.
///
/// Groups: form-sent, form-error
pub fn set_form_result(ui: &crate::AppWindow, sent: bool, error: &str) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_form_sent(sent);
    view_state.set_form_error(error.into());
}
