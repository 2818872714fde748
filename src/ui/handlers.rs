//! Event handlers for UI callbacks.
//!
//! Registers every Logic callback: navigation clicks, theme toggle, viewport
//! reports, section registration, gallery controls, overlay keys, and the
//! contact actions.

use crate::assets::ProjectGallery;
use crate::config::{COPY_FEEDBACK_MS, FORM_RESET_DELAY_MS};
use crate::services::{contact_service, ContactService, ScrollService};
use crate::settings::{Settings, Theme};
use crate::state::AppState;
use log::{debug, info, warn};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(
    ui: &crate::AppWindow,
    app_state: Rc<AppState>,
    galleries: Rc<Vec<ProjectGallery>>,
    settings: Rc<RefCell<Settings>>,
) {
    let scroll_service = Rc::new(ScrollService::new(
        ui.as_weak(),
        app_state.scroll_tween_timer.clone(),
    ));
    let contact_service = Rc::new(ContactService::new());
    let logic = ui.global::<crate::Logic>();

    // Sections report their page geometry as the layout settles.
    logic.on_section_geometry({
        let sections = app_state.sections.clone();
        move |id, top, height| {
            sections.lock().unwrap().register(id.as_str(), top, height);
        }
    });

    // Viewport reports drive reveal flags and the navbar highlight.
    logic.on_viewport_changed({
        let ui_handle = ui.as_weak();
        let sections = app_state.sections.clone();
        let scroll_service = scroll_service.clone();
        move |scroll_y, viewport_height| {
            scroll_service.note_viewport(scroll_y);

            let transitions = {
                let mut tracker = sections.lock().unwrap();
                tracker.update_viewport(scroll_y, viewport_height)
            };
            if transitions.is_empty() {
                return;
            }

            if let Some(ui) = ui_handle.upgrade() {
                let tracker = sections.lock().unwrap();
                crate::ui::set_section_flags(&ui, &tracker);
            }
        }
    });

    // Navbar items and CTA buttons scroll to their section. Unknown ids are
    // a silent no-op.
    logic.on_nav_clicked({
        let sections = app_state.sections.clone();
        let scroll_service = scroll_service.clone();
        move |id| {
            let target = sections.lock().unwrap().scroll_target(id.as_str());
            match target {
                Some(y) => scroll_service.scroll_to(y),
                None => debug!("Ignoring scroll to unknown section '{}'", id),
            }
        }
    });

    logic.on_toggle_theme({
        let ui_handle = ui.as_weak();
        let settings = settings.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let view_state = ui.global::<crate::ViewState>();
            let dark = !view_state.get_dark_theme();
            view_state.set_dark_theme(dark);

            let mut settings = settings.borrow_mut();
            settings.theme = if dark { Theme::Dark } else { Theme::Light };
            if let Err(e) = settings.save() {
                warn!("Failed to persist theme choice: {}", e);
            }
        }
    });

    // Project cards open the shared gallery overlay.
    logic.on_open_gallery({
        let app_state = app_state.clone();
        let galleries = galleries.clone();
        move |project_index, start_index| {
            let Some(gallery) = galleries.get(project_index as usize) else {
                warn!("Gallery requested for unknown project index {}", project_index);
                return;
            };
            app_state.gallery_handle().open(
                &gallery.title,
                gallery.images.clone(),
                start_index as i64,
            );
        }
    });

    logic.on_close_gallery({
        let app_state = app_state.clone();
        move || app_state.gallery_handle().close()
    });

    logic.on_gallery_next({
        let app_state = app_state.clone();
        move || app_state.gallery_handle().next()
    });

    logic.on_gallery_prev({
        let app_state = app_state.clone();
        move || app_state.gallery_handle().prev()
    });

    logic.on_gallery_jump({
        let app_state = app_state.clone();
        move |index| app_state.gallery_handle().jump(index as i64)
    });

    // The overlay's FocusScope forwards raw key text; the controller decides
    // whether the key means anything.
    logic.on_overlay_key({
        let app_state = app_state.clone();
        move |key_text| app_state.gallery_handle().handle_key(key_text.as_str())
    });

    logic.on_copy_email({
        let ui_handle = ui.as_weak();
        let contact_service = contact_service.clone();
        move || {
            let email = crate::content::contact::contact().email;
            if let Err(e) = contact_service.copy_email(email) {
                warn!("{}", e);
                return;
            }

            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::ViewState>().set_email_copied(true);
            }
            let ui_handle = ui_handle.clone();
            slint::Timer::single_shot(Duration::from_millis(COPY_FEEDBACK_MS), move || {
                if let Some(ui) = ui_handle.upgrade() {
                    ui.global::<crate::ViewState>().set_email_copied(false);
                }
            });
        }
    });

    logic.on_open_link({
        let contact_service = contact_service.clone();
        move |url| {
            if let Err(e) = contact_service.open_link(url.as_str()) {
                warn!("{}", e);
            }
        }
    });

    logic.on_submit_form({
        let ui_handle = ui.as_weak();
        move |name, email, message| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };

            if !contact_service::is_valid_email(email.as_str()) {
                crate::ui::set_form_result(&ui, false, "Please enter a valid email address.");
                return;
            }

            info!(
                "Contact form submitted by {} <{}> ({} chars)",
                name,
                email,
                message.len()
            );
            crate::ui::set_form_result(&ui, true, "");

            let ui_handle = ui_handle.clone();
            slint::Timer::single_shot(Duration::from_millis(FORM_RESET_DELAY_MS), move || {
                if let Some(ui) = ui_handle.upgrade() {
                    crate::ui::set_form_result(&ui, false, "");
                    ui.invoke_reset_contact_form();
                }
            });
        }
    });
}
