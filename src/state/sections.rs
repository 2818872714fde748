//! Section visibility tracking for reveal animations and the navbar highlight.

use crate::config::{HOME_SECTION, NAVBAR_HEIGHT, REVEAL_VISIBLE_FRACTION};
use log::debug;
use std::collections::HashMap;

/// A visibility change produced by a viewport update.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTransition {
    pub id: String,
    pub visible: bool,
}

/// Geometry of a registered section within the page, in logical pixels.
struct Section {
    id: String,
    top: f32,
    height: f32,
}

/// Tracks which page sections are inside the viewport.
///
/// Sections register explicitly with their page geometry; there is no document
/// traversal. Registration order is the processing order for viewport updates,
/// which makes the "last entering section wins" rule for `active_section`
/// deterministic.
pub struct SectionTracker {
    /// Registered sections in registration order.
    sections: Vec<Section>,
    /// Per-section visible flag. Keys appear lazily and survive deregistration.
    visibility: HashMap<String, bool>,
    /// Section whose nav item is highlighted. Only entering transitions move it.
    active: String,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            visibility: HashMap::new(),
            active: HOME_SECTION.to_string(),
        }
    }

    /// Registers a section, or updates its geometry in place if the id is
    /// already known. Re-registration keeps the original order.
    pub fn register(&mut self, id: &str, top: f32, height: f32) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.top = top;
            section.height = height;
            return;
        }

        debug!("Registering section '{}' at top={} height={}", id, top, height);
        self.sections.push(Section {
            id: id.to_string(),
            top,
            height,
        });
    }

    /// Removes a section from observation. Its visibility flag is kept as
    /// stale data; nothing renders it once the section is gone.
    pub fn deregister(&mut self, id: &str) {
        self.sections.retain(|s| s.id != id);
    }

    /// Applies a new viewport position and returns the visibility transitions.
    ///
    /// A section counts as visible once at least [`REVEAL_VISIBLE_FRACTION`]
    /// of its height is inside the viewport. Both entering and leaving
    /// transitions update the flag, so reveal animations replay when the user
    /// scrolls back past a section. Every entering transition overwrites the
    /// active section; with several entries in one batch, the last one in
    /// registration order wins.
    pub fn update_viewport(&mut self, scroll_y: f32, viewport_height: f32) -> Vec<SectionTransition> {
        let mut transitions = Vec::new();

        for section in &self.sections {
            let visible = is_visible(section, scroll_y, viewport_height);
            let previous = self
                .visibility
                .insert(section.id.clone(), visible)
                .unwrap_or(false);

            if visible == previous {
                continue;
            }

            transitions.push(SectionTransition {
                id: section.id.clone(),
                visible,
            });

            if visible {
                self.active = section.id.clone();
            }
        }

        transitions
    }

    /// Returns the visible flag for a section; `false` for ids never observed.
    pub fn visibility_of(&self, id: &str) -> bool {
        self.visibility.get(id).copied().unwrap_or(false)
    }

    /// Section whose navigation item should be highlighted.
    pub fn active_section(&self) -> &str {
        &self.active
    }

    /// Scroll offset that puts the section's top just below the navbar.
    ///
    /// Unknown ids return `None`; callers treat that as a silent no-op.
    pub fn scroll_target(&self, id: &str) -> Option<f32> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| (s.top - NAVBAR_HEIGHT).max(0.0))
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn is_visible(section: &Section, scroll_y: f32, viewport_height: f32) -> bool {
    if section.height <= 0.0 {
        return false;
    }

    let viewport_bottom = scroll_y + viewport_height;
    let section_bottom = section.top + section.height;
    let overlap = section_bottom.min(viewport_bottom) - section.top.max(scroll_y);

    overlap / section.height >= REVEAL_VISIBLE_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The four page sections stacked at 800px each.
    fn page_tracker() -> SectionTracker {
        let mut tracker = SectionTracker::new();
        tracker.register("home", 0.0, 800.0);
        tracker.register("about", 800.0, 800.0);
        tracker.register("projects", 1600.0, 800.0);
        tracker.register("contact", 2400.0, 800.0);
        tracker
    }

    #[test]
    fn starts_at_home() {
        let tracker = page_tracker();
        assert_eq!(tracker.active_section(), "home");
    }

    #[test]
    fn never_observed_sections_report_false() {
        let tracker = page_tracker();
        assert!(!tracker.visibility_of("about"));
        assert!(!tracker.visibility_of("no-such-section"));
    }

    #[test]
    fn entering_section_becomes_active() {
        let mut tracker = page_tracker();
        let transitions = tracker.update_viewport(850.0, 700.0);

        assert_eq!(tracker.active_section(), "about");
        assert!(tracker.visibility_of("about"));
        assert!(transitions.iter().any(|t| t.id == "about" && t.visible));
    }

    #[test]
    fn last_entering_section_in_batch_wins() {
        let mut tracker = page_tracker();

        // Viewport straddles the about/projects boundary so both enter in the
        // same batch; "projects" is registered later, so it wins.
        tracker.update_viewport(1200.0, 800.0);

        assert!(tracker.visibility_of("about"));
        assert!(tracker.visibility_of("projects"));
        assert_eq!(tracker.active_section(), "projects");
    }

    #[test]
    fn leaving_resets_flag_and_entering_moves_active() {
        let mut tracker = page_tracker();
        tracker.update_viewport(1700.0, 700.0);
        assert_eq!(tracker.active_section(), "projects");

        // Scroll somewhere that shows only "home" again; "projects" leaves.
        let transitions = tracker.update_viewport(0.0, 700.0);
        assert!(!tracker.visibility_of("projects"));
        assert!(transitions.iter().any(|t| t.id == "projects" && !t.visible));
        assert_eq!(tracker.active_section(), "home");
    }

    #[test]
    fn reveal_replays_after_scrolling_back() {
        let mut tracker = page_tracker();
        tracker.update_viewport(850.0, 700.0);
        tracker.update_viewport(0.0, 700.0);
        let transitions = tracker.update_viewport(850.0, 700.0);

        assert!(transitions.iter().any(|t| t.id == "about" && t.visible));
    }

    #[test]
    fn no_transition_without_change() {
        let mut tracker = page_tracker();
        tracker.update_viewport(0.0, 700.0);
        let transitions = tracker.update_viewport(10.0, 700.0);
        assert!(transitions.is_empty());
    }

    #[test]
    fn scroll_target_offsets_by_navbar() {
        let tracker = page_tracker();
        assert_eq!(tracker.scroll_target("about"), Some(800.0 - NAVBAR_HEIGHT));
        // Home would land above the page start; clamp to the top.
        assert_eq!(tracker.scroll_target("home"), Some(0.0));
    }

    #[test]
    fn scroll_target_unknown_id_is_none() {
        let tracker = page_tracker();
        assert_eq!(tracker.scroll_target("blog"), None);
    }

    #[test]
    fn reregister_updates_geometry_in_place() {
        let mut tracker = page_tracker();
        tracker.register("about", 900.0, 850.0);
        assert_eq!(tracker.scroll_target("about"), Some(900.0 - NAVBAR_HEIGHT));

        // Order is unchanged: projects still beats about in a shared batch.
        tracker.update_viewport(1300.0, 800.0);
        assert_eq!(tracker.active_section(), "projects");
    }

    #[test]
    fn deregistered_section_is_ignored_but_flag_survives() {
        let mut tracker = page_tracker();
        tracker.update_viewport(850.0, 700.0);
        assert!(tracker.visibility_of("about"));

        tracker.deregister("about");
        let transitions = tracker.update_viewport(0.0, 700.0);
        assert!(transitions.iter().all(|t| t.id != "about"));
        // Stale flag remains; nothing renders it.
        assert!(tracker.visibility_of("about"));
        assert_eq!(tracker.scroll_target("about"), None);
    }
}
