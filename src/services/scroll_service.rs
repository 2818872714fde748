//! Timer-driven smooth scrolling of the page viewport.
//!
//! Runs a cubic ease-out tween on the UI event loop. A new request replaces
//! any running tween; a viewport report that does not match what the tween
//! last wrote means the user grabbed the page, which cancels the tween.

use crate::config::{SCROLL_TICK_MS, SCROLL_TWEEN_MS};
use log::debug;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Tolerance between a reported viewport position and the tween's last write
/// before the report counts as a user scroll.
const USER_SCROLL_TOLERANCE: f32 = 2.0;

pub struct ScrollService {
    ui: slint::Weak<crate::AppWindow>,
    timer_slot: Arc<Mutex<Option<slint::Timer>>>,
    /// Position the running tween wrote last; `None` while idle.
    expected: Arc<Mutex<Option<f32>>>,
    /// Last viewport position reported by the page.
    position: Arc<Mutex<f32>>,
}

impl ScrollService {
    pub fn new(
        ui: slint::Weak<crate::AppWindow>,
        timer_slot: Arc<Mutex<Option<slint::Timer>>>,
    ) -> Self {
        Self {
            ui,
            timer_slot,
            expected: Arc::new(Mutex::new(None)),
            position: Arc::new(Mutex::new(0.0)),
        }
    }

    /// Records a viewport report from the page. Cancels the tween when the
    /// position is not one the tween wrote.
    pub fn note_viewport(&self, scroll_y: f32) {
        *self.position.lock().unwrap() = scroll_y;

        let user_scrolled = {
            let expected = self.expected.lock().unwrap();
            matches!(*expected, Some(e) if (e - scroll_y).abs() > USER_SCROLL_TOLERANCE)
        };

        if user_scrolled {
            debug!("User scroll detected, cancelling tween");
            self.cancel();
        }
    }

    /// Starts a tween from the current position to `target`, replacing any
    /// running one.
    pub fn scroll_to(&self, target: f32) {
        let from = *self.position.lock().unwrap();
        if (target - from).abs() < 0.5 {
            return;
        }

        let ui = self.ui.clone();
        let timer_slot = self.timer_slot.clone();
        let expected = self.expected.clone();
        let position = self.position.clone();
        let started = Instant::now();
        let duration = Duration::from_millis(SCROLL_TWEEN_MS);

        let timer = slint::Timer::default();
        timer.start(
            slint::TimerMode::Repeated,
            Duration::from_millis(SCROLL_TICK_MS),
            move || {
                let t = (started.elapsed().as_secs_f32() / duration.as_secs_f32()).min(1.0);
                let y = interpolate(from, target, t);

                *expected.lock().unwrap() = Some(y);
                *position.lock().unwrap() = y;
                if let Some(ui) = ui.upgrade() {
                    ui.invoke_set_page_scroll(y);
                }

                if t >= 1.0 {
                    *expected.lock().unwrap() = None;
                    // Drop the repeating timer outside its own callback.
                    let timer_slot = timer_slot.clone();
                    slint::Timer::single_shot(Duration::ZERO, move || {
                        let _ = timer_slot.lock().unwrap().take();
                    });
                }
            },
        );

        *self.timer_slot.lock().unwrap() = Some(timer);
    }

    fn cancel(&self) {
        *self.expected.lock().unwrap() = None;
        let _ = self.timer_slot.lock().unwrap().take();
    }
}

/// Cubic ease-out: fast start, soft landing.
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Eased interpolation between two scroll positions.
pub fn interpolate(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * ease_out_cubic(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let value = ease_out_cubic(i as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn easing_clamps_out_of_range_time() {
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(1.5), 1.0);
    }

    #[test]
    fn interpolation_lands_exactly_on_target() {
        assert_eq!(interpolate(100.0, 700.0, 1.0), 700.0);
        assert_eq!(interpolate(100.0, 700.0, 0.0), 100.0);
    }

    #[test]
    fn interpolation_works_upward() {
        // Scrolling back toward the top: from > to.
        let mid = interpolate(700.0, 100.0, 0.5);
        assert!(mid < 700.0 && mid > 100.0);
    }
}
