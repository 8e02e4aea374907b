//! Core state for tally - the counter application without TUI dependencies.
//!
//! This crate owns the counter value and the observer binding that connects
//! state writes to re-renders. Rendering and input live in `tally-tui`; the
//! binary wires both together.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

mod config;
mod counter;
mod observe;
mod view_state;

pub use config::{AppConfig, ConfigError, TallyConfig};
pub use counter::Counter;
pub use observe::Observed;
pub use view_state::{ButtonArea, UiOptions, ViewState};

/// Top-level application state.
///
/// The counter lives in an [`Observed`] cell with the redraw flag subscribed
/// to it, so every write schedules exactly one re-render before the write
/// returns. All mutation happens on the UI task; the flag is atomic only so
/// subscribers stay `Send`.
pub struct App {
    counter: Observed<Counter>,
    view: ViewState,
    redraw: Arc<AtomicBool>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(options: UiOptions) -> Self {
        // True from the start: mounting schedules the first frame.
        let redraw = Arc::new(AtomicBool::new(true));
        let mut counter = Observed::new(Counter::new(0));
        let flag = Arc::clone(&redraw);
        counter.subscribe(move |_| flag.store(true, Ordering::Release));

        Self {
            counter,
            view: ViewState::new(options),
            redraw,
            should_quit: false,
        }
    }

    /// Handle a user activation event: increment the counter by exactly one.
    ///
    /// The write goes through the observed cell, so the subscribed redraw
    /// flag is set before this returns. The operation is total.
    pub fn activate(&mut self) {
        self.counter.update(Counter::increment);
        tracing::debug!(count = self.count(), "counter activated");
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.counter.get().value
    }

    /// Consume the pending re-render request, if any.
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::AcqRel)
    }

    /// Request a re-render without changing state (resize, first frame).
    pub fn schedule_redraw(&self) {
        self.redraw.store(true, Ordering::Release);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{App, UiOptions};

    #[test]
    fn starts_at_zero_with_first_frame_scheduled() {
        let app = App::new(UiOptions::default());
        assert_eq!(app.count(), 0);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn activation_increments_and_schedules_one_redraw() {
        let mut app = App::new(UiOptions::default());
        app.take_redraw();

        app.activate();
        assert_eq!(app.count(), 1);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn repeated_activations_are_monotonic_by_one() {
        let mut app = App::new(UiOptions::default());
        for expected in 1..=10 {
            let before = app.count();
            app.activate();
            assert_eq!(app.count(), before + 1);
            assert_eq!(app.count(), expected);
        }
    }

    #[test]
    fn quit_is_sticky() {
        let mut app = App::new(UiOptions::default());
        assert!(!app.should_quit());
        app.quit();
        assert!(app.should_quit());
    }
}
