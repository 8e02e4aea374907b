//! Explicit observer binding for view state.
//!
//! A state-hook-and-refresh cycle expressed as a plain value cell: writers
//! go through [`Observed::set`] or [`Observed::update`], which notify every
//! subscribed callback synchronously on the writing thread. The application
//! subscribes its redraw flag here, so a state write and the re-render it
//! schedules are a single call stack.

use std::fmt;

type Subscriber<T> = Box<dyn Fn(&T) + Send>;

/// A value with subscribed change callbacks.
///
/// Subscribers run in subscription order, before `set`/`update` return.
/// There is no deferred delivery and no unsubscribe; subscriptions live as
/// long as the cell.
pub struct Observed<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Observed<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value, then notify subscribers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate the value in place, then notify subscribers.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.notify();
    }

    /// Register a change callback, invoked on every subsequent write.
    pub fn subscribe(&mut self, f: impl Fn(&T) + Send + 'static) {
        self.subscribers.push(Box::new(f));
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.value);
        }
    }
}

// Manual Debug impl: subscribers are opaque closures.
impl<T: fmt::Debug> fmt::Debug for Observed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observed")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
