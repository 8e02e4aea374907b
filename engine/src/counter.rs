use tracing::instrument;

/// The single integer state value displayed and incremented by the view.
///
/// Lives in memory for the lifetime of the running view. Only values
/// reachable by repeated +1 increments from the initial value exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub value: u64,
}

impl Counter {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Add exactly one. No bounds, no saturation, no reset operation.
    #[instrument(name = "increment_counter", level = "debug")]
    pub fn increment(&mut self) {
        self.value += 1;
    }
}
