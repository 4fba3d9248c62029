//! Cancellable one-shot timers owned by a view.
//!
//! Dropping a `gloo_timers` timeout clears it, so cancelling is just clearing
//! the set. Pages keep their `TimerSet` in a local `StoredValue` and clear it
//! from `on_cleanup`, which guarantees no callback runs after teardown.

#[derive(Default)]
pub struct TimerSet {
    #[cfg(feature = "hydrate")]
    pending: Vec<gloo_timers::callback::Timeout>,
}

impl TimerSet {
    /// Run `callback` once after `delay_ms`.
    #[cfg(feature = "hydrate")]
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.pending.push(gloo_timers::callback::Timeout::new(delay_ms, callback));
    }

    /// Server rendering never advances time.
    #[cfg(not(feature = "hydrate"))]
    pub fn schedule(&mut self, _delay_ms: u32, _callback: impl FnOnce() + 'static) {}

    /// Cancel everything still pending.
    pub fn cancel_all(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if !self.pending.is_empty() {
                log::debug!("timers: cancelling {} handle(s)", self.pending.len());
            }
            self.pending.clear();
        }
    }
}
