use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Clock/phase refresh cadence. Sub-minute only so the displayed
    /// minute updates promptly.
    pub tick_ms: u64,
    /// Fade-out (and fade-in) window of the greeting transition.
    pub greeting_fade_ms: u64,
    /// One full spinner animation iteration; quote swaps align to it.
    pub spinner_cycle_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: 500,
            greeting_fade_ms: 400,
            spinner_cycle_ms: 1000,
        }
    }
}

impl AppConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn greeting_fade(&self) -> Duration {
        Duration::from_millis(self.greeting_fade_ms)
    }

    pub fn spinner_cycle(&self) -> Duration {
        Duration::from_millis(self.spinner_cycle_ms)
    }
}
