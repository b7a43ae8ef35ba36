use std::time::{Duration, Instant};

use crate::clock::phase::DayPhase;
use crate::clock::snapshot::Quote;

/// Two-phase greeting swap: dim the old greeting, and only once the
/// fade-out window has elapsed commit the new text and undim. Driven by
/// tick timestamps so a delayed tick simply completes the pending phase.
#[derive(Debug)]
pub struct GreetingFade {
    state: FadeState,
    fade: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeState {
    Idle,
    FadingOut { until: Instant, pending: DayPhase },
    FadingIn { until: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStep {
    /// Fade-out finished: commit the new greeting now.
    Swap(DayPhase),
    /// Fade-in finished: transition over.
    Settled,
}

impl GreetingFade {
    pub fn new(fade: Duration) -> Self {
        Self {
            state: FadeState::Idle,
            fade,
        }
    }

    /// Starts (or retargets) a transition towards `phase`. A phase change
    /// landing mid-fade-out keeps the running window and only replaces the
    /// pending value.
    pub fn begin(&mut self, phase: DayPhase, now: Instant) {
        self.state = match self.state {
            FadeState::FadingOut { until, .. } => FadeState::FadingOut {
                until,
                pending: phase,
            },
            _ => FadeState::FadingOut {
                until: now + self.fade,
                pending: phase,
            },
        };
    }

    pub fn tick(&mut self, now: Instant) -> Option<FadeStep> {
        match self.state {
            FadeState::FadingOut { until, pending } if now >= until => {
                self.state = FadeState::FadingIn {
                    until: now + self.fade,
                };
                Some(FadeStep::Swap(pending))
            }
            FadeState::FadingIn { until } if now >= until => {
                self.state = FadeState::Idle;
                Some(FadeStep::Settled)
            }
            _ => None,
        }
    }

    pub fn is_dimmed(&self) -> bool {
        matches!(self.state, FadeState::FadingOut { .. })
    }

    pub fn is_idle(&self) -> bool {
        self.state == FadeState::Idle
    }
}

/// Quote refresh coordinator. The fetched quote is held back until the
/// spinner's running animation cycle completes, so the spinner never looks
/// cut off mid-iteration; only then is the value committed. A new request
/// is refused while one is anywhere in flight.
#[derive(Debug)]
pub struct QuoteRefresh {
    state: RefreshState,
    cycle: Duration,
}

#[derive(Debug, Clone, PartialEq)]
enum RefreshState {
    Idle,
    InFlight { started: Instant },
    Settling { quote: Quote, commit_at: Instant },
}

impl QuoteRefresh {
    pub fn new(cycle: Duration) -> Self {
        Self {
            state: RefreshState::Idle,
            cycle,
        }
    }

    /// Returns true when the refresh was accepted; false while a previous
    /// one is still in flight or settling.
    pub fn request(&mut self, now: Instant) -> bool {
        if self.state == RefreshState::Idle {
            self.state = RefreshState::InFlight { started: now };
            true
        } else {
            false
        }
    }

    /// Fetch succeeded: schedule the commit for the next whole spinner
    /// cycle boundary, measured from when the refresh started.
    pub fn resolve(&mut self, quote: Quote, now: Instant) {
        if let RefreshState::InFlight { started } = self.state {
            let commit_at = next_cycle_boundary(started, now, self.cycle);
            self.state = RefreshState::Settling { quote, commit_at };
        }
    }

    /// Fetch failed: drop back to idle, leaving the previous quote as-is.
    pub fn fail(&mut self) {
        if matches!(self.state, RefreshState::InFlight { .. }) {
            self.state = RefreshState::Idle;
        }
    }

    /// Returns the quote to commit once its cycle boundary has passed.
    pub fn tick(&mut self, now: Instant) -> Option<Quote> {
        let due = matches!(&self.state, RefreshState::Settling { commit_at, .. } if now >= *commit_at);
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.state, RefreshState::Idle) {
            RefreshState::Settling { quote, .. } => Some(quote),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state != RefreshState::Idle
    }
}

fn next_cycle_boundary(started: Instant, now: Instant, cycle: Duration) -> Instant {
    if cycle.is_zero() {
        return now;
    }
    let elapsed = now.duration_since(started);
    let cycles = elapsed.as_millis() / cycle.as_millis() + 1;
    started + cycle * cycles as u32
}
