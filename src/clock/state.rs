use crate::clock::phase::{self, DayPhase};
use crate::clock::snapshot::{LocationInfo, Quote, TimeSnapshot};

/// Which of the two lower panels is visible. Showing one hides the other;
/// this is a single two-state mode, not independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelMode {
    #[default]
    Quote,
    Details,
}

impl PanelMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Quote => Self::Details,
            Self::Details => Self::Quote,
        }
    }

    pub const fn details_visible(self) -> bool {
        matches!(self, Self::Details)
    }

    /// Label on the toggle control, naming the action it would perform.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Quote => "More",
            Self::Details => "Less",
        }
    }
}

/// The single mutable source of truth for the dashboard. Owned by the app
/// event loop; each field is written only by its designated operation
/// (tick for `phase`, refresh commit for `quote`, toggle for `panel`).
#[derive(Debug, Clone)]
pub struct DashState {
    pub time: TimeSnapshot,
    pub location: LocationInfo,
    pub quote: Quote,
    pub phase: DayPhase,
    pub panel: PanelMode,
}

impl DashState {
    pub fn new(time: TimeSnapshot, location: LocationInfo, quote: Quote) -> Self {
        let phase = phase::classify(time.instant_utc, time.timezone);
        Self {
            time,
            location,
            quote,
            phase,
            panel: PanelMode::default(),
        }
    }
}

/// App lifecycle around the dashboard: loading screen until bootstrap
/// settles, then either the live dashboard or a static error notice.
#[derive(Debug, Clone)]
pub enum Session {
    Loading,
    Ready(DashState),
    Failed(String),
}
