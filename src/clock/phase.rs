use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// Time-of-day bucket derived from the local hour in the viewer's timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Morning,
    Afternoon,
    Evening,
}

impl DayPhase {
    /// Maps a local hour (0-23) to its phase:
    /// [5,12) morning, [12,18) afternoon, [18,24) and [0,5) evening.
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }

    pub const fn greeting(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
        }
    }

    pub const fn is_night(self) -> bool {
        matches!(self, Self::Evening)
    }
}

/// Computes the phase for a UTC instant as seen from `tz`. Pure and total;
/// called on every tick, never cached across ticks.
pub fn classify(instant: DateTime<Utc>, tz: Tz) -> DayPhase {
    DayPhase::from_hour(instant.with_timezone(&tz).hour())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn hour_boundaries() {
        assert_eq!(DayPhase::from_hour(4), DayPhase::Evening);
        assert_eq!(DayPhase::from_hour(5), DayPhase::Morning);
        assert_eq!(DayPhase::from_hour(11), DayPhase::Morning);
        assert_eq!(DayPhase::from_hour(12), DayPhase::Afternoon);
        assert_eq!(DayPhase::from_hour(17), DayPhase::Afternoon);
        assert_eq!(DayPhase::from_hour(18), DayPhase::Evening);
        assert_eq!(DayPhase::from_hour(23), DayPhase::Evening);
        assert_eq!(DayPhase::from_hour(0), DayPhase::Evening);
    }

    #[test]
    fn mapping_is_total() {
        for hour in 0..24 {
            let phase = DayPhase::from_hour(hour);
            let expected = if (5..12).contains(&hour) {
                DayPhase::Morning
            } else if (12..18).contains(&hour) {
                DayPhase::Afternoon
            } else {
                DayPhase::Evening
            };
            assert_eq!(phase, expected, "hour {hour}");
        }
    }

    #[test]
    fn classify_uses_local_hour() {
        // 23:30 UTC is 08:30 the next day in Tokyo.
        let instant = Utc.with_ymd_and_hms(2024, 5, 4, 23, 30, 0).unwrap();
        assert_eq!(classify(instant, chrono_tz::Asia::Tokyo), DayPhase::Morning);
        assert_eq!(classify(instant, chrono_tz::Tz::UTC), DayPhase::Evening);
    }

    #[test]
    fn classify_respects_dst_offset() {
        // Berlin is CEST (+02:00) on this date; 16:30 UTC is 18:30 local.
        let instant = Utc.with_ymd_and_hms(2024, 7, 1, 16, 30, 0).unwrap();
        assert_eq!(
            classify(instant, chrono_tz::Europe::Berlin),
            DayPhase::Evening
        );
        // Same wall-clock query in winter (+01:00) is still afternoon.
        let instant = Utc.with_ymd_and_hms(2024, 1, 8, 16, 30, 0).unwrap();
        assert_eq!(
            classify(instant, chrono_tz::Europe::Berlin),
            DayPhase::Afternoon
        );
    }
}
