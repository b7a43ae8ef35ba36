use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::clock::snapshot::LocationInfo;

/// 24-hour clock digits for an instant as seen from `tz`.
pub fn clock_text(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

/// Location line under the clock. The city segment and its separator are
/// dropped entirely when no city is known.
pub fn location_line(location: &LocationInfo) -> String {
    match &location.city {
        Some(city) => format!("in {city}, {}", location.country),
        None => format!("in {}", location.country),
    }
}
