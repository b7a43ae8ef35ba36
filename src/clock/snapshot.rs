use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Time data captured once at bootstrap. The timezone recorded here is
/// authoritative for every later phase computation; it is never re-fetched
/// during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSnapshot {
    pub instant_utc: DateTime<Utc>,
    pub timezone: Tz,
    pub abbreviation: String,
    pub day_of_week: String,
    pub day_of_year: u16,
    pub week_number: u8,
}

impl TimeSnapshot {
    pub fn detail_fields(&self) -> DetailFields {
        DetailFields {
            timezone: self.timezone.name().to_owned(),
            day_of_year: self.day_of_year,
            day_of_week: self.day_of_week.clone(),
            week_number: self.week_number,
        }
    }
}

/// Calendar facts shown in the details panel. Computed once at bootstrap,
/// not on tick.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailFields {
    pub timezone: String,
    pub day_of_year: u16,
    pub day_of_week: String,
    pub week_number: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    pub city: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub content: String,
    pub author: String,
}
