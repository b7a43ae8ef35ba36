use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;

use crate::clock::snapshot::{LocationInfo, Quote, TimeSnapshot};

pub mod error;

pub use error::ApiError;

const DEFAULT_TIME_URL: &str = "https://worldtimeapi.org/api/ip";
const DEFAULT_LOCATION_URL: &str = "https://ipapi.co/json";
const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin wrapper over the three public lookup services. One shared client,
/// one best-effort attempt per call, no retries.
pub struct ApiService {
    client: Client,
    time_url: String,
    location_url: String,
    quote_url: String,
}

#[derive(Debug, Deserialize)]
struct TimePayload {
    utc_datetime: DateTime<Utc>,
    timezone: String,
    abbreviation: String,
    day_of_week: u8,
    day_of_year: u16,
    week_number: u8,
}

#[derive(Debug, Deserialize)]
struct LocationPayload {
    #[serde(default)]
    city: Option<String>,
    country_name: String,
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    content: String,
    author: String,
}

impl ApiService {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            time_url: env_or("DAYDASH_TIME_URL", DEFAULT_TIME_URL),
            location_url: env_or("DAYDASH_LOCATION_URL", DEFAULT_LOCATION_URL),
            quote_url: env_or("DAYDASH_QUOTE_URL", DEFAULT_QUOTE_URL),
        })
    }

    /// Current time for the caller's IP, including the calendar facts the
    /// details panel shows. The timezone identifier is validated here so a
    /// bad payload fails the bootstrap instead of poisoning every tick.
    pub async fn fetch_time(&self) -> Result<TimeSnapshot, ApiError> {
        let payload: TimePayload = self.get_json(&self.time_url).await?;
        snapshot_from(payload)
    }

    pub async fn fetch_location(&self) -> Result<LocationInfo, ApiError> {
        let payload: LocationPayload = self.get_json(&self.location_url).await?;
        Ok(location_from(payload))
    }

    pub async fn fetch_quote(&self) -> Result<Quote, ApiError> {
        let payload: QuotePayload = self.get_json(&self.quote_url).await?;
        Ok(Quote {
            content: payload.content,
            author: payload.author,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        Ok(res.json().await?)
    }
}

/// Fires all three lookups concurrently and resolves only when every one
/// of them has; the first failure fails the whole bootstrap.
pub async fn bootstrap(
    api: &ApiService,
) -> Result<(TimeSnapshot, LocationInfo, Quote), ApiError> {
    tokio::try_join!(api.fetch_time(), api.fetch_location(), api.fetch_quote())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn snapshot_from(payload: TimePayload) -> Result<TimeSnapshot, ApiError> {
    let timezone: Tz = payload
        .timezone
        .parse()
        .map_err(|_| ApiError::UnknownTimezone(payload.timezone.clone()))?;
    Ok(TimeSnapshot {
        instant_utc: payload.utc_datetime,
        timezone,
        abbreviation: payload.abbreviation,
        day_of_week: weekday_name(payload.day_of_week).to_owned(),
        day_of_year: payload.day_of_year,
        week_number: payload.week_number,
    })
}

fn location_from(payload: LocationPayload) -> LocationInfo {
    LocationInfo {
        city: payload.city.filter(|c| !c.is_empty()),
        country: payload.country_name,
    }
}

// The time service counts days with Sunday as 0.
fn weekday_name(day: u8) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_payload_converts_to_a_snapshot() {
        let payload: TimePayload = serde_json::from_str(
            r#"{
                "utc_datetime": "2024-05-05T13:47:01.123456+00:00",
                "timezone": "Europe/Berlin",
                "abbreviation": "CEST",
                "day_of_week": 0,
                "day_of_year": 126,
                "week_number": 18,
                "unixtime": 1714916821
            }"#,
        )
        .unwrap();

        let snapshot = snapshot_from(payload).unwrap();
        assert_eq!(snapshot.timezone, chrono_tz::Europe::Berlin);
        assert_eq!(snapshot.abbreviation, "CEST");
        assert_eq!(snapshot.day_of_week, "Sunday");
        assert_eq!(snapshot.day_of_year, 126);
        assert_eq!(snapshot.week_number, 18);
        assert_eq!(
            snapshot.instant_utc,
            Utc.with_ymd_and_hms(2024, 5, 5, 13, 47, 1).unwrap()
                + chrono::Duration::microseconds(123456)
        );
    }

    #[test]
    fn unknown_timezone_fails_the_conversion() {
        let payload: TimePayload = serde_json::from_str(
            r#"{
                "utc_datetime": "2024-05-05T13:47:01+00:00",
                "timezone": "Mars/Olympus_Mons",
                "abbreviation": "MMT",
                "day_of_week": 0,
                "day_of_year": 126,
                "week_number": 18
            }"#,
        )
        .unwrap();

        assert!(matches!(
            snapshot_from(payload),
            Err(ApiError::UnknownTimezone(tz)) if tz == "Mars/Olympus_Mons"
        ));
    }

    #[test]
    fn location_payload_treats_missing_and_empty_city_alike() {
        let payload: LocationPayload =
            serde_json::from_str(r#"{"country_name": "Iceland"}"#).unwrap();
        assert_eq!(location_from(payload).city, None);

        let payload: LocationPayload =
            serde_json::from_str(r#"{"city": "", "country_name": "Iceland"}"#).unwrap();
        assert_eq!(location_from(payload).city, None);

        let payload: LocationPayload =
            serde_json::from_str(r#"{"city": "Berlin", "country_name": "Germany"}"#).unwrap();
        assert_eq!(location_from(payload).city.as_deref(), Some("Berlin"));
    }

    #[test]
    fn quote_payload_ignores_extra_fields() {
        let payload: QuotePayload = serde_json::from_str(
            r#"{"_id": "abc", "content": "Stay hungry.", "author": "S. Jobs", "tags": []}"#,
        )
        .unwrap();
        assert_eq!(payload.content, "Stay hungry.");
        assert_eq!(payload.author, "S. Jobs");
    }
}
