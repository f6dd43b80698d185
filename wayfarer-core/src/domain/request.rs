//! Travel request domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-submitted request to generate an itinerary
///
/// Dates arrive as strings on the wire ("2025-06-01" or a full RFC 3339
/// timestamp); they are parsed and validated at submission time, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelRequest {
    pub location: String,
    pub date_from: String,
    pub date_to: String,
    pub preferences: TravelPreferences,
}

/// Structured preference bag attached to a travel request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelPreferences {
    #[serde(default)]
    pub travel_style: String,
    #[serde(default)]
    pub food_preference: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub transport_mode: String,
    #[serde(default)]
    pub time_preference: String,
    #[serde(default)]
    pub activity_intensity: String,
    /// Interest tags; duplicates allowed, order irrelevant
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_preferences: Option<String>,
}

/// Parse a trip boundary date
///
/// Accepts a plain ISO date ("2025-06-01") or a full RFC 3339 timestamp,
/// in which case the date component is taken.
pub fn parse_trip_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Number of days a trip spans, inclusive of both boundary dates
///
/// A single-day trip (from == to) spans one day. Returns `None` when the
/// range is inverted.
pub fn trip_day_count(date_from: NaiveDate, date_to: NaiveDate) -> Option<i64> {
    let days = (date_to - date_from).num_days();
    if days < 0 { None } else { Some(days + 1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_trip_date("2025-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        let date = parse_trip_date("2025-06-01T14:30:00+02:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(parse_trip_date("next tuesday").is_none());
        assert!(parse_trip_date("").is_none());
    }

    #[test]
    fn test_trip_day_count() {
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(trip_day_count(from, to), Some(2));
        assert_eq!(trip_day_count(from, from), Some(1));
        assert_eq!(trip_day_count(to, from), None);
    }

    #[test]
    fn test_preferences_deserialize_with_missing_fields() {
        let prefs: TravelPreferences = serde_json::from_str(r#"{"interests": ["food"]}"#).unwrap();
        assert_eq!(prefs.interests, vec!["food".to_string()]);
        assert!(prefs.custom_preferences.is_none());
    }
}
