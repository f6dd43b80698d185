//! Itinerary generator
//!
//! Produces a day-by-day sequence of typed stops from templated content
//! parameterized by the requested location and interest tags. Selection is
//! deterministic for a given request (seeded by hashing the inputs), so the
//! same submission always yields the same plan. A real recommendation source
//! can replace this module behind the same contract: non-empty ordered
//! sequence or an error.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use wayfarer_core::domain::itinerary::{Coordinates, ItineraryPoint, point_type};
use wayfarer_core::domain::request::{TravelRequest, trip_day_count};

/// Generation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    EmptyLocation,
    InvalidDateRange {
        date_from: NaiveDate,
        date_to: NaiveDate,
    },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::EmptyLocation => write!(f, "location must not be empty"),
            GenerateError::InvalidDateRange { date_from, date_to } => {
                write!(f, "trip end {} is before trip start {}", date_to, date_from)
            }
        }
    }
}

/// Attraction categories suggested by an interest tag
fn attraction_types_for(interest: &str) -> Option<&'static [&'static str]> {
    let types: &[&str] = match interest.to_lowercase().as_str() {
        "museums" => &["Museum", "Art Gallery", "Historical Site"],
        "nature" => &["Park", "Garden", "Nature Trail", "Beach"],
        "food" => &["Restaurant", "Café", "Food Market"],
        "shopping" => &["Mall", "Market", "Shopping District"],
        "history" => &["Historical Site", "Monument", "Ancient Ruins"],
        "art" => &["Art Gallery", "Museum", "Studio"],
        "adventure" => &["Adventure Park", "Outdoor Activity", "Sports Venue"],
        "nightlife" => &["Bar", "Club", "Entertainment Venue"],
        "relaxation" => &["Spa", "Beach", "Park", "Wellness Center"],
        "culture" => &["Theater", "Concert Hall", "Cultural Center"],
        _ => return None,
    };
    Some(types)
}

const GENERIC_ATTRACTIONS: &[&str] = &["Park", "Museum", "Local Landmark", "Historical Site", "Beach"];

/// Fixed coordinates for well-known cities; anything else falls back to a
/// hash-derived point so unrecognized locations still get stable geometry
fn coordinates_for_location(location: &str) -> Coordinates {
    const CITIES: &[(&str, f64, f64)] = &[
        ("paris", 48.8566, 2.3522),
        ("london", 51.5074, -0.1278),
        ("new york", 40.7128, -74.0060),
        ("tokyo", 35.6762, 139.6503),
        ("rome", 41.9028, 12.4964),
        ("barcelona", 41.3851, 2.1734),
        ("sydney", -33.8688, 151.2093),
        ("amsterdam", 52.3676, 4.9041),
        ("kyoto", 35.0116, 135.7681),
        ("san francisco", 37.7749, -122.4194),
        ("miami", 25.7617, -80.1918),
        ("berlin", 52.5200, 13.4050),
        ("prague", 50.0755, 14.4378),
        ("cairo", 30.0444, 31.2357),
        ("cape town", -33.9249, 18.4241),
        ("rio de janeiro", -22.9068, -43.1729),
        ("toronto", 43.6532, -79.3832),
        ("bangkok", 13.7563, 100.5018),
        ("dubai", 25.2048, 55.2708),
    ];

    let normalized = location.trim().to_lowercase();
    for (city, lat, lng) in CITIES {
        if normalized.contains(city) {
            return Coordinates { lat: *lat, lng: *lng };
        }
    }

    let seed = fnv1a(&normalized);
    Coordinates {
        lat: (seed % 140) as f64 - 70.0,
        lng: ((seed >> 16) % 360) as f64 - 180.0,
    }
}

/// FNV-1a; stable across runs, unlike `DefaultHasher`
fn fnv1a(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in s.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn pick<'a>(items: &[&'a str], seed: u64) -> &'a str {
    items[(seed % items.len() as u64) as usize]
}

fn stop_time(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time");
    date.and_time(time).and_utc()
}

/// Deterministic offset near the base coordinates, at most ~0.05 degrees
fn nearby(base: Coordinates, seed: u64) -> Coordinates {
    let lat_jitter = ((seed % 1000) as f64 / 1000.0) * 0.1 - 0.05;
    let lng_jitter = (((seed >> 10) % 1000) as f64 / 1000.0) * 0.1 - 0.05;
    Coordinates {
        lat: base.lat + lat_jitter,
        lng: base.lng + lng_jitter,
    }
}

fn rating(seed: u64) -> f64 {
    4.0 + (seed % 10) as f64 / 10.0
}

/// Attraction name templated from its category and the trip location
fn attraction_name(kind: &str, location: &str, seed: u64) -> String {
    match kind {
        "Museum" => format!(
            "{} {} Museum",
            location,
            pick(&["National", "Modern", "Historical", "Science", "Art"], seed)
        ),
        "Park" => format!(
            "{} Park",
            pick(&["Central", "Riverside", "City", "Grand", "Memorial"], seed)
        ),
        "Beach" => format!(
            "{} Beach",
            pick(&["Golden", "Sandy", "Palm", "Azure", "Sunset"], seed)
        ),
        "Restaurant" => format!(
            "{} {} {}",
            pick(&["The", "La", "El"], seed),
            pick(&["Golden", "Blue", "Green", "Red"], seed >> 8),
            pick(&["Table", "Spoon", "Garden", "Kitchen"], seed >> 16)
        ),
        other => format!("{} {}", location, other),
    }
}

/// Generates the full itinerary for a validated request
///
/// The trip spans every date from `date_from` through `date_to` inclusive;
/// each day gets a start-of-day stop, attractions, meals and an
/// accommodation stop with strictly increasing times.
pub fn generate_itinerary(
    request: &TravelRequest,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<Vec<ItineraryPoint>, GenerateError> {
    let location = request.location.trim();
    if location.is_empty() {
        return Err(GenerateError::EmptyLocation);
    }
    let num_days =
        trip_day_count(date_from, date_to).ok_or(GenerateError::InvalidDateRange {
            date_from,
            date_to,
        })?;

    let base = coordinates_for_location(location);
    let trip_seed = fnv1a(location) ^ fnv1a(&request.date_from) ^ fnv1a(&request.date_to);

    // Candidate attraction categories: two per recognized interest, padded
    // with generic ones so there is always something to schedule
    let mut categories: Vec<&str> = Vec::new();
    for interest in &request.preferences.interests {
        if let Some(types) = attraction_types_for(interest) {
            let seed = fnv1a(interest) ^ trip_seed;
            categories.push(pick(types, seed));
            categories.push(pick(types, seed >> 8));
        }
    }
    let mut pad = 0u64;
    while categories.len() < 5 {
        categories.push(pick(GENERIC_ATTRACTIONS, trip_seed.wrapping_add(pad)));
        pad += 1;
    }

    let food_preference = if request.preferences.food_preference.is_empty() {
        "local"
    } else {
        request.preferences.food_preference.as_str()
    };

    let mut itinerary = Vec::new();
    for day in 0..num_days {
        let date = date_from + chrono::Days::new(day as u64);
        let day_seed = trip_seed.wrapping_mul(day as u64 + 1);

        itinerary.push(ItineraryPoint {
            kind: point_type::START.to_string(),
            time: stop_time(date, 8, 0),
            end_time: None,
            location: format!("{} Grand Hotel", location),
            coordinates: nearby(base, day_seed),
            description: format!(
                "Start your day {} in {}. Enjoy breakfast at your hotel before heading out for the day's activities.",
                day + 1,
                location
            ),
            rating: None,
            attraction_type: Some("lodging".to_string()),
            vicinity: Some(format!("Main Boulevard, {}", location)),
            image_reference: None,
        });

        let morning_kind = pick(&categories, day_seed);
        let morning_name = attraction_name(morning_kind, location, day_seed);
        itinerary.push(ItineraryPoint {
            kind: point_type::ATTRACTION.to_string(),
            time: stop_time(date, 9, 30),
            end_time: Some(stop_time(date, 11, 30)),
            location: morning_name.clone(),
            coordinates: nearby(base, day_seed >> 4),
            description: format!(
                "Explore the fascinating {}. Take your time to fully experience this popular destination in {}.",
                morning_name, location
            ),
            rating: Some(rating(day_seed)),
            attraction_type: Some(morning_kind.to_lowercase().replace(' ', "_")),
            vicinity: Some(format!("Central District, {}", location)),
            image_reference: None,
        });

        itinerary.push(ItineraryPoint {
            kind: point_type::FOOD.to_string(),
            time: stop_time(date, 12, 30),
            end_time: Some(stop_time(date, 13, 30)),
            location: format!(
                "{} {}",
                pick(&["Local", "Traditional", "Authentic", "Modern"], day_seed >> 8),
                pick(&["Café", "Bistro", "Restaurant", "Eatery"], day_seed >> 12)
            ),
            coordinates: nearby(base, day_seed >> 8),
            description: format!(
                "Enjoy a delicious {} lunch at this popular spot.",
                food_preference
            ),
            rating: Some(rating(day_seed >> 8)),
            attraction_type: Some("restaurant".to_string()),
            vicinity: Some(format!("Food District, Downtown {}", location)),
            image_reference: None,
        });

        let afternoon_kind = pick(&categories, day_seed >> 16);
        let afternoon_name = attraction_name(afternoon_kind, location, day_seed >> 16);
        itinerary.push(ItineraryPoint {
            kind: point_type::ATTRACTION.to_string(),
            time: stop_time(date, 14, 0),
            end_time: Some(stop_time(date, 15, 30)),
            location: afternoon_name.clone(),
            coordinates: nearby(base, day_seed >> 16),
            description: format!(
                "Visit the charming {} and learn about its significance in {}.",
                afternoon_name, location
            ),
            rating: Some(rating(day_seed >> 16)),
            attraction_type: Some(afternoon_kind.to_lowercase().replace(' ', "_")),
            vicinity: Some(format!("Cultural Center, {}", location)),
            image_reference: None,
        });

        let late_kind = pick(&categories, day_seed >> 24);
        let late_name = attraction_name(late_kind, location, day_seed >> 24);
        itinerary.push(ItineraryPoint {
            kind: point_type::ATTRACTION.to_string(),
            time: stop_time(date, 16, 0),
            end_time: Some(stop_time(date, 17, 30)),
            location: late_name.clone(),
            coordinates: nearby(base, day_seed >> 24),
            description: format!("Explore the impressive {} before the evening.", late_name),
            rating: Some(rating(day_seed >> 24)),
            attraction_type: Some(late_kind.to_lowercase().replace(' ', "_")),
            vicinity: Some(format!("Old Town, {}", location)),
            image_reference: None,
        });

        itinerary.push(ItineraryPoint {
            kind: point_type::FOOD.to_string(),
            time: stop_time(date, 19, 0),
            end_time: Some(stop_time(date, 20, 30)),
            location: format!(
                "{} {} {}",
                pick(&["The", "La", "El"], day_seed >> 32),
                pick(&["Royal", "Grand", "Seaside", "Garden"], day_seed >> 36),
                pick(&["Restaurant", "Bistro", "Grill", "Cuisine"], day_seed >> 40)
            ),
            coordinates: nearby(base, day_seed >> 32),
            description: format!(
                "End your day with a wonderful {} dinner at this popular restaurant overlooking {}.",
                food_preference, location
            ),
            rating: Some(rating(day_seed >> 32)),
            attraction_type: Some("restaurant".to_string()),
            vicinity: Some(format!("Tower District, {}", location)),
            image_reference: None,
        });

        itinerary.push(ItineraryPoint {
            kind: point_type::ACCOMMODATION.to_string(),
            time: stop_time(date, 22, 0),
            end_time: None,
            location: format!("{} Grand Hotel", location),
            coordinates: nearby(base, day_seed),
            description: format!(
                "Return to your accommodation at the {} Grand Hotel and rest for tomorrow's adventures.",
                location
            ),
            rating: Some(rating(day_seed >> 40)),
            attraction_type: Some("lodging".to_string()),
            vicinity: Some(format!("Main Boulevard, {}", location)),
            image_reference: None,
        });
    }

    Ok(itinerary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::domain::request::TravelPreferences;

    fn request(location: &str) -> TravelRequest {
        TravelRequest {
            location: location.to_string(),
            date_from: "2025-06-01".to_string(),
            date_to: "2025-06-02".to_string(),
            preferences: TravelPreferences {
                food_preference: "vegetarian".to_string(),
                interests: vec!["museums".to_string(), "nature".to_string()],
                ..Default::default()
            },
        }
    }

    fn dates() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        )
    }

    #[test]
    fn test_generates_all_trip_days() {
        let (from, to) = dates();
        let itinerary = generate_itinerary(&request("Paris"), from, to).unwrap();

        assert!(!itinerary.is_empty());
        let days: std::collections::BTreeSet<_> =
            itinerary.iter().map(|p| p.time.date_naive()).collect();
        assert_eq!(days.len(), 2);
        assert!(days.iter().all(|d| *d >= from && *d <= to));
    }

    #[test]
    fn test_each_day_starts_with_start_point_and_increases() {
        let (from, to) = dates();
        let itinerary = generate_itinerary(&request("Paris"), from, to).unwrap();

        let mut by_day: std::collections::BTreeMap<NaiveDate, Vec<_>> = Default::default();
        for point in &itinerary {
            by_day.entry(point.time.date_naive()).or_default().push(point);
        }
        for points in by_day.values() {
            assert_eq!(points[0].kind, point_type::START);
            for pair in points.windows(2) {
                assert!(pair[0].time < pair[1].time, "times must strictly increase within a day");
            }
        }
    }

    #[test]
    fn test_single_day_trip_spans_one_day() {
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let itinerary = generate_itinerary(&request("Rome"), from, from).unwrap();
        assert!(itinerary.iter().all(|p| p.time.date_naive() == from));
    }

    #[test]
    fn test_known_city_coordinates() {
        let coords = coordinates_for_location("Paris");
        assert!((coords.lat - 48.8566).abs() < f64::EPSILON);
        assert!((coords.lng - 2.3522).abs() < f64::EPSILON);

        // Case-insensitive substring match, like "trip to tokyo"
        let coords = coordinates_for_location("Downtown Tokyo");
        assert!((coords.lat - 35.6762).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_location_gets_stable_in_range_coordinates() {
        let a = coordinates_for_location("Smallville");
        let b = coordinates_for_location("Smallville");
        assert_eq!(a, b);
        assert!((-90.0..=90.0).contains(&a.lat));
        assert!((-180.0..=180.0).contains(&a.lng));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let (from, to) = dates();
        let first = generate_itinerary(&request("Paris"), from, to).unwrap();
        let second = generate_itinerary(&request("Paris"), from, to).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_location_fails() {
        let (from, to) = dates();
        let err = generate_itinerary(&request("   "), from, to).unwrap_err();
        assert_eq!(err, GenerateError::EmptyLocation);
    }

    #[test]
    fn test_inverted_date_range_fails() {
        let (from, to) = dates();
        let err = generate_itinerary(&request("Paris"), to, from).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_lunch_uses_food_preference() {
        let (from, to) = dates();
        let itinerary = generate_itinerary(&request("Paris"), from, to).unwrap();
        let lunch = itinerary
            .iter()
            .find(|p| p.kind == point_type::FOOD)
            .unwrap();
        assert!(lunch.description.contains("vegetarian"));
    }
}
