use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Token selecting every genre in a [`GenreFilter`]
pub const ALL_GENRES_TOKEN: &str = "all";

/// Label given to a location obtained from the platform location service
pub const CURRENT_LOCATION_NAME: &str = "Your Current Location";

/// WGS84 coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "finite_coordinate"))]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// `range` lets NaN through, so every float boundary also checks finiteness
fn ensure_finite(values: &[f64]) -> Result<(), ValidationError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::new("non_finite"))
    }
}

fn finite_coordinate(coordinate: &Coordinate) -> Result<(), ValidationError> {
    ensure_finite(&[coordinate.lat, coordinate.lng])
}

fn finite_event(event: &Event) -> Result<(), ValidationError> {
    ensure_finite(&[event.base_price, event.rating, event.popularity])
}

fn finite_user_location(location: &UserLocation) -> Result<(), ValidationError> {
    ensure_finite(&[location.lat, location.lng])
}

/// Immutable catalog record for a single event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "finite_event"))]
pub struct Event {
    pub id: u32,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub genre: String,
    #[serde(rename = "subGenre", default)]
    pub sub_genre: String,
    #[serde(rename = "basePrice")]
    #[validate(range(min = 0.0))]
    pub base_price: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub popularity: f64,
    #[serde(default)]
    pub accessible: bool,
    pub location: Coordinate,
    pub venue: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "timeSlots", default)]
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub icon: String,
}

/// Event enriched with its distance from the user
///
/// Always derived from a catalog [`Event`] and a [`UserLocation`]; the
/// source event is cloned, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedEvent {
    #[serde(flatten)]
    pub event: Event,
    /// Kilometers from the user, rounded to one decimal place
    pub distance: f64,
}

impl AnnotatedEvent {
    pub fn new(event: Event, distance: f64) -> Self {
        Self { event, distance }
    }
}

/// Where the user is, with a display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "finite_user_location"))]
pub struct UserLocation {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    #[serde(default = "default_location_name")]
    pub name: String,
}

fn default_location_name() -> String {
    "Selected Location".to_string()
}

impl UserLocation {
    pub fn new(lat: f64, lng: f64, name: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
        }
    }

    /// Location reported by the platform location service
    pub fn detected(coordinate: Coordinate) -> Self {
        Self::new(coordinate.lat, coordinate.lng, CURRENT_LOCATION_NAME)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// Error returned when a ranking policy token is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ranking policy '{0}', expected one of: proximity, budget, accessibility, popularity, smart")]
pub struct ParsePolicyError(pub String);

/// Selectable ranking policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPolicyId {
    Proximity,
    Budget,
    Accessibility,
    Popularity,
    #[default]
    Smart,
}

impl RankingPolicyId {
    /// Every policy, in selector order
    pub const ALL: [RankingPolicyId; 5] = [
        RankingPolicyId::Proximity,
        RankingPolicyId::Budget,
        RankingPolicyId::Accessibility,
        RankingPolicyId::Popularity,
        RankingPolicyId::Smart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RankingPolicyId::Proximity => "proximity",
            RankingPolicyId::Budget => "budget",
            RankingPolicyId::Accessibility => "accessibility",
            RankingPolicyId::Popularity => "popularity",
            RankingPolicyId::Smart => "smart",
        }
    }
}

impl fmt::Display for RankingPolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingPolicyId {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| ParsePolicyError(s.to_string()))
    }
}

/// Genre selection applied before ranking
///
/// Serialized as its token: `"all"` or the genre name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    pub fn from_token(token: &str) -> Self {
        if token == ALL_GENRES_TOKEN {
            GenreFilter::All
        } else {
            GenreFilter::Genre(token.to_string())
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            GenreFilter::All => ALL_GENRES_TOKEN,
            GenreFilter::Genre(genre) => genre,
        }
    }
}

impl From<&str> for GenreFilter {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

impl From<String> for GenreFilter {
    fn from(token: String) -> Self {
        if token == ALL_GENRES_TOKEN {
            GenreFilter::All
        } else {
            GenreFilter::Genre(token)
        }
    }
}

impl From<GenreFilter> for String {
    fn from(filter: GenreFilter) -> Self {
        match filter {
            GenreFilter::All => ALL_GENRES_TOKEN.to_string(),
            GenreFilter::Genre(genre) => genre,
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Everything a ranking call depends on besides the catalog
///
/// Replaced as a whole value whenever the user moves, picks a genre or
/// switches policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub location: UserLocation,
    pub genre: GenreFilter,
    pub policy: RankingPolicyId,
}

impl ViewState {
    pub fn new(location: UserLocation) -> Self {
        Self {
            location,
            genre: GenreFilter::All,
            policy: RankingPolicyId::default(),
        }
    }

    pub fn with_location(self, location: UserLocation) -> Self {
        Self { location, ..self }
    }

    pub fn with_genre(self, genre: GenreFilter) -> Self {
        Self { genre, ..self }
    }

    pub fn with_policy(self, policy: RankingPolicyId) -> Self {
        Self { policy, ..self }
    }
}

/// Weights of the smart composite score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmartWeights {
    pub distance: f64,
    pub price: f64,
    pub rating: f64,
    pub popularity: f64,
    pub accessibility: f64,
}

impl SmartWeights {
    pub const FIXED: SmartWeights = SmartWeights {
        distance: 0.30,
        price: 0.25,
        rating: 0.25,
        popularity: 0.15,
        accessibility: 0.05,
    };

    pub fn sum(&self) -> f64 {
        self.distance + self.price + self.rating + self.popularity + self.accessibility
    }
}

impl Default for SmartWeights {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Summary figures for a ranked view
///
/// Averages are `None` when the view is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewStatistics {
    #[serde(rename = "eventCount")]
    pub event_count: usize,
    #[serde(rename = "avgDistance")]
    pub avg_distance: Option<f64>,
    #[serde(rename = "avgPrice")]
    pub avg_price: Option<f64>,
    #[serde(rename = "avgRating")]
    pub avg_rating: Option<f64>,
}
