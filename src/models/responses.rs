use serde::{Deserialize, Serialize};
use crate::models::domain::{
    AnnotatedEvent, Coordinate, Event, GenreFilter, RankingPolicyId, UserLocation, ViewStatistics,
};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub policy: RankingPolicyId,
    pub genre: GenreFilter,
    pub location: UserLocation,
    pub events: Vec<AnnotatedEvent>,
    pub markers: Vec<MapMarker>,
    pub statistics: ViewStatistics,
}

/// Map marker with the fields shown in its popup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: u32,
    pub title: String,
    pub venue: String,
    pub icon: String,
    pub location: Coordinate,
    pub distance: f64,
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    pub rating: f64,
}

impl From<&AnnotatedEvent> for MapMarker {
    fn from(annotated: &AnnotatedEvent) -> Self {
        let event = &annotated.event;
        Self {
            id: event.id,
            title: event.title.clone(),
            venue: event.venue.clone(),
            icon: event.icon.clone(),
            location: event.location,
            distance: annotated.distance,
            base_price: event.base_price,
            rating: event.rating,
        }
    }
}

/// Full catalog in canonical order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub events: Vec<Event>,
    pub genres: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenresResponse {
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoliciesResponse {
    pub policies: Vec<RankingPolicyId>,
    pub default: RankingPolicyId,
}

/// Location the next rank request should use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveLocationResponse {
    pub location: UserLocation,
    /// False when the previous location was kept
    pub detected: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub events: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
