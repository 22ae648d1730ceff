use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;
use crate::models::domain::UserLocation;

/// Request to rank the catalog
///
/// Every field is optional; omitted fields fall back to the configured
/// default location, the `"all"` genre and the configured default policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(default)]
    pub location: Option<UserLocation>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub genre: Option<String>,
    #[serde(default)]
    pub policy: Option<String>,
}

/// Only one of `lat` / `lng` was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lat and lng must be provided together")]
pub struct IncompleteCoordinates;

/// Query-string form of [`RankRequest`]
///
/// `lat` and `lng` must be given together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub genre: Option<String>,
    pub policy: Option<String>,
}

impl RankQuery {
    /// Location given by the query, if any
    pub fn location(&self) -> Result<Option<UserLocation>, IncompleteCoordinates> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Ok(Some(UserLocation::new(
                lat,
                lng,
                self.name.clone().unwrap_or_else(|| "Selected Location".to_string()),
            ))),
            (None, None) => Ok(None),
            _ => Err(IncompleteCoordinates),
        }
    }
}

/// Terminal outcome of a client-side geolocation query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeolocationOutcome {
    Resolved,
    Denied,
    Unsupported,
    Unavailable,
}

/// Request carrying the result of a geolocation query
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResolveLocationRequest {
    pub outcome: GeolocationOutcome,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    /// Location held before the query; the configured default when absent
    #[serde(default)]
    pub previous: Option<UserLocation>,
}
