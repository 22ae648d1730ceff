//! Event Ranker - multi-criteria ranking of an event catalog
//!
//! Ranks a fixed catalog of events for a user by distance, price, rating,
//! popularity and accessibility under five selectable policies. The engine
//! is a pure pipeline: distance annotation, genre filtering, then ordering.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank, rank_view, distance::{distance_km, haversine_distance}, RankedView};
pub use models::{AnnotatedEvent, Coordinate, Event, GenreFilter, RankingPolicyId, UserLocation, ViewState};
pub use services::Catalog;
