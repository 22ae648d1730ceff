// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnnotatedEvent, Coordinate, Event, GenreFilter, ParsePolicyError, RankingPolicyId,
    SmartWeights, UserLocation, ViewState, ViewStatistics, ALL_GENRES_TOKEN,
    CURRENT_LOCATION_NAME,
};
pub use requests::{
    GeolocationOutcome, IncompleteCoordinates, RankQuery, RankRequest, ResolveLocationRequest,
};
pub use responses::{
    CatalogResponse, ErrorResponse, GenresResponse, HealthResponse, MapMarker, PoliciesResponse,
    RankResponse, ResolveLocationResponse,
};
