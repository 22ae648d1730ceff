use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::RankedView;
use crate::models::{
    CatalogResponse, ErrorResponse, GenreFilter, GenresResponse, HealthResponse, MapMarker,
    PoliciesResponse, RankQuery, RankRequest, RankResponse, RankingPolicyId, UserLocation,
    ViewState,
};
use crate::routes::AppState;

/// Configure all event-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/events", web::get().to(list_events))
        .route("/genres", web::get().to(list_genres))
        .route("/policies", web::get().to(list_policies))
        .service(
            web::resource("/events/rank")
                .route(web::post().to(rank_events))
                .route(web::get().to(rank_events_query)),
        );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        events: state.catalog.len(),
    })
}

/// Full catalog in canonical order
///
/// GET /api/v1/events
async fn list_events(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        events: state.catalog.events().to_vec(),
        genres: state.catalog.genres(),
        total: state.catalog.len(),
    })
}

/// GET /api/v1/genres
async fn list_genres(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(GenresResponse {
        genres: state.catalog.genres(),
    })
}

/// GET /api/v1/policies
async fn list_policies(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(PoliciesResponse {
        policies: RankingPolicyId::ALL.to_vec(),
        default: state.default_policy,
    })
}

/// Rank events endpoint
///
/// POST /api/v1/events/rank
///
/// Request body:
/// ```json
/// {
///   "location": { "lat": 19.07, "lng": 72.87, "name": "Mumbai" },
///   "genre": "music",
///   "policy": "smart"
/// }
/// ```
async fn rank_events(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    match build_view(&state, req.location, req.genre, req.policy) {
        Ok(view) => HttpResponse::Ok().json(ranking_response(&state, view)),
        Err(response) => response,
    }
}

/// Rank events endpoint, query-string form
///
/// GET /api/v1/events/rank?lat=19.07&lng=72.87&genre=music&policy=budget
async fn rank_events_query(
    state: web::Data<AppState>,
    query: web::Query<RankQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for rank query: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let location = match query.location() {
        Ok(location) => location,
        Err(e) => return bad_request("Invalid location", e.to_string()),
    };

    let query = query.into_inner();
    match build_view(&state, location, query.genre, query.policy) {
        Ok(view) => HttpResponse::Ok().json(ranking_response(&state, view)),
        Err(response) => response,
    }
}

/// Fill in defaults and check the parts of a view that arrive as raw input
fn build_view(
    state: &AppState,
    location: Option<UserLocation>,
    genre: Option<String>,
    policy: Option<String>,
) -> Result<ViewState, HttpResponse> {
    if let Some(location) = &location {
        location
            .validate()
            .map_err(|errors| bad_request("Invalid location", errors.to_string()))?;
    }

    let policy = match policy {
        Some(token) => token
            .parse::<RankingPolicyId>()
            .map_err(|e| bad_request("Invalid policy", e.to_string()))?,
        None => state.default_policy,
    };

    let genre = genre.map(GenreFilter::from).unwrap_or_default();
    let location = location.unwrap_or_else(|| state.default_location.clone());

    Ok(ViewState::new(location).with_genre(genre).with_policy(policy))
}

fn ranking_response(state: &AppState, view: ViewState) -> RankResponse {
    let ranked = RankedView::build(state.catalog.events(), &view);

    tracing::info!(
        "Returning {} of {} events (genre: {}, policy: {}, location: {})",
        ranked.events.len(),
        ranked.catalog_size,
        view.genre,
        view.policy,
        view.location.name
    );

    let markers = ranked.events.iter().map(MapMarker::from).collect();

    RankResponse {
        policy: view.policy,
        genre: view.genre,
        location: view.location,
        events: ranked.events,
        markers,
        statistics: ranked.statistics,
    }
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}
