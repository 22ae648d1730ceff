use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    Coordinate, ErrorResponse, GeolocationOutcome, ResolveLocationRequest, ResolveLocationResponse,
};
use crate::routes::AppState;
use crate::services::{request_location, LocationCallback, LocationError};

/// Configure location routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/location/resolve", web::post().to(resolve_location));
}

/// Turn a client geolocation result into the location to rank with
///
/// POST /api/v1/location/resolve
///
/// Request body:
/// ```json
/// {
///   "outcome": "resolved|denied|unsupported|unavailable",
///   "lat": 19.07,
///   "lng": 72.87,
///   "previous": { "lat": 19.07, "lng": 72.87, "name": "Mumbai" }
/// }
/// ```
async fn resolve_location(
    state: web::Data<AppState>,
    req: web::Json<ResolveLocationRequest>,
) -> impl Responder {
    let validation = req.validate().and_then(|_| match &req.previous {
        Some(previous) => previous.validate(),
        None => Ok(()),
    });

    if let Err(errors) = validation {
        tracing::info!("Validation failed for location request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let (callback, pending) = request_location();
    report(callback, &req);

    let previous = req
        .previous
        .unwrap_or_else(|| state.default_location.clone());
    let resolution = pending.resolve_or(&previous).await;

    HttpResponse::Ok().json(ResolveLocationResponse {
        location: resolution.location,
        detected: resolution.detected,
    })
}

/// Play the client's result back through the platform callback
fn report(callback: LocationCallback, req: &ResolveLocationRequest) {
    let reason = || req.message.clone().unwrap_or_else(|| "no position reported".to_string());

    match req.outcome {
        GeolocationOutcome::Resolved => match (req.lat, req.lng) {
            (Some(lat), Some(lng)) => callback.resolve(Coordinate::new(lat, lng)),
            _ => callback.reject(LocationError::Unavailable(
                "resolved outcome without coordinates".to_string(),
            )),
        },
        GeolocationOutcome::Denied => callback.reject(LocationError::PermissionDenied),
        GeolocationOutcome::Unsupported => callback.reject(LocationError::Unsupported),
        GeolocationOutcome::Unavailable => callback.reject(LocationError::Unavailable(reason())),
    }
}
