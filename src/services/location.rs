use thiserror::Error;
use tokio::sync::oneshot;
use validator::Validate;
use crate::models::{Coordinate, UserLocation};

/// Ways a location request can fail
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Geolocation is not supported")]
    Unsupported,

    #[error("Position unavailable: {0}")]
    Unavailable(String),

    #[error("Location request dropped before completing")]
    Dropped,
}

type Outcome = Result<Coordinate, LocationError>;

/// Completion side of a location request, handed to the platform callback
///
/// Consumed by the first outcome it reports, so a request settles at most
/// once. Dropping it without reporting settles the request as
/// [`LocationError::Dropped`].
#[derive(Debug)]
pub struct LocationCallback {
    tx: oneshot::Sender<Outcome>,
}

impl LocationCallback {
    pub fn resolve(self, coordinate: Coordinate) {
        self.settle(Ok(coordinate));
    }

    pub fn reject(self, error: LocationError) {
        self.settle(Err(error));
    }

    fn settle(self, outcome: Outcome) {
        if self.tx.send(outcome).is_err() {
            tracing::debug!("Location outcome arrived after the request was abandoned");
        }
    }
}

/// Settled location request
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub location: UserLocation,
    /// False when the previous location was kept
    pub detected: bool,
}

/// Awaiting side of a location request
#[derive(Debug)]
pub struct PendingLocation {
    rx: oneshot::Receiver<Outcome>,
}

/// Start a single-shot location request
pub fn request_location() -> (LocationCallback, PendingLocation) {
    let (tx, rx) = oneshot::channel();
    (LocationCallback { tx }, PendingLocation { rx })
}

impl PendingLocation {
    /// Wait for the platform to report, validating any coordinate it sends
    pub async fn outcome(self) -> Result<Coordinate, LocationError> {
        let coordinate = self.rx.await.map_err(|_| LocationError::Dropped)??;

        coordinate
            .validate()
            .map_err(|errors| LocationError::Unavailable(errors.to_string()))?;

        Ok(coordinate)
    }

    /// The location to rank with once the request settles
    ///
    /// A detected position replaces `previous` wholesale; any failure keeps
    /// `previous` as it was.
    pub async fn resolve_or(self, previous: &UserLocation) -> Resolution {
        match self.outcome().await {
            Ok(coordinate) => {
                tracing::info!("Location detected at ({}, {})", coordinate.lat, coordinate.lng);
                Resolution {
                    location: UserLocation::detected(coordinate),
                    detected: true,
                }
            }
            Err(e) => {
                tracing::warn!("Unable to retrieve location ({}), keeping {}", e, previous.name);
                Resolution {
                    location: previous.clone(),
                    detected: false,
                }
            }
        }
    }
}
