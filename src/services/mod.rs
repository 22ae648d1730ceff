// Service exports
pub mod catalog;
pub mod location;

pub use catalog::{Catalog, CatalogError};
pub use location::{request_location, LocationCallback, LocationError, PendingLocation, Resolution};
