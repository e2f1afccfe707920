mod geocoding_service;
mod location_service;
mod location_store;

pub use geocoding_service::{GeocodeOutcome, GeocodingService};
pub use location_service::LocationService;
pub use location_store::{LocationStore, PgLocationStore};
