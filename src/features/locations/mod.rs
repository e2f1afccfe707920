//! Location records with geocoded coordinates.
//!
//! Addresses are validated, resolved through the external geocoding provider
//! and only then written to the store.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/locations/{id}` | Fetch a record |
//! | POST | `/locations/` | Create a record |
//! | PUT | `/locations/{id}` | Replace the address and re-geocode |
//! | DELETE | `/locations/{id}` | Delete a record |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{GeocodingService, LocationService, PgLocationStore};
