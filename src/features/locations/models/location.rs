use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    #[serde(alias = "Lat")]
    pub lat: f64,
    #[serde(alias = "Lng")]
    pub lng: f64,
}

/// The four address components that drive geocoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// A persisted location record
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub address: AddressFields,
    pub coordinate: Coordinate,
}

/// Database row for a location record
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct LocationRow {
    pub pk: i64,
    pub location_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LocationRow> for LocationRecord {
    fn from(row: LocationRow) -> Self {
        Self {
            id: row.location_id,
            name: row.name,
            address: AddressFields {
                address: row.address,
                city: row.city,
                state: row.state,
                zip: row.zip,
            },
            coordinate: Coordinate {
                lat: row.lat,
                lng: row.lng,
            },
        }
    }
}
