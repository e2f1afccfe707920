use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::locations::models::{AddressFields, Coordinate, LocationRecord};

/// Request DTO for creating a location
///
/// Absent fields decode as empty strings so they are reported by validation
/// rather than as a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateLocationDto {
    #[serde(alias = "Name")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[serde(alias = "Address")]
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[serde(alias = "City")]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[serde(alias = "State")]
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[serde(alias = "Zip")]
    #[validate(length(min = 1, message = "Zip is required"))]
    pub zip: String,
}

impl CreateLocationDto {
    pub fn address_fields(&self) -> AddressFields {
        AddressFields {
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
        }
    }
}

/// Request DTO for replacing a location's address
///
/// `name` is accepted but never required or persisted; it is only echoed
/// back in the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateLocationDto {
    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Address")]
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[serde(alias = "City")]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[serde(alias = "State")]
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[serde(alias = "Zip")]
    #[validate(length(min = 1, message = "Zip is required"))]
    pub zip: String,
}

impl UpdateLocationDto {
    pub fn address_fields(&self) -> AddressFields {
        AddressFields {
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
        }
    }
}

/// Response DTO for a location record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationResponseDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub coordinate: Coordinate,
}

impl From<LocationRecord> for LocationResponseDto {
    fn from(r: LocationRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            address: r.address.address,
            city: r.address.city,
            state: r.address.state,
            zip: r.address.zip,
            coordinate: r.coordinate,
        }
    }
}
