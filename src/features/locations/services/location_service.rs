use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::{CreateLocationDto, LocationResponseDto, UpdateLocationDto};
use crate::features::locations::models::LocationRecord;
use crate::features::locations::services::{GeocodingService, LocationStore};
use crate::shared::constants::{MSG_CREATE_MISSING_FIELDS, MSG_UPDATE_MISSING_FIELDS};
use crate::shared::validation::is_complete;

/// Service for the location record lifecycle.
///
/// Create and update only reach the store after a successful geocode, so a
/// stored address always has a matching coordinate.
pub struct LocationService {
    store: Arc<dyn LocationStore>,
    geocoder: Arc<GeocodingService>,
}

impl LocationService {
    pub fn new(store: Arc<dyn LocationStore>, geocoder: Arc<GeocodingService>) -> Self {
        Self { store, geocoder }
    }

    /// Validate, geocode, then persist a new record under a fresh id
    pub async fn create(&self, dto: CreateLocationDto) -> Result<LocationResponseDto> {
        if !is_complete(&dto) {
            return Err(AppError::Validation(MSG_CREATE_MISSING_FIELDS.to_string()));
        }

        let address = dto.address_fields();
        let coordinate = self.geocoder.resolve(&address).await.into_coordinate()?;

        let record = LocationRecord {
            id: Uuid::new_v4().to_string(),
            name: dto.name,
            address,
            coordinate,
        };
        self.store.insert(&record).await?;

        tracing::info!(
            "Location created: id={}, lat={}, lng={}",
            record.id,
            record.coordinate.lat,
            record.coordinate.lng
        );

        Ok(record.into())
    }

    pub async fn get(&self, id: &str) -> Result<LocationResponseDto> {
        let record = self.store.find_by_id(id).await?;
        Ok(record.into())
    }

    /// Replace the address of `id` and re-resolve its coordinate.
    ///
    /// The returned view is assembled from the request, not re-read.
    pub async fn update(&self, id: &str, dto: UpdateLocationDto) -> Result<LocationResponseDto> {
        if !is_complete(&dto) {
            return Err(AppError::Validation(MSG_UPDATE_MISSING_FIELDS.to_string()));
        }

        let address = dto.address_fields();
        let coordinate = self.geocoder.resolve(&address).await.into_coordinate()?;

        self.store.update_by_id(id, &address, coordinate).await?;

        tracing::info!(
            "Location updated: id={}, lat={}, lng={}",
            id,
            coordinate.lat,
            coordinate.lng
        );

        Ok(LocationRecord {
            id: id.to_string(),
            name: dto.name,
            address,
            coordinate,
        }
        .into())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_by_id(id).await?;
        tracing::info!("Location deleted: id={}", id);
        Ok(())
    }
}
