use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::locations::models::{
    AddressFields, Coordinate, LocationRecord, LocationRow,
};

/// Persistence for location records, keyed by the record id.
///
/// Every operation is a single round trip; a missing id is reported as
/// `AppError::NotFound`, any other failure as `AppError::Database`.
#[async_trait]
pub trait LocationStore: Send + Sync {
    async fn insert(&self, record: &LocationRecord) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<LocationRecord>;
    async fn update_by_id(
        &self,
        id: &str,
        address: &AddressFields,
        coordinate: Coordinate,
    ) -> Result<()>;
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}

/// PostgreSQL-backed store sharing the process-wide pool
pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationStore for PgLocationStore {
    async fn insert(&self, record: &LocationRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO locations (location_id, name, address, city, state, zip, lat, lng)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.address.address)
        .bind(&record.address.city)
        .bind(&record.address.state)
        .bind(&record.address.zip)
        .bind(record.coordinate.lat)
        .bind(record.coordinate.lng)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert location: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<LocationRecord> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT pk, location_id, name, address, city, state, zip, lat, lng, created_at, updated_at
            FROM locations
            WHERE location_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get location by id: {:?}", e);
            AppError::Database(e)
        })?;

        row.map(LocationRecord::from)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn update_by_id(
        &self,
        id: &str,
        address: &AddressFields,
        coordinate: Coordinate,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE locations
            SET address = $2, city = $3, state = $4, zip = $5,
                lat = $6, lng = $7, updated_at = NOW()
            WHERE location_id = $1
            "#,
        )
        .bind(id)
        .bind(&address.address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip)
        .bind(coordinate.lat)
        .bind(coordinate.lng)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update location: {:?}", e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM locations WHERE location_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete location: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
