use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::locations::dtos::{CreateLocationDto, LocationResponseDto, UpdateLocationDto};
use crate::features::locations::services::LocationService;

/// Encode `body` as a JSON response; encoding failures surface as 500
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response> {
    let encoded = serde_json::to_string(body)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], encoded).into_response())
}

/// Get location by id
#[utoipa::path(
    get,
    path = "/locations/{id}",
    params(
        ("id" = String, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Location found, or a plain-text not-found message", body = LocationResponseDto),
        (status = 500, description = "Store failure")
    ),
    tag = "locations"
)]
pub async fn get_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let location = service.get(&id).await?;
    json_response(StatusCode::OK, &location)
}

/// Create a location
///
/// The address is geocoded before anything is stored; on any validation or
/// geocoding failure a plain-text message is returned and nothing is created.
#[utoipa::path(
    post,
    path = "/locations/",
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationResponseDto),
        (status = 200, description = "Validation or geocoding failure message"),
        (status = 500, description = "Store failure")
    ),
    tag = "locations"
)]
pub async fn create_location(
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<CreateLocationDto>,
) -> Result<Response> {
    let location = service.create(dto).await?;
    json_response(StatusCode::CREATED, &location)
}

/// Replace a location's address
#[utoipa::path(
    put,
    path = "/locations/{id}",
    params(
        ("id" = String, Path, description = "Location id")
    ),
    request_body = UpdateLocationDto,
    responses(
        (status = 201, description = "Location updated", body = LocationResponseDto),
        (status = 200, description = "Validation, geocoding or not-found message"),
        (status = 500, description = "Store failure")
    ),
    tag = "locations"
)]
pub async fn update_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateLocationDto>,
) -> Result<Response> {
    let location = service.update(&id, dto).await?;
    json_response(StatusCode::CREATED, &location)
}

/// Delete a location
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    params(
        ("id" = String, Path, description = "Location id")
    ),
    responses(
        (status = 200, description = "Deleted (empty body), or a plain-text not-found message"),
        (status = 500, description = "Store failure")
    ),
    tag = "locations"
)]
pub async fn delete_location(
    State(service): State<Arc<LocationService>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    service.delete(&id).await?;
    Ok(StatusCode::OK)
}
