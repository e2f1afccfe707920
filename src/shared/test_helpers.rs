use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::features::locations::dtos::CreateLocationDto;
use crate::features::locations::models::{AddressFields, Coordinate, LocationRecord};
use crate::features::locations::services::{GeocodingService, LocationStore};

pub fn sample_address() -> AddressFields {
    AddressFields {
        address: "1600 Amphitheatre Pkwy".to_string(),
        city: "Mountain View".to_string(),
        state: "CA".to_string(),
        zip: "94043".to_string(),
    }
}

pub fn sample_create_dto() -> CreateLocationDto {
    let address = sample_address();
    CreateLocationDto {
        name: "A".to_string(),
        address: address.address,
        city: address.city,
        state: address.state,
        zip: address.zip,
    }
}

pub fn geocoding_service_for(endpoint: &str) -> GeocodingService {
    GeocodingService::new(&GeocodingConfig {
        endpoint: endpoint.to_string(),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("test geocoding client")
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// `LocationStore` backed by a map, counting every call it receives
#[derive(Default)]
pub struct InMemoryLocationStore {
    records: Mutex<HashMap<String, LocationRecord>>,
    calls: AtomicUsize,
    unavailable: bool,
}

impl InMemoryLocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails like a lost database connection
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn get(&self, id: &str) -> Option<LocationRecord> {
        self.records.lock().unwrap().get(id).cloned()
    }

    pub fn seed(&self, record: LocationRecord) {
        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record);
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl LocationStore for InMemoryLocationStore {
    async fn insert(&self, record: &LocationRecord) -> Result<()> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        if records.contains_key(&record.id) {
            return Err(AppError::Database(sqlx::Error::Protocol(format!(
                "duplicate location_id {}",
                record.id
            ))));
        }
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<LocationRecord> {
        self.enter()?;
        self.get(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn update_by_id(
        &self,
        id: &str,
        address: &AddressFields,
        coordinate: Coordinate,
    ) -> Result<()> {
        self.enter()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        record.address = address.clone();
        record.coordinate = coordinate;
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.enter()?;
        self.records
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }
}

// =============================================================================
// FAKE GEOCODING PROVIDER
// =============================================================================

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

async fn fake_geocode(
    State(state): State<FakeState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query;
    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Local HTTP server standing in for the geocoding provider
pub struct FakeGeocoder {
    pub endpoint: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
}

impl FakeGeocoder {
    async fn start(status: StatusCode, body: String, delay: Option<Duration>) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let last_query = Arc::new(Mutex::new(None));
        let state = FakeState {
            status,
            body,
            delay,
            hits: Arc::clone(&hits),
            last_query: Arc::clone(&last_query),
        };

        let app = Router::new()
            .route("/geocode/json", get(fake_geocode))
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            endpoint: format!("http://{}/geocode/json", addr),
            hits,
            last_query,
        }
    }

    pub async fn respond(status: StatusCode, body: &str) -> Self {
        Self::start(status, body.to_string(), None).await
    }

    pub async fn ok(lat: f64, lng: f64) -> Self {
        let body = serde_json::json!({
            "status": "OK",
            "results": [{
                "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                "geometry": { "location": { "lat": lat, "lng": lng } }
            }]
        });
        Self::respond(StatusCode::OK, &body.to_string()).await
    }

    pub async fn with_status(status: &str) -> Self {
        let body = serde_json::json!({ "status": status, "results": [] });
        Self::respond(StatusCode::OK, &body.to_string()).await
    }

    pub async fn slow(delay: Duration) -> Self {
        Self::start(
            StatusCode::OK,
            r#"{"status":"ZERO_RESULTS","results":[]}"#.to_string(),
            Some(delay),
        )
        .await
    }

    /// Endpoint on a port nothing listens on
    pub async fn unreachable_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/geocode/json", addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }
}
