use serde::Deserialize;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::features::locations::models::{AddressFields, Coordinate};
use crate::shared::constants::{
    GEOCODE_STATUS_INVALID_REQUEST, GEOCODE_STATUS_OK, GEOCODE_STATUS_UNKNOWN_ERROR,
    GEOCODE_STATUS_ZERO_RESULTS,
};

/// Geocode API response structure
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[allow(dead_code)]
    pub formatted_address: Option<String>,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: Point,
}

#[derive(Debug, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

/// Result of a single resolution attempt
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeOutcome {
    Resolved(Coordinate),
    NotFound,
    MalformedQuery,
    /// Provider-side failure, unreachable provider, or unreadable reply
    ProviderError(String),
}

impl GeocodeOutcome {
    /// Map a provider reply onto an outcome
    pub fn from_response(response: GeocodeResponse) -> Self {
        match response.status.as_str() {
            GEOCODE_STATUS_OK => match response.results.into_iter().next() {
                Some(first) => GeocodeOutcome::Resolved(Coordinate {
                    lat: first.geometry.location.lat,
                    lng: first.geometry.location.lng,
                }),
                None => GeocodeOutcome::NotFound,
            },
            GEOCODE_STATUS_ZERO_RESULTS => GeocodeOutcome::NotFound,
            GEOCODE_STATUS_INVALID_REQUEST => GeocodeOutcome::MalformedQuery,
            GEOCODE_STATUS_UNKNOWN_ERROR => {
                GeocodeOutcome::ProviderError("provider reported UNKNOWN_ERROR".to_string())
            }
            other => GeocodeOutcome::ProviderError(match response.error_message {
                Some(msg) => format!("unexpected provider status {}: {}", other, msg),
                None => format!("unexpected provider status {}", other),
            }),
        }
    }

    /// Convert into the coordinate, or the domain error for a failed lookup
    pub fn into_coordinate(self) -> Result<Coordinate> {
        match self {
            GeocodeOutcome::Resolved(coordinate) => Ok(coordinate),
            GeocodeOutcome::NotFound => Err(AppError::AddressNotFound),
            GeocodeOutcome::MalformedQuery => Err(AppError::MalformedQuery),
            GeocodeOutcome::ProviderError(reason) => Err(AppError::ProviderError(reason)),
        }
    }
}

/// Service for resolving addresses to coordinates through the geocoding provider
pub struct GeocodingService {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeocodingService {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("GeolocateCore/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Build the single-token `address` query value.
    ///
    /// Components are joined with `,+` and every space becomes `+`. Each
    /// space-delimited token is percent-encoded, so plain input comes out as
    /// e.g. `1600+Amphitheatre+Pkwy,+Mountain+View,+CA,+94043`.
    pub fn build_query(fields: &AddressFields) -> String {
        [&fields.address, &fields.city, &fields.state, &fields.zip]
            .iter()
            .map(|part| {
                part.split(' ')
                    .map(|token| urlencoding::encode(token).into_owned())
                    .collect::<Vec<_>>()
                    .join("+")
            })
            .collect::<Vec<_>>()
            .join(",+")
    }

    fn request_url(&self, query: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}address={}&key={}",
            self.endpoint,
            separator,
            query,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Resolve an address with one outbound call. Never fails: every
    /// transport or decoding problem becomes `ProviderError`.
    pub async fn resolve(&self, fields: &AddressFields) -> GeocodeOutcome {
        let query = Self::build_query(fields);
        tracing::debug!("Geocoding address query: {}", query);

        let response = match self.client.get(self.request_url(&query)).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!("Geocoding request timed out for query {}", query);
                return GeocodeOutcome::ProviderError("geocoding request timed out".to_string());
            }
            Err(e) => {
                // Strip the URL so the API key stays out of logs.
                let e = e.without_url();
                tracing::error!("Geocoding request failed: {:?}", e);
                return GeocodeOutcome::ProviderError(format!("geocoding request failed: {}", e));
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Geocoding provider returned status: {}", response.status());
            return GeocodeOutcome::ProviderError(format!(
                "provider returned HTTP {}",
                response.status()
            ));
        }

        let body: GeocodeResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                let e = e.without_url();
                tracing::error!("Failed to parse geocoding response: {:?}", e);
                return GeocodeOutcome::ProviderError(format!(
                    "failed to parse geocoding response: {}",
                    e
                ));
            }
        };

        tracing::debug!(
            "Geocoding status={} results={}",
            body.status,
            body.results.len()
        );

        GeocodeOutcome::from_response(body)
    }
}
