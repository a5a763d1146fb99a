//! BigDataCloud reverse geocoding
//!
//! Uses the keyless client endpoint. Any failure (transport, status, body)
//! degrades to a bare coordinate result labelled [`UNKNOWN_REGION`] and is
//! counted so degraded lookups are visible in logs and diagnostics.

use super::{Coordinates, LocationData, ReverseGeocoder};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::cell::Cell;
use thiserror::Error;
use tracing::warn;

/// Region label used when geocoding fails
pub const UNKNOWN_REGION: &str = "Unknown Region";

/// Configuration for the geocoding client
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    pub endpoint: String,
    /// Language for place names
    pub locality_language: String,
    /// Request timeout in milliseconds (ignored in the browser)
    pub request_timeout_ms: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.bigdatacloud.net/data/reverse-geocode-client".to_string(),
            locality_language: "en".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// Why a lookup degraded
#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geocoder returned status {0}")]
    Status(u16),
}

/// Reverse geocoder backed by api.bigdatacloud.net
pub struct BigDataCloudGeocoder {
    client: Client,
    config: GeocoderConfig,
    fallbacks: Cell<u64>,
}

impl BigDataCloudGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder =
            builder.timeout(std::time::Duration::from_millis(config.request_timeout_ms));

        Ok(Self {
            client: builder.build()?,
            config,
            fallbacks: Cell::new(0),
        })
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Number of lookups that fell back to [`UNKNOWN_REGION`]
    pub fn fallback_count(&self) -> u64 {
        self.fallbacks.get()
    }

    /// Lookup without the fallback, for callers that want the failure
    pub async fn lookup(&self, coords: Coordinates) -> Result<LocationData, GeocodeError> {
        let url = format!(
            "{}?latitude={}&longitude={}&localityLanguage={}",
            self.config.endpoint,
            coords.latitude,
            coords.longitude,
            urlencoding::encode(&self.config.locality_language)
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body: ReverseGeocodeResponse = response.json().await?;
        Ok(body.into_location(coords))
    }
}

#[async_trait(?Send)]
impl ReverseGeocoder for BigDataCloudGeocoder {
    async fn resolve(&self, coords: Coordinates) -> LocationData {
        match self.lookup(coords).await {
            Ok(location) => location,
            Err(e) => {
                self.fallbacks.set(self.fallbacks.get() + 1);
                warn!(
                    fallbacks = self.fallbacks.get(),
                    "Reverse geocoding failed, using {}: {}", UNKNOWN_REGION, e
                );
                LocationData {
                    region: Some(UNKNOWN_REGION.to_string()),
                    ..LocationData::bare(coords)
                }
            }
        }
    }
}

// ============================================
// Response DTOs
// ============================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseGeocodeResponse {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    locality: Option<String>,
    #[serde(default)]
    principal_subdivision: Option<String>,
    #[serde(default)]
    country_name: Option<String>,
}

/// The service reports unknown names as empty strings
fn named(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ReverseGeocodeResponse {
    fn into_location(self, coords: Coordinates) -> LocationData {
        let city = named(self.city).or_else(|| named(self.locality));
        let state = named(self.principal_subdivision);
        let country = named(self.country_name);
        let region = state.clone().or_else(|| country.clone());

        LocationData {
            latitude: coords.latitude,
            longitude: coords.longitude,
            city,
            state,
            country,
            region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LocationData {
        let body: ReverseGeocodeResponse = serde_json::from_str(json).unwrap();
        body.into_location(Coordinates::new(19.07, 72.87))
    }

    #[test]
    fn test_full_response_mapping() {
        let data = parse(
            r#"{"city":"Mumbai","locality":"Colaba","principalSubdivision":"Maharashtra","countryName":"India","countryCode":"IN"}"#,
        );
        assert_eq!(data.city.as_deref(), Some("Mumbai"));
        assert_eq!(data.state.as_deref(), Some("Maharashtra"));
        assert_eq!(data.country.as_deref(), Some("India"));
        assert_eq!(data.region.as_deref(), Some("Maharashtra"));
    }

    #[test]
    fn test_empty_names_fall_through() {
        let data = parse(
            r#"{"city":"","locality":"Thar Desert","principalSubdivision":"","countryName":"India"}"#,
        );
        assert_eq!(data.city.as_deref(), Some("Thar Desert"));
        assert_eq!(data.state, None);
        assert_eq!(data.region.as_deref(), Some("India"));
    }

    #[test]
    fn test_ocean_has_no_region() {
        let data = parse(r#"{"locality":""}"#);
        assert_eq!(data.city, None);
        assert_eq!(data.region, None);
    }

    #[cfg(feature = "native")]
    mod http {
        use super::*;
        use axum::extract::Query;
        use axum::http::StatusCode;
        use axum::routing::get;
        use axum::{Json, Router};
        use serde_json::{json, Value};
        use std::collections::HashMap;

        async fn reverse(
            Query(query): Query<HashMap<String, String>>,
        ) -> Result<Json<Value>, StatusCode> {
            if query.get("localityLanguage").map(String::as_str) != Some("en") {
                return Err(StatusCode::BAD_REQUEST);
            }
            match query.get("latitude").map(String::as_str) {
                Some("19.076") => Ok(Json(json!({
                    "city": "Mumbai",
                    "principalSubdivision": "Maharashtra",
                    "countryName": "India"
                }))),
                _ => Err(StatusCode::SERVICE_UNAVAILABLE),
            }
        }

        async fn geocoder() -> BigDataCloudGeocoder {
            let app = Router::new().route("/reverse", get(reverse));
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            BigDataCloudGeocoder::new(GeocoderConfig {
                endpoint: format!("http://{}/reverse", addr),
                ..GeocoderConfig::default()
            })
            .unwrap()
        }

        #[tokio::test]
        async fn test_resolves_region() {
            let geocoder = geocoder().await;
            let data = geocoder.resolve(Coordinates::new(19.076, 72.8777)).await;

            assert_eq!(data.region.as_deref(), Some("Maharashtra"));
            assert_eq!(geocoder.fallback_count(), 0);
        }

        #[tokio::test]
        async fn test_error_status_degrades() {
            let geocoder = geocoder().await;
            let coords = Coordinates::new(1.0, 2.0);

            let err = geocoder.lookup(coords).await.unwrap_err();
            assert!(matches!(err, GeocodeError::Status(503)));

            let data = geocoder.resolve(coords).await;
            assert_eq!(data.region.as_deref(), Some(UNKNOWN_REGION));
            assert_eq!(data.city, None);
            assert_eq!(data.latitude, 1.0);
            assert_eq!(geocoder.fallback_count(), 1);
        }

        #[tokio::test]
        async fn test_unreachable_service_degrades() {
            let geocoder = BigDataCloudGeocoder::new(GeocoderConfig {
                endpoint: "http://127.0.0.1:1/reverse".to_string(),
                request_timeout_ms: 500,
                ..GeocoderConfig::default()
            })
            .unwrap();

            let data = geocoder.resolve(Coordinates::new(19.076, 72.8777)).await;
            assert_eq!(data.region.as_deref(), Some(UNKNOWN_REGION));
            assert_eq!(geocoder.fallback_count(), 1);
        }
    }
}
