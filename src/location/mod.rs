//! Location Probe
//!
//! One-shot device location lookup followed by reverse geocoding into a
//! human-readable region. The platform position source sits behind
//! [`Geolocator`]; the region lookup behind [`ReverseGeocoder`].
//!
//! A request either produces a [`LocationData`] (possibly degraded to
//! "Unknown Region" when the geocoder fails) or a [`LocationError`] carrying
//! the platform's numeric code. Geocoding failures never surface as errors.

mod geocoder;

pub use geocoder::{BigDataCloudGeocoder, GeocodeError, GeocoderConfig, UNKNOWN_REGION};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// A point on the globe, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A resolved location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Best available region label (state, else country)
    pub region: Option<String>,
}

impl LocationData {
    /// Coordinates with no place names attached
    pub fn bare(coords: Coordinates) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            city: None,
            state: None,
            country: None,
            region: None,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Short label for display, most specific name first
    pub fn label(&self) -> String {
        let parts: Vec<&str> = [&self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();

        if parts.is_empty() {
            self.region
                .clone()
                .unwrap_or_else(|| format!("{:.4}, {:.4}", self.latitude, self.longitude))
        } else {
            parts.join(", ")
        }
    }
}

/// Numeric failure codes, matching the browser geolocation API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationErrorCode {
    Unsupported = 0,
    PermissionDenied = 1,
    PositionUnavailable = 2,
    Timeout = 3,
}

impl LocationErrorCode {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Unsupported),
            1 => Some(Self::PermissionDenied),
            2 => Some(Self::PositionUnavailable),
            3 => Some(Self::Timeout),
            _ => None,
        }
    }
}

impl fmt::Display for LocationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u16)
    }
}

/// Failure to obtain a position
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LocationError {
    pub code: LocationErrorCode,
    pub message: String,
}

impl LocationError {
    pub fn new(code: LocationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unsupported() -> Self {
        Self::new(
            LocationErrorCode::Unsupported,
            "Geolocation is not supported by this browser.",
        )
    }

    /// Raw numeric code
    pub fn code(&self) -> u16 {
        self.code as u16
    }
}

/// Position request options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached position the platform may return
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(5 * 60),
        }
    }
}

/// Platform position source
#[async_trait(?Send)]
pub trait Geolocator {
    /// Whether a position service exists at all
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, LocationError>;
}

/// Coordinates to place names. Infallible: failures degrade the result.
#[async_trait(?Send)]
pub trait ReverseGeocoder {
    async fn resolve(&self, coords: Coordinates) -> LocationData;
}

/// Always reports the same position
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator {
    coords: Coordinates,
}

impl FixedGeolocator {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

#[async_trait(?Send)]
impl Geolocator for FixedGeolocator {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        Ok(self.coords)
    }
}

/// Platform without a position service
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedGeolocator;

#[async_trait(?Send)]
impl Geolocator for UnsupportedGeolocator {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        Err(LocationError::unsupported())
    }
}

/// Observable probe state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeState {
    pub location: Option<LocationData>,
    pub loading: bool,
    pub error: Option<LocationError>,
}

/// Location request state machine
///
/// Overlapping requests are not deduplicated; each one writes its result when
/// it finishes, so the last to finish wins.
#[derive(Clone)]
pub struct LocationProbe {
    geolocator: Rc<dyn Geolocator>,
    geocoder: Rc<dyn ReverseGeocoder>,
    options: PositionOptions,
    state: Rc<RefCell<ProbeState>>,
}

impl LocationProbe {
    pub fn new(geolocator: Rc<dyn Geolocator>, geocoder: Rc<dyn ReverseGeocoder>) -> Self {
        Self {
            geolocator,
            geocoder,
            options: PositionOptions::default(),
            state: Rc::new(RefCell::new(ProbeState::default())),
        }
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> ProbeState {
        self.state.borrow().clone()
    }

    pub fn location(&self) -> Option<LocationData> {
        self.state.borrow().location.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<LocationError> {
        self.state.borrow().error.clone()
    }

    /// Ask the platform for a position and resolve it to a region
    ///
    /// A missing position service records error code 0 without entering the
    /// loading state. A previously resolved location is kept on failure.
    pub async fn request_location(&self) {
        if !self.geolocator.is_supported() {
            self.state.borrow_mut().error = Some(LocationError::unsupported());
            return;
        }

        {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.error = None;
        }

        match self.geolocator.current_position(&self.options).await {
            Ok(coords) => {
                debug!(
                    latitude = coords.latitude,
                    longitude = coords.longitude,
                    "Position acquired"
                );
                let location = self.geocoder.resolve(coords).await;
                info!(region = ?location.region, "Location resolved");

                let mut state = self.state.borrow_mut();
                state.location = Some(location);
                state.loading = false;
            }
            Err(e) => {
                debug!(code = e.code(), "Position request failed: {}", e);
                let mut state = self.state.borrow_mut();
                state.error = Some(e);
                state.loading = false;
            }
        }
    }
}

impl fmt::Debug for LocationProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationProbe")
            .field("options", &self.options)
            .field("state", &self.state.borrow())
            .finish()
    }
}
