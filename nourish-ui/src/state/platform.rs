//! Browser Platform Adapters
//!
//! `localStorage` preferences, the Geolocation API and timer-backed delays.

use async_trait::async_trait;
use nourish::location::{Coordinates, Geolocator, LocationError, LocationErrorCode, PositionOptions};
use nourish::panels::Work;
use nourish::storage::{PreferenceError, PreferenceResult, PreferenceStore};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Preferences stored in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    fn storage(&self) -> PreferenceResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| PreferenceError::Unavailable("localStorage".to_string()))
    }
}

fn js_error(e: JsValue) -> PreferenceError {
    PreferenceError::Unavailable(format!("{:?}", e))
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}

/// `navigator.geolocation`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocator;

impl BrowserGeolocator {
    fn geolocation(&self) -> Option<web_sys::Geolocation> {
        web_sys::window().and_then(|window| window.navigator().geolocation().ok())
    }
}

fn read_f64(target: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}

fn position_error(error: &JsValue) -> LocationError {
    let code = read_f64(error, "code")
        .and_then(|c| LocationErrorCode::from_code(c as u16))
        .unwrap_or(LocationErrorCode::PositionUnavailable);
    let message = js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "Unable to retrieve your location".to_string());
    LocationError::new(code, message)
}

#[async_trait(?Send)]
impl Geolocator for BrowserGeolocator {
    fn is_supported(&self) -> bool {
        self.geolocation().is_some()
    }

    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, LocationError> {
        let geolocation = self.geolocation().ok_or_else(LocationError::unsupported)?;

        let js_options = web_sys::PositionOptions::new();
        js_options.set_enable_high_accuracy(options.enable_high_accuracy);
        js_options.set_timeout(options.timeout.as_millis() as u32);
        js_options.set_maximum_age(options.maximum_age.as_millis() as u32);

        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            let reject_sync = reject.clone();
            let on_success = Closure::once_into_js(move |position: JsValue| {
                let _ = resolve.call1(&JsValue::NULL, &position);
            });
            let on_error = Closure::once_into_js(move |error: JsValue| {
                let _ = reject.call1(&JsValue::NULL, &error);
            });
            if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
                &js_options,
            ) {
                let _ = reject_sync.call1(&JsValue::NULL, &e);
            }
        });

        let position = JsFuture::from(promise).await.map_err(|e| position_error(&e))?;
        let coords = js_sys::Reflect::get(&position, &JsValue::from_str("coords"))
            .map_err(|e| position_error(&e))?;

        match (read_f64(&coords, "latitude"), read_f64(&coords, "longitude")) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
            _ => Err(LocationError::new(
                LocationErrorCode::PositionUnavailable,
                "Position had no coordinates",
            )),
        }
    }
}

/// Browser timer for simulated analyses
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

#[async_trait(?Send)]
impl Work for GlooDelay {
    async fn wait(&self, delay: Duration) {
        gloo_timers::future::TimeoutFuture::new(delay.as_millis() as u32).await;
    }
}
