//! State Management
//!
//! Global application state plus the browser implementations of the core's
//! platform seams (preferences, geolocation, timers).

pub mod global;
pub mod platform;

pub use global::{provide_app_state, use_app_state, AppState, ShellHandle};
pub use platform::{BrowserGeolocator, GlooDelay, LocalStoragePreferences};
