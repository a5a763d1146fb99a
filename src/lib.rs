//! # Nourish Naturally
//!
//! Application core of a wellness and nutrition dashboard: the signed-in
//! dashboard with its nine panels, the shared localization store, the device
//! location probe and the identity boundary. The web front end in
//! `nourish-ui` and the `nourish` terminal driver both render on top of the
//! state machines defined here.
//!
//! ## Modules
//!
//! - [`dashboard`]: view set, dashboard shell and header helpers
//! - [`panels`]: the feature panels and their simulated analysis
//! - [`i18n`]: languages, translation tables and the localization store
//! - [`location`]: geolocation plus reverse geocoding
//! - [`auth`]: identity provider boundary, auth gate, password reset
//! - [`storage`]: durable key/value preferences
//! - [`routes`]: top-level navigation targets
//! - [`toast`]: transient user-visible notifications
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nourish::dashboard::{DashboardShell, DashboardView};
//! use nourish::i18n::{Language, LocalizationStore};
//! use nourish::storage::MemoryPreferences;
//! use std::rc::Rc;
//!
//! let i18n = Rc::new(LocalizationStore::restore(Rc::new(MemoryPreferences::new())));
//! i18n.set_language(Language::Hi);
//!
//! let mut shell = DashboardShell::new(None, Rc::clone(&i18n));
//! shell.select_from_sidebar(DashboardView::DiseaseLookup);
//! println!("{}", i18n.t("nav.dashboard"));
//! ```

pub mod auth;
pub mod dashboard;
pub mod i18n;
pub mod location;
pub mod panels;
pub mod routes;
pub mod storage;
pub mod toast;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod web;
