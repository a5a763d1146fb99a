//! Global Application State
//!
//! Reactive wrappers around the core stores. Core objects are not signals
//! themselves, so they live in `StoredValue`s and a signal or trigger next to
//! each one tells Leptos when to re-render.

use leptos::*;
use nourish::auth::{GoTrueClient, GoTrueConfig};
use nourish::dashboard::DashboardShell;
use nourish::i18n::{Language, LocalizationStore};
use nourish::location::{BigDataCloudGeocoder, GeocoderConfig, LocationProbe, ProbeState};
use nourish::panels::PendingAnalysis;
use nourish::storage::PreferenceStore;
use nourish::toast::{Toast, ToastQueue};
use std::cell::Cell;
use std::rc::Rc;

use super::platform::{BrowserGeolocator, GlooDelay, LocalStoragePreferences};

/// How long a toast stays on screen
const TOAST_TIMEOUT_MS: u32 = 5000;

/// Identity service URL baked in at build time
fn identity_config() -> GoTrueConfig {
    let defaults = GoTrueConfig::default();
    GoTrueConfig {
        url: option_env!("NOURISH_IDENTITY_URL")
            .map(str::to_string)
            .unwrap_or(defaults.url),
        anon_key: option_env!("NOURISH_IDENTITY_ANON_KEY")
            .unwrap_or_default()
            .to_string(),
        ..defaults
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    i18n: StoredValue<Rc<LocalizationStore>>,
    /// Active language; the store is the source of truth, this drives re-renders
    pub language: RwSignal<Language>,
    identity: StoredValue<Option<Rc<GoTrueClient>>>,
    probe: StoredValue<Option<LocationProbe>>,
    /// Last observed state of the location probe
    pub location: RwSignal<ProbeState>,
    toasts: StoredValue<ToastQueue>,
    /// Toasts currently on screen, keyed for removal
    pub visible_toasts: RwSignal<Vec<(u64, Toast)>>,
}

/// Build the global state and provide it to the component tree
pub fn provide_app_state() {
    let storage: Rc<dyn PreferenceStore> = Rc::new(LocalStoragePreferences);
    let i18n = Rc::new(LocalizationStore::restore(Rc::clone(&storage)));
    let language = create_rw_signal(i18n.language());

    let identity = match GoTrueClient::new(identity_config(), Rc::clone(&storage)) {
        Ok(client) => Some(Rc::new(client)),
        Err(e) => {
            logging::error!("Identity client unavailable: {}", e);
            None
        }
    };

    let probe = match BigDataCloudGeocoder::new(GeocoderConfig::default()) {
        Ok(geocoder) => Some(LocationProbe::new(Rc::new(BrowserGeolocator), Rc::new(geocoder))),
        Err(e) => {
            logging::error!("Geocoder unavailable: {}", e);
            None
        }
    };

    let visible_toasts = create_rw_signal(Vec::new());
    let toasts = ToastQueue::new();
    let next_id = Rc::new(Cell::new(0u64));
    toasts.set_listener(move |toast| {
        let id = next_id.get();
        next_id.set(id + 1);
        visible_toasts.update(|list| list.push((id, toast.clone())));

        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
            visible_toasts.try_update(|list| list.retain(|(key, _)| *key != id));
        })
        .forget();
    });

    provide_context(AppState {
        i18n: store_value(i18n),
        language,
        identity: store_value(identity),
        probe: store_value(probe),
        location: create_rw_signal(ProbeState::default()),
        toasts: store_value(toasts),
        visible_toasts,
    });
}

/// Fetch the global state from context
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    /// Translate `key` in the active language (reactive)
    pub fn t(&self, key: &str) -> String {
        self.language.with(|_| ());
        self.i18n.with_value(|store| store.t(key))
    }

    pub fn i18n(&self) -> Rc<LocalizationStore> {
        self.i18n.get_value()
    }

    pub fn set_language(&self, language: Language) {
        self.i18n.with_value(|store| store.set_language(language));
        self.language.set(language);
    }

    /// Identity client, absent when it could not be built
    pub fn identity(&self) -> Option<Rc<GoTrueClient>> {
        self.identity.get_value()
    }

    pub fn toasts(&self) -> ToastQueue {
        self.toasts.get_value()
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.visible_toasts
            .update(|list| list.retain(|(key, _)| *key != id));
    }

    /// Start a location request; `location` follows the probe when it settles
    pub fn request_location(&self) {
        let Some(probe) = self.probe.get_value() else {
            self.toasts().error("Location", "Location lookup is unavailable");
            return;
        };

        let location = self.location;
        location.update(|state| {
            state.loading = true;
            state.error = None;
        });
        spawn_local(async move {
            probe.request_location().await;
            location.try_set(probe.state());
        });
    }
}

/// Reactive handle on the dashboard shell
///
/// Reads go through [`ShellHandle::with`], which subscribes the caller;
/// writes go through [`ShellHandle::update`], which wakes every reader.
#[derive(Clone, Copy)]
pub struct ShellHandle {
    shell: StoredValue<DashboardShell>,
    tick: Trigger,
}

impl ShellHandle {
    pub fn new(shell: DashboardShell) -> Self {
        Self {
            shell: store_value(shell),
            tick: create_trigger(),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&DashboardShell) -> R) -> R {
        self.tick.track();
        self.shell.with_value(f)
    }

    /// Mutate the shell and re-render; `None` once the dashboard is gone
    pub fn update<R>(&self, f: impl FnOnce(&mut DashboardShell) -> R) -> Option<R> {
        let out = self.shell.try_update_value(f);
        self.tick.try_notify();
        out
    }

    /// Run a panel's simulated analysis and re-render when it lands
    ///
    /// Results for a panel that was switched away from are dropped by the
    /// panel scope, so nothing re-renders for them.
    pub fn run<T: 'static>(&self, pending: PendingAnalysis<T>) {
        let tick = self.tick;
        spawn_local(async move {
            if pending.run(&GlooDelay).await {
                tick.try_notify();
            }
        });
    }
}
