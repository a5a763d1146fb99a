//! Dashboard Page
//!
//! Sits behind the auth gate. While the first session check is running only
//! a spinner is shown; without a session the gate redirects to sign-in.

use leptos::*;
use leptos_router::use_navigate;
use nourish::auth::{AuthGate, GateState};
use nourish::dashboard::{DashboardShell, Layout};
use nourish::routes::Route as AppRoute;
use std::rc::Rc;

use crate::components::{Header, Loading, Sidebar};
use crate::panels::ActivePanel;
use crate::state::{use_app_state, ShellHandle};

/// Widths below this use the overlay sidebar
const DESKTOP_MIN_WIDTH: f64 = 1024.0;

fn detect_layout() -> Layout {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(DESKTOP_MIN_WIDTH);
    if width < DESKTOP_MIN_WIDTH {
        Layout::Mobile
    } else {
        Layout::Desktop
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let shell = ShellHandle::new(DashboardShell::new(None, state.i18n()).with_layout(detect_layout()));
    let gate_state = create_rw_signal(GateState::default());
    let gate = store_value(None::<Rc<AuthGate>>);

    match state.identity() {
        Some(identity) => spawn_local(async move {
            let started = AuthGate::start_with_observer(identity.as_ref(), state.toasts(), move |s| {
                gate_state.try_set(s.clone());
            })
            .await;
            gate.try_set_value(Some(Rc::new(started)));
        }),
        None => gate_state.set(GateState {
            session: None,
            loading: false,
            redirect: Some(AppRoute::SignIn),
        }),
    }

    // Token refreshes keep the same user; only a different one reaches the shell
    let user = create_memo(move |_| {
        gate_state.with(|s| s.session.as_ref().map(|session| session.user.clone()))
    });
    create_effect(move |_| {
        let user = user.get();
        shell.update(|s| s.set_user(user));
    });

    create_effect(move |_| {
        let location = state.location.with(|probe| probe.location.clone());
        shell.update(|s| s.set_location(location));
    });

    create_effect(move |_| {
        if let Some(route) = gate_state.with(|s| s.redirect) {
            gate.with_value(|g| g.as_ref().map(|g| g.take_redirect()));
            navigate(route.path(), Default::default());
        }
    });

    let sign_out = Callback::new(move |_| {
        let (Some(identity), Some(gate)) = (state.identity(), gate.get_value()) else {
            return;
        };
        spawn_local(async move {
            gate.sign_out(identity.as_ref()).await;
        });
    });

    view! {
        {move || {
            if gate_state.with(|s| s.loading || s.session.is_none()) {
                view! {
                    <div class="min-h-screen flex items-center justify-center bg-emerald-50">
                        <Loading label="Loading your wellness dashboard..." />
                    </div>
                }
                    .into_view()
            } else {
                view! {
                    <div class="min-h-screen bg-emerald-50">
                        <Header shell=shell on_sign_out=sign_out />
                        <div class="flex">
                            <Sidebar shell=shell />
                            <main class="flex-1 p-4 lg:p-8 min-w-0">
                                <ActivePanel shell=shell />
                            </main>
                        </div>
                    </div>
                }
                    .into_view()
            }
        }}
    }
}
