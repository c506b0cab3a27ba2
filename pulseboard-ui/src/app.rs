//! App Root Component
//!
//! Mounts the dashboard shell and wires up the live connection.

use leptos::*;

use crate::api;
use crate::components::{Header, Sidebar, Toast};
use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::websocket::init_websocket;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");
    init_websocket(state.clone(), &api::get_api_base());

    // Paint a snapshot while the socket is still connecting
    let state_for_fetch = state.clone();
    spawn_local(async move {
        match api::fetch_dashboard().await {
            Ok(view) => {
                if state_for_fetch.view.get_untracked().is_none() {
                    state_for_fetch.set_view(view);
                }
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("Initial dashboard fetch failed: {}", e).into());
            }
        }
    });

    let view_signal = state.view;
    let header = Signal::derive(move || view_signal.get().map(|v| v.header));
    let sidebar = Signal::derive(move || view_signal.get().and_then(|v| v.sidebar));

    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 text-white">
            {move || header.get().map(|h| view! { <Header header=Signal::derive(move || h.clone()) /> })}

            <div class="flex">
                {move || sidebar.get().map(|s| view! { <Sidebar sidebar=Signal::derive(move || s.clone()) /> })}

                <main class="flex-1 p-6 pb-24">
                    <Dashboard />
                </main>
            </div>

            <Footer />
            <Toast />
        </div>
    }
}

/// Footer component showing connection status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-slate-800/80 border-t border-slate-700/50 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {move || {
                        if state.ws_connected.get() {
                            view! {
                                <span class="flex items-center space-x-1 text-emerald-400">
                                    <span class="w-2 h-2 bg-emerald-400 rounded-full pulse" />
                                    <span>"Live"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Disconnected"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                <div class="text-slate-400">
                    {move || {
                        let tick = state.view.get().map(|v| v.tick).unwrap_or(0);
                        state.last_update.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Tick {} at {}", tick, dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Waiting for data".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}
