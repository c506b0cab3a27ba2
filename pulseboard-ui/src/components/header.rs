//! Header Component
//!
//! Top bar with the sidebar toggle, brand, time range selector and avatar.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

use crate::state::global::GlobalState;
use crate::state::view::HeaderView;

/// Dashboard header
#[component]
pub fn Header(
    /// Header section of the current view
    #[prop(into)]
    header: Signal<HeaderView>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let state_for_toggle = state.clone();

    let on_range_change = move |ev: ev::Event| {
        let select = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok());
        if let Some(select) = select {
            state.set_time_range(&select.value());
        }
    };

    view! {
        <header class="bg-slate-800/50 backdrop-blur-xl border-b border-slate-700/50 sticky top-0 z-50">
            <div class="flex items-center justify-between px-6 py-4">
                <div class="flex items-center gap-4">
                    <button
                        class="p-2 hover:bg-slate-700/50 rounded-lg transition-colors"
                        on:click=move |_| state_for_toggle.toggle_sidebar()
                    >
                        {move || if header.get().sidebar_open { "✕" } else { "☰" }}
                    </button>
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-purple-600 rounded-xl flex items-center justify-center">
                            "📊"
                        </div>
                        <div>
                            <h1 class="text-xl font-bold">{move || header.get().title}</h1>
                            <p class="text-xs text-slate-400">{move || header.get().subtitle}</p>
                        </div>
                    </div>
                </div>

                <div class="flex items-center gap-3">
                    <select
                        class="bg-slate-700/50 border border-slate-600 rounded-lg px-4 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                        on:change=on_range_change
                    >
                        {move || {
                            let header = header.get();
                            header.time_ranges.into_iter().map(|option| {
                                let selected = option.id == header.time_range;
                                view! {
                                    <option value=option.id selected=selected>{option.label}</option>
                                }
                            }).collect_view()
                        }}
                    </select>
                    <div class="w-10 h-10 bg-gradient-to-br from-purple-500 to-pink-600 rounded-full flex items-center justify-center font-semibold">
                        {move || header.get().avatar}
                    </div>
                </div>
            </div>
        </header>
    }
}
