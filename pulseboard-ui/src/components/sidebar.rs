//! Sidebar Component
//!
//! Tab navigation. Only rendered while the sidebar is open.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::view::{icon_glyph, NavItem, SidebarView};

/// Sidebar with one button per tab
#[component]
pub fn Sidebar(
    #[prop(into)]
    sidebar: Signal<SidebarView>,
) -> impl IntoView {
    view! {
        <aside class="sticky top-0 h-screen w-64 bg-slate-800/30 backdrop-blur-xl border-r border-slate-700/50 p-6">
            <nav class="space-y-2 mt-8">
                {move || {
                    sidebar.get().items.into_iter().map(|item| view! {
                        <NavButton item=item />
                    }).collect_view()
                }}
            </nav>
        </aside>
    }
}

/// Individual tab button
#[component]
fn NavButton(item: NavItem) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let tab = item.id.clone();

    view! {
        <button
            class=nav_class(item.active)
            on:click=move |_| state.select_tab(&tab)
        >
            <span>{icon_glyph(&item.icon)}</span>
            <span class="font-medium">{item.label}</span>
        </button>
    }
}

fn nav_class(active: bool) -> String {
    let state_class = if active {
        "bg-gradient-to-r from-blue-500 to-purple-600 shadow-lg shadow-blue-500/25"
    } else {
        "hover:bg-slate-700/50"
    };
    format!("w-full flex items-center gap-3 px-4 py-3 rounded-xl transition-all {}", state_class)
}
