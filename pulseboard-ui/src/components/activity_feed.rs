//! Activity Feed Component
//!
//! Recent user activity with avatar initials.

use leptos::*;

use crate::state::view::ActivityItem;

/// Recent activity list
#[component]
pub fn ActivityFeed(
    #[prop(into)]
    items: Signal<Vec<ActivityItem>>,
) -> impl IntoView {
    view! {
        <div class="bg-slate-800/50 backdrop-blur-xl rounded-2xl p-6 border border-slate-700/50">
            <h2 class="text-xl font-bold mb-6">"Recent Activity"</h2>
            <div class="space-y-4">
                {move || items.get().into_iter().map(|item| view! {
                    <div class="flex items-start gap-3 p-3 rounded-xl hover:bg-slate-700/30 transition-colors">
                        <div class="w-10 h-10 bg-gradient-to-br from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-xs font-semibold flex-shrink-0">
                            {item.initials}
                        </div>
                        <div class="flex-1 min-w-0">
                            <p class="font-medium text-sm truncate">{item.user}</p>
                            <p class="text-xs text-slate-400">{item.action}</p>
                            {item.amount.map(|amount| view! {
                                <p class="text-xs text-emerald-400 font-semibold">{amount}</p>
                            })}
                        </div>
                        <span class="text-xs text-slate-500">{item.time}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
