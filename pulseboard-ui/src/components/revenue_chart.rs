//! Revenue Chart Component
//!
//! Monthly revenue as CSS bars with hover tooltips.

use leptos::*;

use crate::state::view::ChartView;

/// Bar chart of the session's monthly revenue
#[component]
pub fn RevenueChart(
    #[prop(into)]
    chart: Signal<ChartView>,
) -> impl IntoView {
    view! {
        <div class="lg:col-span-2 bg-slate-800/50 backdrop-blur-xl rounded-2xl p-6 border border-slate-700/50">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-bold">{move || chart.get().title}</h2>
                <div class="flex gap-2">
                    {move || chart.get().periods.into_iter().map(|period| view! {
                        <button class="px-4 py-2 text-sm rounded-lg hover:bg-slate-700/50 transition-colors">
                            {period}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            <div class="h-64 flex items-end justify-between gap-2">
                {move || chart.get().bars.into_iter().map(|bar| view! {
                    <div
                        class="flex-1 bg-gradient-to-t from-blue-500 to-purple-600 rounded-t-lg relative group cursor-pointer"
                        style=format!("height: {}%", bar.height_percent)
                    >
                        <div class="absolute -top-8 left-1/2 -translate-x-1/2 bg-slate-900 px-2 py-1 rounded text-xs opacity-0 group-hover:opacity-100 transition-opacity whitespace-nowrap">
                            {bar.tooltip}
                        </div>
                        <div class="absolute -bottom-6 left-1/2 -translate-x-1/2 text-xs text-slate-400">
                            {bar.month}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
