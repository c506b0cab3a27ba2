//! Stat Card Component
//!
//! One KPI with its value and trend badge.

use leptos::*;

use crate::state::view::{icon_glyph, StatCard as Card, Trend};

/// KPI card
#[component]
pub fn StatCard(card: Card) -> impl IntoView {
    let (arrow, badge_class) = trend_badge(card.trend);

    view! {
        <div class="bg-slate-800/50 backdrop-blur-xl rounded-2xl p-6 border border-slate-700/50 hover:border-slate-600/50 transition-all">
            <div class="flex items-start justify-between mb-4">
                <div class=format!("w-12 h-12 bg-gradient-to-br {} rounded-xl flex items-center justify-center", card.accent)>
                    {icon_glyph(&card.icon)}
                </div>
                <div class=format!("flex items-center gap-1 px-2 py-1 rounded-lg text-xs font-semibold {}", badge_class)>
                    {arrow}
                    {card.change}
                </div>
            </div>
            <div>
                <p class="text-slate-400 text-sm mb-1">{card.label}</p>
                <p class="text-3xl font-bold">{card.value}</p>
            </div>
        </div>
    }
}

fn trend_badge(trend: Trend) -> (&'static str, &'static str) {
    match trend {
        Trend::Up => ("↗", "bg-emerald-500/20 text-emerald-400"),
        Trend::Down => ("↘", "bg-red-500/20 text-red-400"),
    }
}
