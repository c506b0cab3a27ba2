//! Dashboard Page
//!
//! KPI cards, the revenue chart and recent activity for the current view.

use leptos::*;

use crate::components::{ActivityFeed, CardSkeleton, Loading, RevenueChart, StatCard};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let view_signal = state.view;

    move || match view_signal.get() {
        None => view! {
            <div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                    <CardSkeleton />
                    <CardSkeleton />
                    <CardSkeleton />
                    <CardSkeleton />
                </div>
                <Loading />
            </div>
        }.into_view(),
        Some(current) => {
            let chart = current.chart.clone();
            let activity = current.activity.clone();
            view! {
                <div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                        {current.stats.into_iter().map(|card| view! { <StatCard card=card /> }).collect_view()}
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <RevenueChart chart=Signal::derive(move || chart.clone()) />
                        <ActivityFeed items=Signal::derive(move || activity.clone()) />
                    </div>
                </div>
            }.into_view()
        }
    }
}
