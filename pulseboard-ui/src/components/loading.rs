//! Loading Component
//!
//! Spinners and skeleton states shown until the first view arrives.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for stat cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-slate-800/50 rounded-2xl p-6 animate-pulse">
            <div class="h-12 w-12 bg-slate-700 rounded-xl mb-4" />
            <div class="h-4 bg-slate-700 rounded w-1/3 mb-2" />
            <div class="h-8 bg-slate-700 rounded w-1/2" />
        </div>
    }
}
