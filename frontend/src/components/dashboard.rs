//! Metrics dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::charts::{StatusDonut, TopProductsChart};
use super::icons::{Cake, CircleCheck, Clock, RefreshCw, Star};
use crate::api::use_api;
use sweetcrust_shared::StatsOverview;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (stats, set_stats) = signal(Option::<StatsOverview>::None);
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_stats = move || {
        let api = api.get_value();
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match api.stats_overview().await {
                Ok(data) => {
                    set_stats.try_set(Some(data));
                }
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    // Initial load.
    Effect::new(move |_| load_stats());

    let total = move || {
        stats
            .get()
            .map(|s| s.total.to_string())
            .unwrap_or_else(|| "—".to_string())
    };
    let pending = move || {
        stats
            .get()
            .map(|s| s.pending.to_string())
            .unwrap_or_else(|| "—".to_string())
    };
    let completed = move || {
        stats
            .get()
            .map(|s| s.completed.to_string())
            .unwrap_or_else(|| "—".to_string())
    };
    let top_product = move || {
        stats
            .get()
            .and_then(|s| s.top_product)
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h1 class="text-3xl font-bold">"Welcome to Sweet Crust Bakery Admin"</h1>
                    <p class="text-base-content/70">
                        "Manage orders, monitor performance, and keep everything running smoothly."
                    </p>
                </div>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="flex items-center justify-between">
                <h2 class="text-xl font-bold">"Overview"</h2>
                <button
                    class="btn btn-ghost btn-circle"
                    disabled=move || loading.get()
                    on:click=move |_| load_stats()
                >
                    <RefreshCw attr:class=move || {
                        if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                    } />
                </button>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Cake attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"Total Orders"</div>
                    <div class="stat-value text-primary">{total}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-warning">
                        <Clock attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"Pending Orders"</div>
                    <div class="stat-value text-warning">{pending}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-success">
                        <CircleCheck attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"Completed Orders"</div>
                    <div class="stat-value text-success">{completed}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-secondary">
                        <Star attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"Top Product"</div>
                    <div class="stat-value text-secondary text-2xl">{top_product}</div>
                </div>
            </div>

            <div class="grid gap-6 md:grid-cols-2">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title text-base">"Orders by Status"</h3>
                        {move || match stats.get() {
                            Some(s) => view! { <StatusDonut data=s.by_status /> }.into_any(),
                            None => view! {
                                <div class="flex justify-center py-12">
                                    <span class="loading loading-spinner loading-lg"></span>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title text-base">"Top Products"</h3>
                        {move || match stats.get() {
                            Some(s) => view! { <TopProductsChart data=s.top_products /> }.into_any(),
                            None => view! {
                                <div class="flex justify-center py-12">
                                    <span class="loading loading-spinner loading-lg"></span>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>

            <footer class="text-center text-sm text-base-content/60 py-4">
                "© 2025 Sweet Crust Bakery. All rights reserved."
            </footer>
        </div>
    }
}
