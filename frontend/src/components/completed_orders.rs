//! Read-only list of completed orders.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use sweetcrust_shared::{Order, OrderStatus};

#[component]
pub fn CompletedOrdersPage() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_orders("", Some(OrderStatus::Completed)).await {
                Ok(data) => {
                    set_orders.try_set(data);
                }
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    });

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">"Completed Orders"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <Show when=move || loading.get() && orders.with(|list| list.is_empty())>
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg"></span>
                        </div>
                    </Show>
                    <Show when=move || !loading.get() && orders.with(|list| list.is_empty())>
                        <p class="text-center py-8 text-base-content/50">
                            "No completed orders yet."
                        </p>
                    </Show>
                    <ul class="divide-y divide-base-200">
                        <For
                            each=move || orders.get()
                            key=|order| (order.id, order.order_id.clone())
                            children=move |order| {
                                view! {
                                    <li class="py-3">
                                        <p class="font-medium">
                                            {order.customer_name} " - " {order.product_ordered}
                                        </p>
                                        <p class="text-sm text-base-content/60">
                                            "Qty " {order.quantity} ", "
                                            {order.order_date.to_string()} " (Completed)"
                                        </p>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            </div>
        </div>
    }
}
