//! Pending-order work queue.
//!
//! Lists the orders still waiting on the bakery and offers the two actions
//! staff take from here: mark one completed, or drop it entirely.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Check, Trash2};
use crate::api::use_api;
use crate::web::dialog::confirm;
use sweetcrust_shared::{Order, OrderStatus};

#[component]
pub fn ManageOrdersPage() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    let load_orders = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_orders("", Some(OrderStatus::Pending)).await {
                Ok(data) => {
                    set_orders.try_set(data);
                }
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    Effect::new(move |_| load_orders());

    // Flips the status server-side first; the row only leaves the queue
    // once the backend has accepted the change.
    let handle_complete = move |order: Order| {
        let Some(id) = order.id else {
            return;
        };
        set_error_msg.set(None);
        let api = api.get_value();
        let mut updated = order;
        updated.order_status = OrderStatus::Completed;
        spawn_local(async move {
            match api.update_order(id, &updated).await {
                Ok(_) => {
                    set_orders.try_update(|list| list.retain(|o| o.id != Some(id)));
                }
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        if !confirm("Delete this order?") {
            return;
        }
        set_error_msg.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_order(id).await {
                Ok(()) => {
                    set_orders.try_update(|list| list.retain(|o| o.id != Some(id)));
                }
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">"Manage Orders"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0 overflow-x-auto">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Order ID"</th>
                                <th>"Customer"</th>
                                <th>"Product"</th>
                                <th>"Qty"</th>
                                <th>"Date"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || {
                                !loading.get() && orders.with(|list| list.is_empty())
                            }>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        "Nothing pending. All caught up."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || loading.get() && orders.with(|list| list.is_empty())>
                                <tr>
                                    <td colspan="6" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Loading..."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || orders.get()
                                key=|order| (order.id, order.order_id.clone())
                                children=move |order| {
                                    let row_id = order.id;
                                    let order_for_complete = order.clone();
                                    view! {
                                        <tr>
                                            <td>{order.order_id}</td>
                                            <td>{order.customer_name}</td>
                                            <td>{order.product_ordered}</td>
                                            <td>{order.quantity}</td>
                                            <td>{order.order_date.to_string()}</td>
                                            <td class="whitespace-nowrap">
                                                <button
                                                    class="btn btn-success btn-sm gap-1 mr-1"
                                                    disabled=row_id.is_none()
                                                    on:click=move |_| {
                                                        handle_complete(order_for_complete.clone())
                                                    }
                                                >
                                                    <Check attr:class="h-4 w-4" />
                                                    "Complete"
                                                </button>
                                                <button
                                                    class="btn btn-outline btn-error btn-sm gap-1"
                                                    disabled=row_id.is_none()
                                                    on:click=move |_| {
                                                        if let Some(id) = row_id {
                                                            handle_delete(id);
                                                        }
                                                    }
                                                >
                                                    <Trash2 attr:class="h-4 w-4" />
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
