//! Order search, creation and editing.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Check, Pencil, Plus, Trash2, X};
use crate::api::use_api;
use crate::web::dialog::confirm;
use sweetcrust_shared::{Order, OrderStatus};

/// Editable order fields, held as the raw strings the inputs produce. One
/// instance backs both the create modal and the inline row editor.
#[derive(Clone, Default, PartialEq)]
struct OrderForm {
    order_id: String,
    customer_name: String,
    product_ordered: String,
    quantity: String,
    order_date: String,
    order_status: OrderStatus,
    total_price: String,
}

impl OrderForm {
    fn from_order(order: &Order) -> Self {
        Self {
            order_id: order.order_id.clone(),
            customer_name: order.customer_name.clone(),
            product_ordered: order.product_ordered.clone(),
            quantity: order.quantity.to_string(),
            // ISO yyyy-mm-dd, which is also what <input type="date"> holds.
            order_date: order.order_date.to_string(),
            order_status: order.order_status,
            total_price: order
                .total_price
                .map(|price| price.to_string())
                .unwrap_or_default(),
        }
    }

    /// Presence check first; a failure here means no request leaves the
    /// client. The numeric and date parses are what the typed wire format
    /// requires on top of presence.
    fn to_order(&self, id: Option<i64>) -> Result<Order, String> {
        let order_id = self.order_id.trim();
        let customer_name = self.customer_name.trim();
        let product_ordered = self.product_ordered.trim();
        let quantity = self.quantity.trim();
        let order_date = self.order_date.trim();

        if order_id.is_empty()
            || customer_name.is_empty()
            || product_ordered.is_empty()
            || quantity.is_empty()
            || order_date.is_empty()
        {
            return Err("Please fill all required fields".to_string());
        }

        let quantity: u32 = quantity
            .parse()
            .map_err(|_| "Quantity must be a whole number.".to_string())?;
        let order_date: NaiveDate = order_date
            .parse()
            .map_err(|_| "Order date must be a valid date.".to_string())?;
        let total_price = match self.total_price.trim() {
            "" => None,
            raw => Some(
                raw.parse::<f64>()
                    .map_err(|_| "Total price must be a number.".to_string())?,
            ),
        };

        Ok(Order {
            id,
            order_id: order_id.to_string(),
            customer_name: customer_name.to_string(),
            product_ordered: product_ordered.to_string(),
            quantity,
            order_date,
            order_status: self.order_status,
            total_price,
        })
    }
}

/// Input handler writing one form field through a field setter.
fn bind_input(
    form: RwSignal<OrderForm>,
    apply: fn(&mut OrderForm, String),
) -> impl Fn(web_sys::Event) + Copy {
    move |ev: web_sys::Event| form.update(|state| apply(state, event_target_value(&ev)))
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let api = StoredValue::new(use_api());

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (q, set_q) = signal(String::new());
    let (status_filter, set_status_filter) = signal(String::new());
    let (show_create, set_show_create) = signal(false);
    let (edit_id, set_edit_id) = signal(Option::<i64>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);
    let form = RwSignal::new(OrderForm::default());

    let load_orders = move || {
        let api = api.get_value();
        let q = q.get_untracked().trim().to_string();
        let status = OrderStatus::parse(&status_filter.get_untracked());
        set_loading.set(true);
        spawn_local(async move {
            match api.list_orders(&q, status).await {
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

    // Refetch whenever the search text or the status filter changes; this
    // also covers the initial load.
    Effect::new(move |_| {
        q.track();
        status_filter.track();
        load_orders();
    });

    let open_create = move |_ev: web_sys::MouseEvent| {
        form.set(OrderForm::default());
        set_edit_id.set(None);
        set_error_msg.set(None);
        set_show_create.set(true);
    };

    let close_create = move |_ev: web_sys::MouseEvent| {
        set_show_create.set(false);
        set_error_msg.set(None);
    };

    let handle_create = move |_ev: web_sys::MouseEvent| {
        set_error_msg.set(None);
        match form.get_untracked().to_order(None) {
            Err(msg) => set_error_msg.set(Some(msg)),
            Ok(order) => {
                let api = api.get_value();
                spawn_local(async move {
                    match api.create_order(&order).await {
                        Ok(_) => {
                            set_show_create.try_set(false);
                            form.try_set(OrderForm::default());
                            load_orders();
                        }
                        Err(err) => {
                            set_error_msg.try_set(Some(err.to_string()));
                        }
                    }
                });
            }
        }
    };

    let cancel_edit = move |_ev: web_sys::MouseEvent| {
        set_edit_id.set(None);
        form.set(OrderForm::default());
    };

    let save_edit = move |_ev: web_sys::MouseEvent| {
        let Some(id) = edit_id.get_untracked() else {
            return;
        };
        set_error_msg.set(None);
        match form.get_untracked().to_order(Some(id)) {
            Err(msg) => set_error_msg.set(Some(msg)),
            Ok(order) => {
                let api = api.get_value();
                spawn_local(async move {
                    match api.update_order(id, &order).await {
                        Ok(_) => {
                            set_edit_id.try_set(None);
                            form.try_set(OrderForm::default());
                            load_orders();
                        }
                        Err(err) => {
                            set_error_msg.try_set(Some(err.to_string()));
                        }
                    }
                });
            }
        }
    };

    // Confirmation gates the request; a failed delete leaves the list as it
    // was (the reload only happens on success).
    let handle_delete = move |id: i64| {
        if !confirm("Delete this order?") {
            return;
        }
        set_error_msg.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api.delete_order(id).await {
                Ok(()) => load_orders(),
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold">"Orders Management"</h1>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="flex flex-wrap gap-2">
                <input
                    type="text"
                    placeholder="Search"
                    class="input input-bordered flex-1 min-w-48"
                    on:input=move |ev| set_q.set(event_target_value(&ev))
                    prop:value=q
                />
                <select
                    class="select select-bordered"
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    prop:value=status_filter
                >
                    <option value="">"All Statuses"</option>
                    <option value="Pending">"Pending"</option>
                    <option value="Completed">"Completed"</option>
                </select>
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus attr:class="h-4 w-4" />
                    "Create New Order"
                </button>
            </div>

            // Create-order modal.
            <div class=move || if show_create.get() { "modal modal-open" } else { "modal" }>
                <div class="modal-box">
                    <h3 class="font-bold text-lg mb-2">"Create New Order"</h3>

                    <Show when=move || show_create.get() && error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="flex flex-col gap-2">
                        <input
                            type="text"
                            placeholder="Order ID"
                            class="input input-bordered w-full"
                            on:input=bind_input(form, |f, v| f.order_id = v)
                            prop:value=move || form.with(|f| f.order_id.clone())
                        />
                        <input
                            type="text"
                            placeholder="Customer Name"
                            class="input input-bordered w-full"
                            on:input=bind_input(form, |f, v| f.customer_name = v)
                            prop:value=move || form.with(|f| f.customer_name.clone())
                        />
                        <input
                            type="text"
                            placeholder="Product Ordered"
                            class="input input-bordered w-full"
                            on:input=bind_input(form, |f, v| f.product_ordered = v)
                            prop:value=move || form.with(|f| f.product_ordered.clone())
                        />
                        <input
                            type="number"
                            min="1"
                            placeholder="Quantity"
                            class="input input-bordered w-full"
                            on:input=bind_input(form, |f, v| f.quantity = v)
                            prop:value=move || form.with(|f| f.quantity.clone())
                        />
                        <input
                            type="date"
                            class="input input-bordered w-full"
                            on:input=bind_input(form, |f, v| f.order_date = v)
                            prop:value=move || form.with(|f| f.order_date.clone())
                        />
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            placeholder="Total Price"
                            class="input input-bordered w-full"
                            on:input=bind_input(form, |f, v| f.total_price = v)
                            prop:value=move || form.with(|f| f.total_price.clone())
                        />
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                form.update(|f| {
                                    f.order_status = OrderStatus::parse(&event_target_value(&ev))
                                        .unwrap_or_default()
                                })
                            }
                            prop:value=move || form.with(|f| f.order_status.to_string())
                        >
                            <option value="Pending">"Pending"</option>
                            <option value="Completed">"Completed"</option>
                        </select>
                    </div>

                    <div class="modal-action">
                        <button class="btn" on:click=close_create>"Cancel"</button>
                        <button class="btn btn-primary" on:click=handle_create>"Save"</button>
                    </div>
                </div>
            </div>

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
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || {
                                !loading.get() && orders.with(|list| list.is_empty())
                            }>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
                                        "No orders found."
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || loading.get() && orders.with(|list| list.is_empty())>
                                <tr>
                                    <td colspan="7" class="text-center py-8 text-base-content/50">
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
                                    let order_for_edit = order.clone();
                                    let is_editing = move || {
                                        row_id.is_some() && edit_id.get() == row_id
                                    };

                                    view! {
                                        <tr>
                                            {move || {
                                                if is_editing() {
                                                    view! {
                                                        <td>
                                                            <input
                                                                type="text"
                                                                class="input input-bordered input-sm w-24"
                                                                on:input=bind_input(form, |f, v| f.order_id = v)
                                                                prop:value=move || form.with(|f| f.order_id.clone())
                                                            />
                                                        </td>
                                                        <td>
                                                            <input
                                                                type="text"
                                                                class="input input-bordered input-sm w-32"
                                                                on:input=bind_input(form, |f, v| f.customer_name = v)
                                                                prop:value=move || form.with(|f| f.customer_name.clone())
                                                            />
                                                        </td>
                                                        <td>
                                                            <input
                                                                type="text"
                                                                class="input input-bordered input-sm w-32"
                                                                on:input=bind_input(form, |f, v| f.product_ordered = v)
                                                                prop:value=move || form.with(|f| f.product_ordered.clone())
                                                            />
                                                        </td>
                                                        <td>
                                                            <input
                                                                type="number"
                                                                min="1"
                                                                class="input input-bordered input-sm w-20"
                                                                on:input=bind_input(form, |f, v| f.quantity = v)
                                                                prop:value=move || form.with(|f| f.quantity.clone())
                                                            />
                                                        </td>
                                                        <td>
                                                            <input
                                                                type="date"
                                                                class="input input-bordered input-sm"
                                                                on:input=bind_input(form, |f, v| f.order_date = v)
                                                                prop:value=move || form.with(|f| f.order_date.clone())
                                                            />
                                                        </td>
                                                        <td>
                                                            <select
                                                                class="select select-bordered select-sm"
                                                                on:change=move |ev| {
                                                                    form.update(|f| {
                                                                        f.order_status = OrderStatus::parse(
                                                                                &event_target_value(&ev),
                                                                            )
                                                                            .unwrap_or_default()
                                                                    })
                                                                }
                                                                prop:value=move || {
                                                                    form.with(|f| f.order_status.to_string())
                                                                }
                                                            >
                                                                <option value="Pending">"Pending"</option>
                                                                <option value="Completed">"Completed"</option>
                                                            </select>
                                                        </td>
                                                        <td class="whitespace-nowrap">
                                                            <button
                                                                class="btn btn-ghost btn-sm text-success"
                                                                title="Save"
                                                                on:click=save_edit
                                                            >
                                                                <Check attr:class="h-4 w-4" />
                                                            </button>
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                title="Cancel"
                                                                on:click=cancel_edit
                                                            >
                                                                <X attr:class="h-4 w-4" />
                                                            </button>
                                                        </td>
                                                    }
                                                        .into_any()
                                                } else {
                                                    let order = order_for_edit.clone();
                                                    let start_edit_order = order.clone();
                                                    let start_edit = move |_ev: web_sys::MouseEvent| {
                                                        set_error_msg.set(None);
                                                        set_show_create.set(false);
                                                        set_edit_id.set(start_edit_order.id);
                                                        form.set(OrderForm::from_order(&start_edit_order));
                                                    };
                                                    let status_badge = if order.order_status
                                                        == OrderStatus::Pending
                                                    {
                                                        "badge badge-warning"
                                                    } else {
                                                        "badge badge-success"
                                                    };

                                                    view! {
                                                        <td>{order.order_id}</td>
                                                        <td>{order.customer_name}</td>
                                                        <td>{order.product_ordered}</td>
                                                        <td>{order.quantity}</td>
                                                        <td>{order.order_date.to_string()}</td>
                                                        <td>
                                                            <span class=status_badge>
                                                                {order.order_status.to_string()}
                                                            </span>
                                                        </td>
                                                        <td class="whitespace-nowrap">
                                                            <button
                                                                class="btn btn-ghost btn-sm"
                                                                title="Edit"
                                                                disabled=row_id.is_none()
                                                                on:click=start_edit
                                                            >
                                                                <Pencil attr:class="h-4 w-4" />
                                                            </button>
                                                            <button
                                                                class="btn btn-ghost btn-sm text-error"
                                                                title="Delete"
                                                                disabled=row_id.is_none()
                                                                on:click=move |_| {
                                                                    if let Some(id) = row_id {
                                                                        handle_delete(id);
                                                                    }
                                                                }
                                                            >
                                                                <Trash2 attr:class="h-4 w-4" />
                                                            </button>
                                                        </td>
                                                    }
                                                        .into_any()
                                                }
                                            }}
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

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> OrderForm {
        OrderForm {
            order_id: "ORD-1001".into(),
            customer_name: "Alice".into(),
            product_ordered: "Cake".into(),
            quantity: "2".into(),
            order_date: "2025-08-14".into(),
            order_status: OrderStatus::Pending,
            total_price: "24.50".into(),
        }
    }

    #[test]
    fn complete_form_converts_to_a_typed_order() {
        let order = filled_form().to_order(None).unwrap();
        assert_eq!(order.id, None);
        assert_eq!(order.quantity, 2);
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2025, 8, 14).unwrap());
        assert_eq!(order.total_price, Some(24.5));
    }

    #[test]
    fn missing_order_date_blocks_submission() {
        let mut form = filled_form();
        form.order_date = String::new();
        assert_eq!(
            form.to_order(None).unwrap_err(),
            "Please fill all required fields"
        );
    }

    #[test]
    fn every_required_field_is_checked_for_presence() {
        for clear in [
            (|f: &mut OrderForm| f.order_id.clear()) as fn(&mut OrderForm),
            |f| f.customer_name.clear(),
            |f| f.product_ordered.clear(),
            |f| f.quantity.clear(),
            |f| f.order_date.clear(),
        ] {
            let mut form = filled_form();
            clear(&mut form);
            assert_eq!(
                form.to_order(None).unwrap_err(),
                "Please fill all required fields"
            );
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut form = filled_form();
        form.customer_name = "   ".into();
        assert_eq!(
            form.to_order(None).unwrap_err(),
            "Please fill all required fields"
        );
    }

    #[test]
    fn unparseable_quantity_and_date_are_rejected() {
        let mut form = filled_form();
        form.quantity = "lots".into();
        assert!(form.to_order(None).unwrap_err().contains("Quantity"));

        let mut form = filled_form();
        form.order_date = "next tuesday".into();
        assert!(form.to_order(None).unwrap_err().contains("Order date"));
    }

    #[test]
    fn total_price_is_optional() {
        let mut form = filled_form();
        form.total_price = String::new();
        assert_eq!(form.to_order(None).unwrap().total_price, None);
    }

    #[test]
    fn form_round_trips_an_existing_order() {
        let order = filled_form().to_order(Some(7)).unwrap();
        let rebuilt = OrderForm::from_order(&order).to_order(Some(7)).unwrap();
        assert_eq!(order, rebuilt);
    }
}
