//! Sweet Crust bakery admin console.
//!
//! Context-driven layering, highest cohesion at the seams the views share:
//! - `web::route`: route definitions (domain model) and the guard
//! - `web::router`: routing service (history engine)
//! - `session`: token store and authentication state
//! - `api`: typed client for the REST backend
//! - `components`: UI layer

mod api;
mod config;
mod error;
mod session;

mod components {
    pub mod charts;
    pub mod completed_orders;
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod manage_orders;
    pub mod orders;
    pub mod signup;
}

// Browser plumbing: routing over the native History API, plus the one
// native dialog the destructive actions need.
pub(crate) mod web {
    pub mod dialog;
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::completed_orders::CompletedOrdersPage;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::Shell;
use crate::components::login::LoginPage;
use crate::components::manage_orders::ManageOrdersPage;
use crate::components::orders::OrdersPage;
use crate::components::signup::SignupPage;
use crate::session::{AuthContext, Session};
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// Maps the (already guarded) current route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::ManageOrders => view! { <ManageOrdersPage /> }.into_any(),
        AppRoute::CompletedOrders => view! { <CompletedOrdersPage /> }.into_any(),
        // The guard rewrites unknown destinations before they render; this
        // arm only exists to keep the match total.
        AppRoute::Unknown => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. One session over the browser storage areas; every consumer shares
    //    it through context.
    let session = Session::browser();
    let auth_ctx = AuthContext::new(session.clone());
    provide_context(auth_ctx);

    // 2. The API client reads the token back out of the same session at
    //    call time.
    provide_context(ApiClient::new(config::api_base_url(), session));

    // 3. The router only sees an authentication signal, not the session.
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Shell>
                <RouterOutlet matcher=route_matcher />
            </Shell>
        </Router>
    }
}
