//! Application shell: top navbar and the content container every view
//! renders into.

use leptos::prelude::*;

use super::icons::{Cake, LogOut};
use crate::session::use_auth;
use crate::web::router::use_router;

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_authenticated = auth.is_authenticated_signal();

    // Clearing the token flips the auth signal; the router handles the
    // redirect to the login screen.
    let on_logout = move |_ev: web_sys::MouseEvent| auth.logout();

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-lg px-4">
                <div class="flex-1">
                    <a class="btn btn-ghost text-xl gap-2" on:click=move |_| router.navigate("/")>
                        <Cake attr:class="h-6 w-6 text-primary" />
                        "Sweet Crust Admin"
                    </a>
                </div>
                <div class="flex-none gap-1">
                    <Show when=move || !is_authenticated.get()>
                        <button class="btn btn-ghost" on:click=move |_| router.navigate("/login")>
                            "Login"
                        </button>
                        <button class="btn btn-ghost" on:click=move |_| router.navigate("/signup")>
                            "Sign Up"
                        </button>
                    </Show>
                    <Show when=move || is_authenticated.get()>
                        <button class="btn btn-ghost" on:click=move |_| router.navigate("/")>
                            "Dashboard"
                        </button>
                        <button class="btn btn-ghost" on:click=move |_| router.navigate("/orders")>
                            "Orders"
                        </button>
                        <button
                            class="btn btn-ghost"
                            on:click=move |_| router.navigate("/manage-orders")
                        >
                            "Manage Orders"
                        </button>
                        <button
                            class="btn btn-ghost"
                            on:click=move |_| router.navigate("/completed-orders")
                        >
                            "Completed"
                        </button>
                        <button class="btn btn-outline btn-error gap-2" on:click=on_logout>
                            <LogOut attr:class="h-4 w-4" />
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>

            <main class="container mx-auto p-4 md:p-8">{children()}</main>
        </div>
    }
}
