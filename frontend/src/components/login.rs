//! Login screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Eye, EyeOff};
use crate::api::use_api;
use crate::session::use_auth;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let api = StoredValue::new(use_api());

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (show_password, set_show_password) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);

        let username = username.get_untracked().trim().to_string();
        let password = password.get_untracked().trim().to_string();
        if username.is_empty() || password.is_empty() {
            // Blocked client-side; no request goes out.
            set_error_msg.set(Some("Please fill in both username and password.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        let api = api.get_value();
        let remember = remember.get_untracked();
        spawn_local(async move {
            match api.login(&username, &password).await {
                Ok(res) if !res.token.is_empty() => {
                    set_success_msg.try_set(Some("Login successful! Redirecting...".to_string()));
                    // Saving the token flips the auth signal; the router
                    // takes over and lands on the dashboard.
                    auth.save(&res.token, remember);
                }
                Ok(_) => {
                    set_error_msg.try_set(Some("Unexpected response from server.".to_string()));
                }
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                }
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero py-12">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">"Login"</h2>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || success_msg.get().is_some()>
                            <div role="alert" class="alert alert-success text-sm py-2">
                                <span>{move || success_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    class="input input-bordered join-item flex-1"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                                >
                                    {move || {
                                        if show_password.get() {
                                            view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                                        } else {
                                            view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        </div>

                        <label class="label cursor-pointer justify-start gap-2">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-sm"
                                prop:checked=remember
                                on:change=move |ev| set_remember.set(event_target_checked(&ev))
                            />
                            <span class="label-text">"Remember me"</span>
                        </label>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Logging in..."
                                        }
                                        .into_any()
                                    } else {
                                        "Login".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <p class="text-sm mt-2">
                            "Don't have an account? "
                            <button
                                type="button"
                                class="btn btn-link btn-sm px-0 align-baseline"
                                on:click=move |_| router.navigate("/signup")
                            >
                                "Sign up here"
                            </button>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
