//! Account creation screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Eye, EyeOff};
use crate::api::use_api;
use crate::web::router::use_router;
use sweetcrust_shared::DEFAULT_ROLE;

/// How long the success message stays up before moving on to login.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[component]
pub fn SignupPage() -> impl IntoView {
    let router = use_router();
    let api = StoredValue::new(use_api());

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (show_confirm, set_show_confirm) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);

        let username = username.get_untracked().trim().to_string();
        let password = password.get_untracked().trim().to_string();
        let confirm = confirm.get_untracked().trim().to_string();

        if username.is_empty() || password.is_empty() || confirm.is_empty() {
            set_error_msg.set(Some("All fields are required.".to_string()));
            return;
        }
        if password != confirm {
            set_error_msg.set(Some("Passwords do not match.".to_string()));
            return;
        }

        set_is_submitting.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.register(&username, &password, DEFAULT_ROLE).await {
                Ok(_) => {
                    set_success_msg.try_set(Some(
                        "Account created successfully! Redirecting to login...".to_string(),
                    ));
                    set_is_submitting.try_set(false);
                    // Signup never stores a token; the new account signs in
                    // through the login screen.
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    router.navigate("/login");
                }
                Err(err) => {
                    set_error_msg.try_set(Some(err.to_string()));
                    set_is_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="hero py-12">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="card-title">"Sign Up"</h2>

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
                            <label class="label" for="signup-username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="signup-username"
                                type="text"
                                class="input input-bordered w-full"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="signup-password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="signup-password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    class="input input-bordered join-item flex-1"
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

                        <div class="form-control">
                            <label class="label" for="signup-confirm">
                                <span class="label-text">"Confirm Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="signup-confirm"
                                    type=move || if show_confirm.get() { "text" } else { "password" }
                                    class="input input-bordered join-item flex-1"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| set_show_confirm.update(|v| *v = !*v)
                                >
                                    {move || {
                                        if show_confirm.get() {
                                            view! { <EyeOff attr:class="h-4 w-4" /> }.into_any()
                                        } else {
                                            view! { <Eye attr:class="h-4 w-4" /> }.into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Creating..."
                                        }
                                        .into_any()
                                    } else {
                                        "Sign Up".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <p class="text-sm mt-2">
                            "Already have an account? "
                            <button
                                type="button"
                                class="btn btn-link btn-sm px-0 align-baseline"
                                on:click=move |_| router.navigate("/login")
                            >
                                "Login here"
                            </button>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
