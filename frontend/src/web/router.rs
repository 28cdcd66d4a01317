//! Routing service.
//!
//! Wraps the History API so every `window.history` touch is concentrated in
//! this module. Navigation follows one flow — request, guard, commit,
//! render — and the guard decision itself lives in [`super::route::resolve`];
//! this service only applies it to the browser.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{resolve, AppRoute};

/// Current browser path.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Holds the current (already guarded) route in a signal and re-evaluates
/// the guard on every navigation, on history traversal, and whenever the
/// injected authentication signal flips. The signal is injected rather than
/// read from storage here, which keeps this module decoupled from the
/// session machinery.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // Guard the route the browser landed on before anything renders; a
        // deep link to a protected page must not flash its content.
        let requested = AppRoute::from_path(&current_path());
        let initial = resolve(requested, is_authenticated.get_untracked());
        if initial != requested {
            replace_history_state(initial.to_path());
        }
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate to a path, guard included.
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, requested: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();
        let resolved = resolve(requested, is_auth);

        if resolved != requested {
            if is_auth {
                web_sys::console::log_1(
                    &"[Router] Already authenticated. Redirecting to dashboard.".into(),
                );
            } else {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
            }
            // Redirects replace history so the unreachable entry never
            // becomes a back-button target.
            replace_history_state(resolved.to_path());
        } else if use_push {
            push_history_state(resolved.to_path());
        } else {
            replace_history_state(resolved.to_path());
        }

        self.set_route.set(resolved);
    }

    /// Back/forward buttons go through the guard too.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = AppRoute::from_path(&current_path());
            let resolved = resolve(requested, is_authenticated.get_untracked());
            if resolved != requested {
                replace_history_state(resolved.to_path());
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the page's life.
        closure.forget();
    }

    /// Re-resolves the current route when authentication flips: a login
    /// while on the auth screens lands on the dashboard, a logout on a
    /// protected screen falls back to login.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let current = current_route.get_untracked();
            let resolved = resolve(current, is_auth);

            if resolved != current {
                if is_auth {
                    web_sys::console::log_1(
                        &"[Router] Auth state changed: logged in, redirecting to dashboard."
                            .into(),
                    );
                } else {
                    web_sys::console::log_1(
                        &"[Router] Auth state changed: logged out, redirecting to login.".into(),
                    );
                }
                push_history_state(resolved.to_path());
                set_route.set(resolved);
            }
        });
    }
}

/// Provides the router service via context and wires its listeners.
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// Fetches the router service from context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Navigation closure for event handlers.
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component; mount once at the top of the app.
#[component]
pub fn Router(
    /// Authentication signal consumed by the guard.
    is_authenticated: Signal<bool>,
    /// Child components.
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders the view matching the current route.
#[component]
pub fn RouterOutlet(
    /// Route matching function: current route in, view out.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
