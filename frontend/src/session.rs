//! Session token lifecycle.
//!
//! The token issued at login is the only piece of client state that survives
//! a page reload. [`Session`] owns where it lives: the durable scope
//! (`localStorage`, for "remember me" logins) or the tab scope
//! (`sessionStorage`, dropped when the tab closes). Views never touch the
//! browser storage APIs directly; they go through [`AuthContext`], which also
//! feeds the router's authentication signal.

use std::sync::Arc;

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use leptos::prelude::*;

const TOKEN_KEY: &str = "sweetcrust_token";

/// One place a token can be kept. Implementations are storage only: no
/// network, no UI.
pub trait TokenScope {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn erase(&self);
}

/// Durable scope backed by `localStorage`. Survives browser restarts.
struct DurableScope;

impl TokenScope for DurableScope {
    fn read(&self) -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    fn write(&self, token: &str) {
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    fn erase(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// Tab scope backed by `sessionStorage`. Cleared by the browser when the
/// tab closes, which is what ends a non-"remember" session.
struct TabScope;

impl TokenScope for TabScope {
    fn read(&self) -> Option<String> {
        SessionStorage::get(TOKEN_KEY).ok()
    }

    fn write(&self, token: &str) {
        let _ = SessionStorage::set(TOKEN_KEY, token);
    }

    fn erase(&self) {
        SessionStorage::delete(TOKEN_KEY);
    }
}

/// The injectable token store.
///
/// Holds one scope of each kind; which one a token lands in is decided at
/// [`Session::save`] time by the `remember` flag. Reads consult both scopes
/// with the durable scope taking precedence when both are populated.
#[derive(Clone)]
pub struct Session {
    durable: Arc<dyn TokenScope + Send + Sync>,
    tab: Arc<dyn TokenScope + Send + Sync>,
}

impl Session {
    /// Session over the real browser storage areas.
    pub fn browser() -> Self {
        Self::with_scopes(Arc::new(DurableScope), Arc::new(TabScope))
    }

    /// Session over caller-supplied scopes. This is the seam the tests use.
    pub fn with_scopes(
        durable: Arc<dyn TokenScope + Send + Sync>,
        tab: Arc<dyn TokenScope + Send + Sync>,
    ) -> Self {
        Self { durable, tab }
    }

    /// Stores `token`, replacing whatever was stored before in either scope.
    /// `remember` picks the durable scope; otherwise the token dies with the
    /// tab.
    pub fn save(&self, token: &str, remember: bool) {
        // Erase both first so a re-login with a different `remember` choice
        // never leaves a stale token behind in the other scope.
        self.durable.erase();
        self.tab.erase();
        if remember {
            self.durable.write(token);
        } else {
            self.tab.write(token);
        }
    }

    /// Currently stored token, if any. The durable scope wins when both
    /// scopes hold a value.
    pub fn get(&self) -> Option<String> {
        self.durable.read().or_else(|| self.tab.read())
    }

    /// Removes the token from both scopes unconditionally.
    pub fn clear(&self) {
        self.durable.erase();
        self.tab.erase();
    }
}

// =========================================================
// Reactive bridge
// =========================================================

/// Authentication context shared through Leptos context.
///
/// Wraps the [`Session`] with a version signal so that the derived
/// `is_authenticated` signal re-reads storage on every evaluation instead of
/// caching token presence; the guard therefore always sees the store's
/// current answer. `Copy` so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Session>,
    version: RwSignal<u32>,
}

impl AuthContext {
    pub fn new(session: Session) -> Self {
        Self {
            session: StoredValue::new(session),
            version: RwSignal::new(0),
        }
    }

    /// Stores the token and notifies the reactive graph. The router reacts
    /// by re-resolving the current route.
    pub fn save(&self, token: &str, remember: bool) {
        self.session.with_value(|s| s.save(token, remember));
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    /// Logout: drops the token from both scopes and notifies the graph.
    pub fn logout(&self) {
        self.session.with_value(|s| s.clear());
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    /// Signal the router consumes for guard decisions. Each evaluation goes
    /// back to the token store.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        let version = self.version;
        Signal::derive(move || {
            version.track();
            session.with_value(|s| s.get()).is_some()
        })
    }
}

/// Fetches the [`AuthContext`] from context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory scope standing in for a browser storage area. Shared with
    /// the API client tests.
    #[derive(Default)]
    pub struct MemoryScope {
        cell: Mutex<Option<String>>,
    }

    impl TokenScope for MemoryScope {
        fn read(&self) -> Option<String> {
            self.cell.lock().unwrap().clone()
        }

        fn write(&self, token: &str) {
            *self.cell.lock().unwrap() = Some(token.to_string());
        }

        fn erase(&self) {
            *self.cell.lock().unwrap() = None;
        }
    }

    pub fn memory_session() -> (Session, Arc<MemoryScope>, Arc<MemoryScope>) {
        let durable = Arc::new(MemoryScope::default());
        let tab = Arc::new(MemoryScope::default());
        let session = Session::with_scopes(durable.clone(), tab.clone());
        (session, durable, tab)
    }

    #[test]
    fn save_then_get_round_trips_for_both_scopes() {
        for remember in [true, false] {
            let (session, _, _) = memory_session();
            session.save("abc123", remember);
            assert_eq!(session.get().as_deref(), Some("abc123"));
        }
    }

    #[test]
    fn save_picks_the_scope_matching_the_remember_flag() {
        let (session, durable, tab) = memory_session();

        session.save("durable-token", true);
        assert_eq!(durable.read().as_deref(), Some("durable-token"));
        assert_eq!(tab.read(), None);

        session.save("tab-token", false);
        assert_eq!(tab.read().as_deref(), Some("tab-token"));
        // The durable copy must be gone, not merely shadowed.
        assert_eq!(durable.read(), None);
    }

    #[test]
    fn newer_save_overwrites_regardless_of_prior_scope() {
        let (session, _, _) = memory_session();
        session.save("first", true);
        session.save("second", false);
        assert_eq!(session.get().as_deref(), Some("second"));

        session.save("third", true);
        assert_eq!(session.get().as_deref(), Some("third"));
    }

    #[test]
    fn clear_empties_both_scopes() {
        for remember in [true, false] {
            let (session, durable, tab) = memory_session();
            session.save("abc123", remember);
            session.clear();
            assert_eq!(session.get(), None);
            assert_eq!(durable.read(), None);
            assert_eq!(tab.read(), None);
        }
    }

    #[test]
    fn durable_scope_wins_when_both_are_populated() {
        // Not reachable through save(), but get() must still be
        // deterministic if the scopes diverge underneath us.
        let (session, durable, tab) = memory_session();
        durable.write("old-remembered");
        tab.write("fresh-tab");
        assert_eq!(session.get().as_deref(), Some("old-remembered"));
    }

    #[test]
    fn get_falls_back_to_whichever_scope_is_populated() {
        let (session, durable, tab) = memory_session();
        tab.write("only-tab");
        assert_eq!(session.get().as_deref(), Some("only-tab"));

        tab.erase();
        durable.write("only-durable");
        assert_eq!(session.get().as_deref(), Some("only-durable"));
    }
}
