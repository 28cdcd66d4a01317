//! Route domain model.
//!
//! Pure business logic, no DOM or `web_sys` dependency. Defines the
//! application's destinations and the guard that decides which of them a
//! viewer may actually land on.

use std::fmt::Display;

/// Application destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Login form (default destination for signed-out viewers).
    #[default]
    Login,
    /// Account creation form.
    Signup,
    /// Metrics dashboard; the home destination once signed in.
    Dashboard,
    /// Order search, creation and editing.
    Orders,
    /// Pending-order work queue.
    ManageOrders,
    /// Read-only list of completed orders.
    CompletedOrders,
    /// Any path we do not recognize. Never rendered: the guard folds it
    /// into `Login` or `Dashboard`.
    Unknown,
}

impl AppRoute {
    /// Parses a URL path into a destination.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Dashboard,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/orders" => Self::Orders,
            "/manage-orders" => Self::ManageOrders,
            "/completed-orders" => Self::CompletedOrders,
            _ => Self::Unknown,
        }
    }

    /// URL path for a destination. `Unknown` normalizes to the root; the
    /// guard has already rewritten it by the time a path is needed.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/",
            Self::Orders => "/orders",
            Self::ManageOrders => "/manage-orders",
            Self::CompletedOrders => "/completed-orders",
            Self::Unknown => "/",
        }
    }

    /// Whether this destination is part of the signed-in view set.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Orders | Self::ManageOrders | Self::CompletedOrders
        )
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// The route guard.
///
/// Total function from a requested destination and the current
/// authentication answer to the destination that actually loads:
///
/// - signed out: only `Login` and `Signup` pass through; everything else,
///   unknown paths included, falls back to `Login`;
/// - signed in: the auth screens and unknown paths fall forward to
///   `Dashboard`; the admin destinations pass through.
///
/// Every navigation source (initial load, link clicks, history buttons,
/// auth-state flips) funnels through this one function.
pub fn resolve(requested: AppRoute, authenticated: bool) -> AppRoute {
    if !authenticated {
        return match requested {
            AppRoute::Login | AppRoute::Signup => requested,
            _ => AppRoute::Login,
        };
    }
    match requested {
        AppRoute::Login | AppRoute::Signup | AppRoute::Unknown => AppRoute::Dashboard,
        admin => admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppRoute; 7] = [
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Dashboard,
        AppRoute::Orders,
        AppRoute::ManageOrders,
        AppRoute::CompletedOrders,
        AppRoute::Unknown,
    ];

    #[test]
    fn signed_out_viewers_only_reach_the_auth_screens() {
        for requested in ALL {
            let resolved = resolve(requested, false);
            match requested {
                AppRoute::Login | AppRoute::Signup => assert_eq!(resolved, requested),
                _ => assert_eq!(resolved, AppRoute::Login, "{requested:?} should gate to login"),
            }
        }
    }

    #[test]
    fn signed_in_viewers_are_bounced_off_the_auth_screens() {
        assert_eq!(resolve(AppRoute::Login, true), AppRoute::Dashboard);
        assert_eq!(resolve(AppRoute::Signup, true), AppRoute::Dashboard);
        assert_eq!(resolve(AppRoute::Unknown, true), AppRoute::Dashboard);
    }

    #[test]
    fn signed_in_viewers_reach_every_admin_destination() {
        for requested in [
            AppRoute::Dashboard,
            AppRoute::Orders,
            AppRoute::ManageOrders,
            AppRoute::CompletedOrders,
        ] {
            assert_eq!(resolve(requested, true), requested);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        for requested in ALL {
            for authenticated in [false, true] {
                let once = resolve(requested, authenticated);
                assert_eq!(resolve(once, authenticated), once);
            }
        }
    }

    #[test]
    fn root_path_is_the_dashboard_destination() {
        // "/" belongs to the signed-in view set; signed out it resolves to
        // the login screen rather than rendering anything at the root.
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(resolve(AppRoute::from_path("/"), false), AppRoute::Login);
        assert_eq!(resolve(AppRoute::from_path("/"), true), AppRoute::Dashboard);
    }

    #[test]
    fn unrecognized_paths_parse_to_unknown() {
        for path in ["/admin", "/orders/42", "/LOGIN", ""] {
            assert_eq!(AppRoute::from_path(path), AppRoute::Unknown);
        }
    }

    #[test]
    fn paths_round_trip_for_rendered_destinations() {
        for route in ALL {
            if route != AppRoute::Unknown {
                assert_eq!(AppRoute::from_path(route.to_path()), route);
            }
        }
    }
}
