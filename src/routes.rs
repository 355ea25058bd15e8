//! Route table for the single-page app.
//!
//! DESIGN
//! ======
//! Paths and their auth requirement live here as data so the guard and the
//! session manager agree on where unauthenticated users land. Mounting the
//! page views is left to the host app's `<Router>`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const GAME_PATH: &str = "/game";
pub const RULE_PATH: &str = "/rule";

/// Where `logout` and the unauth guard send the user.
pub const LANDING_PATH: &str = AUTH_PATH;

/// A named route and its access requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

pub const ROUTES: [RouteDef; 4] = [
    RouteDef { path: HOME_PATH, name: "home", requires_auth: false },
    RouteDef { path: AUTH_PATH, name: "auth", requires_auth: false },
    RouteDef { path: GAME_PATH, name: "game", requires_auth: true },
    RouteDef { path: RULE_PATH, name: "rule", requires_auth: false },
];

/// Look up a route by exact path. A single trailing slash is ignored.
pub fn find_route(path: &str) -> Option<&'static RouteDef> {
    let normalized = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    };
    ROUTES.iter().find(|r| r.path == normalized)
}

/// Whether `path` is guarded. Unknown paths are not.
pub fn requires_auth(path: &str) -> bool {
    find_route(path).is_some_and(|r| r.requires_auth)
}
