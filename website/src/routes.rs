// Client-side route table

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Every page the router knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    About,
}

impl Route {
    /// Registration order of the router.
    pub const ALL: [Route; 2] = [Route::Landing, Route::About];

    pub const fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::About => "/about",
        }
    }

    /// Resolve a browser path to a page.
    ///
    /// Query strings, fragments and a single trailing slash are ignored.
    /// Anything else that is not in [`Route::ALL`] resolves to `None`,
    /// which the router turns into a redirect to [`Route::Landing`].
    pub fn from_path(raw: &str) -> Option<Route> {
        let path = raw.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(trimmed) => trimmed,
        };
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Logs every location change. Must sit inside the `<Router>`.
#[component]
pub fn RouteTracker() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        match Route::from_path(&path) {
            Some(route) => tracing::debug!(?route, %path, "route changed"),
            None => tracing::info!(%path, "unknown path, redirecting to landing page"),
        }
    });
}
