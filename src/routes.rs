//! Client-side routes
//!
//! Navigation targets inside the single-page app. Dashboard sub-views are
//! selected by in-page state, never by the URL.

use std::fmt;

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    SignIn,
    Dashboard,
    UpdatePassword,
    NotFound,
}

impl Route {
    /// Every routable page (excluding the not-found catch-all)
    pub const ALL: [Route; 4] = [
        Route::Landing,
        Route::SignIn,
        Route::Dashboard,
        Route::UpdatePassword,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignIn => "/auth",
            Route::Dashboard => "/dashboard",
            Route::UpdatePassword => "/update-password",
            Route::NotFound => "/*any",
        }
    }

    /// Resolve a location path, ignoring query string, fragment and trailing slash
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Route::NotFound)
    }

    /// Whether the page requires a signed-in session
    pub fn requires_session(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/update-password#access_token=x"), Route::UpdatePassword);
        assert_eq!(Route::from_path("/auth?next=/dashboard"), Route::SignIn);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn test_only_dashboard_is_gated() {
        assert!(Route::Dashboard.requires_session());
        assert!(!Route::SignIn.requires_session());
    }
}
