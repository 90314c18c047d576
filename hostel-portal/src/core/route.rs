//! Portal pages
//!
//! A session is constructed with the page it was mounted on; business logic
//! never inspects a raw path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    Login,
    AdminDashboard,
    StudentDashboard,
    Facilities,
    OurHostels,
    BoysHostel,
    GirlsHostel,
    ContactUs,
    Rules,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::Login,
        Route::AdminDashboard,
        Route::StudentDashboard,
        Route::Facilities,
        Route::OurHostels,
        Route::BoysHostel,
        Route::GirlsHostel,
        Route::ContactUs,
        Route::Rules,
    ];

    /// Page file backing the route
    pub fn file_name(&self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::Login => "login.html",
            Route::AdminDashboard => "admin-dashboard.html",
            Route::StudentDashboard => "student-dashboard.html",
            Route::Facilities => "facilities.html",
            Route::OurHostels => "our-Hostels.html",
            Route::BoysHostel => "boys-hostel.html",
            Route::GirlsHostel => "girl-hostel.html",
            Route::ContactUs => "contact-us.html",
            Route::Rules => "rules.html",
        }
    }

    /// Route for a page path, matched on its last segment.
    ///
    /// An empty last segment (`/`, `/portal/`) is the home page.
    pub fn from_path(path: &str) -> Option<Route> {
        let page = path.rsplit('/').next().unwrap_or_default();
        if page.is_empty() {
            return Some(Route::Home);
        }
        Route::ALL.into_iter().find(|r| r.file_name() == page)
    }

    /// Dashboards require a logged-in user
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::AdminDashboard | Route::StudentDashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/index.html"), Some(Route::Home));
        assert_eq!(Route::from_path("/site/login.html"), Some(Route::Login));
        assert_eq!(Route::from_path("girl-hostel.html"), Some(Route::GirlsHostel));
        assert_eq!(Route::from_path("/our-Hostels.html"), Some(Route::OurHostels));
        assert_eq!(Route::from_path("/our-hostels.html"), None);
        assert_eq!(Route::from_path("/missing.html"), None);
    }

    #[test]
    fn test_file_names_roundtrip() {
        for route in Route::ALL {
            assert_eq!(route.file_name().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_protected_pages() {
        let protected: Vec<_> = Route::ALL.into_iter().filter(Route::is_protected).collect();
        assert_eq!(protected, [Route::AdminDashboard, Route::StudentDashboard]);
    }
}
