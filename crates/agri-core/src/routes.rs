//! Routes and in-page anchors

use crate::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Client-side routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    About,
    Contact,
    Services,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Contact, Route::Services];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Services => "/services",
        }
    }

    /// Parse a location pathname. A trailing slash and the legacy
    /// `/about.html` page are accepted.
    pub fn from_path(path: &str) -> SiteResult<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };

        match normalized {
            "/" => Ok(Route::Home),
            "/about" | "/about.html" => Ok(Route::About),
            "/contact" => Ok(Route::Contact),
            "/services" => Ok(Route::Services),
            _ => Err(SiteError::UnknownRoute(trimmed.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Named landmarks that smooth-scroll navigation can bring into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    Home,
    Applications,
    Benefits,
    Krishak2IDrone,
    WhyAgriDrones,
    Contact,
    TrainingAndSupport,
}

impl Anchor {
    pub const ALL: [Anchor; 7] = [
        Anchor::Home,
        Anchor::Applications,
        Anchor::Benefits,
        Anchor::Krishak2IDrone,
        Anchor::WhyAgriDrones,
        Anchor::Contact,
        Anchor::TrainingAndSupport,
    ];

    /// DOM element id
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::Applications => "applications",
            Anchor::Benefits => "benefits",
            Anchor::Krishak2IDrone => "krishak-2i-drone",
            Anchor::WhyAgriDrones => "why-agri-drones",
            Anchor::Contact => "contact",
            Anchor::TrainingAndSupport => "training-and-support",
        }
    }

    /// Page the anchor is rendered on
    pub fn page(&self) -> Route {
        match self {
            Anchor::TrainingAndSupport => Route::Services,
            _ => Route::Home,
        }
    }

    pub fn from_id(id: &str) -> Option<Anchor> {
        Anchor::ALL.into_iter().find(|anchor| anchor.id() == id)
    }

    /// Resolve a human label such as "Training & Support"
    pub fn from_label(label: &str) -> Option<Anchor> {
        Anchor::from_id(&slugify(label))
    }
}

/// Turn a link label into an element id: lower-case, whitespace runs become
/// `-`, and the first `&` becomes `and`.
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replacen('&', "and", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_route_parsing_tolerance() {
        assert_eq!(Route::from_path("").unwrap(), Route::Home);
        assert_eq!(Route::from_path("/services/").unwrap(), Route::Services);
        assert_eq!(Route::from_path("/about.html").unwrap(), Route::About);
        assert_eq!("/contact".parse::<Route>().unwrap(), Route::Contact);
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(
            Route::from_path("/pricing"),
            Err(SiteError::UnknownRoute("/pricing".to_string()))
        );
    }

    #[test]
    fn test_anchor_ids_are_unique() {
        for anchor in Anchor::ALL {
            assert_eq!(Anchor::from_id(anchor.id()), Some(anchor));
        }
        assert_eq!(Anchor::from_id("pricing"), None);
    }

    #[test]
    fn test_anchor_pages() {
        assert_eq!(Anchor::Benefits.page(), Route::Home);
        assert_eq!(Anchor::Contact.page(), Route::Home);
        assert_eq!(Anchor::TrainingAndSupport.page(), Route::Services);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Why Agri Drones"), "why-agri-drones");
        assert_eq!(slugify("Krishak 2I Drone"), "krishak-2i-drone");
        assert_eq!(slugify("Training & Support"), "training-and-support");
        assert_eq!(slugify("  Home  "), "home");
    }

    #[test]
    fn test_anchor_from_label() {
        assert_eq!(
            Anchor::from_label("Training & Support"),
            Some(Anchor::TrainingAndSupport)
        );
        assert_eq!(Anchor::from_label("Blog"), None);
    }
}
