//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{Assignments, Calendar, Courses, Dashboard, Messages, NotFound};

/// Application routes.
///
/// All routes are wrapped in the [`Layout`] component which provides
/// the sidebar and header. Paths match the sidebar menu hrefs.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Main layout wrapper for all routes.
    #[layout(Layout)]
    /// Overview of the student's activity.
    #[route("/")]
    Dashboard {},

    /// Enrolled courses.
    #[route("/courses")]
    Courses {},

    /// Pending and submitted assignments.
    #[route("/assignments")]
    Assignments {},

    /// Upcoming classes and deadlines.
    #[route("/calendar")]
    Calendar {},

    /// Conversations with teachers and classmates.
    #[route("/messages")]
    Messages {},

    /// Anything else.
    ///
    /// # Parameters
    ///
    /// * `segments` - The unmatched path segments
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Parses a sidebar href into a route, falling back to [`Route::NotFound`].
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        href.parse().unwrap_or_else(|_| {
            tracing::warn!(href, "Menu href does not match any route");
            Self::NotFound {
                segments: href
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edunexus_nav::Menu;

    #[test]
    fn test_every_menu_href_is_a_route() {
        for entry in Menu::dashboard().entries() {
            let route = Route::from_href(&entry.href);
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} has no route",
                entry.href
            );
            assert_eq!(route.to_string(), entry.href);
        }
    }

    #[test]
    fn test_unknown_href_is_not_found() {
        assert!(matches!(
            Route::from_href("/unknown/page"),
            Route::NotFound { .. }
        ));
    }
}
