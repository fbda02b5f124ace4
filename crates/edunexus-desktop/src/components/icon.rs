//! # Icons
//!
//! Stroke icons drawn as inline SVG.

use dioxus::prelude::*;
use edunexus_nav::Icon;

/// SVG path data for each glyph, on a 24x24 grid.
fn paths(icon: Icon) -> &'static [&'static str] {
    match icon {
        Icon::LayoutDashboard => &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"],
        Icon::BookOpen => &[
            "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
            "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
        ],
        Icon::FileClock => &[
            "M16 22h2a2 2 0 0 0 2-2V7l-5-5H6a2 2 0 0 0-2 2v3",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M14 16a6 6 0 1 1-12 0a6 6 0 1 1 12 0",
            "M9.5 17.5 8 16.25V14",
        ],
        Icon::Calendar => &[
            "M8 2v4",
            "M16 2v4",
            "M3 6a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M3 10h18",
        ],
        Icon::MessageSquare => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        Icon::ChevronLeft => &["m15 18-6-6 6-6"],
        Icon::ChevronRight => &["m9 18 6-6-6-6"],
        Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
    }
}

/// Renders an [`Icon`] as an inline SVG.
///
/// Icons are decorative; the surrounding element carries the accessible name.
#[component]
pub fn Glyph(icon: Icon, #[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",

            for d in paths(icon) {
                path { key: "{d}", d: "{d}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_paths() {
        for icon in [
            Icon::LayoutDashboard,
            Icon::BookOpen,
            Icon::FileClock,
            Icon::Calendar,
            Icon::MessageSquare,
            Icon::ChevronLeft,
            Icon::ChevronRight,
            Icon::Menu,
        ] {
            assert!(!paths(icon).is_empty(), "{icon:?} has no paths");
        }
    }
}
