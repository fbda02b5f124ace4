//! # Dashboard View
//!
//! Landing page with a card per sidebar section.

use dioxus::prelude::*;
use edunexus_nav::Menu;

use crate::components::Glyph;
use crate::router::Route;
use crate::state::SidebarContext;

/// Dashboard view.
///
/// Greets the user and links to every section listed in the sidebar
/// except the dashboard itself.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<SidebarContext>();
    let name = state.user.read().name.clone();
    let menu = use_hook(Menu::dashboard);

    rsx! {
        div {
            class: "dashboard-view",

            h2 { "Hola, {name}" }

            div {
                class: "section-grid",

                for entry in menu.entries().iter().filter(|e| e.href != "/") {
                    Link {
                        key: "{entry.href}",
                        to: Route::from_href(&entry.href),
                        class: "section-card",

                        Glyph { icon: entry.icon, class: "section-icon" }
                        h3 { "{entry.title}" }
                    }
                }
            }
        }
    }
}
