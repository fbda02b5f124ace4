//! # Header Component
//!
//! Page header with the mobile menu trigger.

use dioxus::prelude::*;
use edunexus_nav::{Icon, Menu};

use super::Glyph;
use crate::router::Route;

/// Application header component.
///
/// Shows the current page title and, below the desktop breakpoint, the
/// hamburger button that opens the sidebar overlay.
#[component]
pub fn Header(menu_open: bool, on_menu: EventHandler<MouseEvent>) -> Element {
    let path = use_route::<Route>().to_string();
    let menu = use_hook(Menu::dashboard);
    let title = menu
        .active_entry(Some(path.as_str()))
        .map_or("Página no encontrada", |entry| entry.title.as_str())
        .to_string();

    rsx! {
        header {
            class: "app-header",

            button {
                class: "mobile-menu-button",
                "aria-label": "Abrir menú",
                "aria-expanded": "{menu_open}",
                onclick: move |evt| on_menu.call(evt),
                Glyph { icon: Icon::Menu }
            }

            h1 { "{title}" }
        }
    }
}
