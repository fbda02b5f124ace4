//! # Layout Component
//!
//! Main application layout wrapper providing consistent structure.

use dioxus::prelude::*;
use edunexus_nav::MobileOverlay;

use super::{Header, Sidebar};
use crate::router::Route;
use crate::state::SidebarContext;

/// Main layout wrapper component.
///
/// Owns the mobile overlay flag and hands it to both the sidebar, which
/// closes it, and the header, whose hamburger button opens it.
/// All routed views are rendered inside the main content area via `Outlet`.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Sidebar |         Header                    |
/// |         |-----------------------------------|
/// |  Nav    |                                   |
/// |  Items  |         Main Content              |
/// |         |         (Outlet)                  |
/// |         |                                   |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let sidebar = use_context::<SidebarContext>();
    let mut overlay = use_signal(MobileOverlay::new);
    let menu_open = overlay.read().is_open();

    rsx! {
        div {
            class: "app-layout",

            Sidebar { state: sidebar, overlay }

            div {
                class: "main-panel",

                Header {
                    menu_open,
                    on_menu: move |_| overlay.write().toggle(),
                }

                main {
                    class: "content",

                    Outlet::<Route> {}
                }
            }
        }
    }
}
