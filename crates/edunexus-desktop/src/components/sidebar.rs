//! # Sidebar Component
//!
//! Collapsible navigation sidebar with a mobile overlay mode.

use dioxus::prelude::*;
use edunexus_nav::{toggle_expansion, DisplayState, ExpansionControl, Menu, MobileOverlay, SidebarView};

use super::Glyph;
use crate::router::Route;
use crate::state::SidebarContext;

/// Navigation sidebar component.
///
/// Renders the dashboard menu, highlighting the entry whose href equals the
/// current route. Layout follows two flags: the shared expanded flag in
/// `state`, toggled by the header chevron, and the mobile `overlay`, which
/// the surrounding layout can open and which closes on backdrop clicks,
/// link clicks and every route change.
///
/// # Structure
///
/// ```text
/// [backdrop, only while the overlay is open]
/// +------------------------+
/// | brand          < / >   |
/// |------------------------|
/// |  Dashboard             |
/// |  Cursos                |
/// |  ...                   |
/// |                        |
/// |------------------------|
/// | (U) Usuario            |
/// +------------------------+
/// ```
#[component]
pub fn Sidebar(state: SidebarContext, overlay: Signal<MobileOverlay>) -> Element {
    let mut state = state;
    let mut overlay = overlay;
    let menu = use_hook(Menu::dashboard);
    let path = use_route::<Route>().to_string();

    // Route observer: runs on mount and again whenever the path changes.
    use_hook(|| tracing::debug!("Sidebar mounted, observing route changes"));
    use_effect(use_reactive!(|path| {
        overlay.write().observe_route(Some(path.as_str()));
    }));
    use_drop(|| tracing::debug!("Sidebar unmounted, route observer released"));

    let display = DisplayState::new(state.is_expanded(), overlay.read().is_open());
    let user = state.user.read().clone();
    let view = SidebarView::build(&menu, display, Some(path.as_str()), &user);
    let toggle = view.toggle;

    rsx! {
        if view.backdrop {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| overlay.write().close(),
            }
        }

        aside {
            class: "{view.container_classes}",
            style: "width: {view.width}",

            div {
                class: "sidebar-header",

                if let Some(wordmark) = view.brand.wordmark {
                    Link {
                        to: Route::Dashboard {},
                        class: "{view.brand.classes}",
                        Glyph { icon: view.brand.icon, class: "brand-icon" }
                        span { class: "brand-wordmark", "{wordmark}" }
                    }
                } else {
                    div {
                        class: "{view.brand.classes}",
                        Glyph { icon: view.brand.icon, class: "brand-icon" }
                    }
                }

                button {
                    class: "sidebar-toggle",
                    title: toggle.label(),
                    "aria-label": toggle.label(),
                    onclick: move |_| {
                        toggle_expansion(&mut state);
                    },
                    Glyph { icon: toggle.icon(), class: "icon-sm" }
                }
            }

            nav {
                class: "sidebar-nav",
                "aria-label": "Navegación principal",

                ul {
                    class: "nav-list",

                    for entry in view.entries.iter() {
                        li {
                            key: "{entry.href}",

                            Link {
                                to: Route::from_href(&entry.href),
                                class: entry.classes.clone(),
                                tabindex: "{entry.tab_index}",
                                aria_current: entry.aria_current,
                                aria_label: entry.aria_label.clone(),
                                onclick: move |_| overlay.write().close(),

                                Glyph { icon: entry.icon, class: "nav-icon" }
                                if let Some(label) = &entry.label {
                                    span { class: "nav-label", "{label}" }
                                }
                            }
                        }
                    }
                }
            }

            // User identity, pinned to the bottom
            div {
                class: "{view.footer.classes}",

                div {
                    class: "user-avatar",
                    "{view.footer.initial}"
                }

                if let Some(name) = &view.footer.name {
                    div {
                        class: "user-details",
                        p { class: "user-name", "{name}" }
                        if let Some(email) = &view.footer.email {
                            p { class: "user-email", "{email}" }
                        }
                    }
                }
            }
        }
    }
}
