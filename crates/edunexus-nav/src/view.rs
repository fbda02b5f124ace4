//! Render tree description for the sidebar.
//!
//! [`SidebarView::build`] is the whole rendering contract as a pure
//! function; the desktop component only turns it into elements.

use serde::{Deserialize, Serialize};

use crate::menu::{Icon, Menu};
use crate::style::{compute_style, DisplayState, HeaderLayout, StyleDescriptor, ToggleDirection};
use crate::{BRAND_ICON, BRAND_NAME};

/// Identity shown in the sidebar footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Usuario".to_string(),
            email: "usuario@ejemplo.com".to_string(),
        }
    }
}

impl UserProfile {
    /// Uppercased first character of the name, `?` when the name is blank.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().to_string())
    }
}

/// Header brand slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandView {
    pub layout: HeaderLayout,
    pub icon: Icon,
    /// Wordmark, only in the expanded layout.
    pub wordmark: Option<&'static str>,
    /// Link target, only in the expanded layout.
    pub href: Option<&'static str>,
    pub classes: String,
}

/// One rendered menu link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// Destination and list key.
    pub href: String,
    pub title: String,
    pub icon: Icon,
    pub active: bool,
    /// Visible text label. `None` when collapsed.
    pub label: Option<String>,
    pub aria_label: Option<String>,
    pub aria_current: Option<&'static str>,
    pub tab_index: i32,
    pub classes: String,
}

/// Footer identity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub initial: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub classes: String,
}

/// Full description of one sidebar render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub style: StyleDescriptor,
    /// Whether the backdrop element exists.
    pub backdrop: bool,
    pub container_classes: String,
    /// Inline width of the container.
    pub width: &'static str,
    pub brand: BrandView,
    pub toggle: ToggleDirection,
    pub entries: Vec<EntryView>,
    pub footer: FooterView,
}

impl SidebarView {
    /// Builds the render description for the given state and route.
    #[must_use]
    pub fn build(
        menu: &Menu,
        state: DisplayState,
        path: Option<&str>,
        user: &UserProfile,
    ) -> Self {
        let style = compute_style(state);
        let expanded_header = style.header == HeaderLayout::BrandWithWordmark;

        let entries = menu
            .entries()
            .iter()
            .map(|entry| {
                let active = entry.is_active(path);
                let item = style.item_style(active);
                EntryView {
                    href: entry.href.clone(),
                    title: entry.title.clone(),
                    icon: entry.icon,
                    active,
                    label: style.show_labels.then(|| entry.title.clone()),
                    aria_label: item.label_in_aria.then(|| entry.title.clone()),
                    aria_current: item.aria_current,
                    tab_index: item.tab_index,
                    classes: item.classes.to_string(),
                }
            })
            .collect();

        Self {
            backdrop: style.backdrop,
            container_classes: style.container_classes().to_string(),
            width: style.width.css_length(),
            brand: BrandView {
                layout: style.header,
                icon: BRAND_ICON,
                wordmark: expanded_header.then_some(BRAND_NAME),
                href: expanded_header.then_some("/"),
                classes: style.brand_classes().to_string(),
            },
            toggle: style.toggle,
            entries,
            footer: FooterView {
                initial: user.initial(),
                name: style.footer_details.then(|| user.name.clone()),
                email: style.footer_details.then(|| user.email.clone()),
                classes: style.footer_classes().to_string(),
            },
            style,
        }
    }

    /// The active entry, if the route matched one.
    #[must_use]
    pub fn active_entry(&self) -> Option<&EntryView> {
        self.entries.iter().find(|e| e.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::tests::Recorder;
    use crate::{toggle_expansion, ExpansionControl, MenuEntry, MobileOverlay, SidebarWidth};

    fn view(expanded: bool, mobile_open: bool, path: Option<&str>) -> SidebarView {
        SidebarView::build(
            &Menu::dashboard(),
            DisplayState::new(expanded, mobile_open),
            path,
            &UserProfile::default(),
        )
    }

    #[test]
    fn test_courses_scenario() {
        let menu = Menu::new(vec![
            MenuEntry::new("Dashboard", "/", Icon::LayoutDashboard),
            MenuEntry::new("Cursos", "/courses", Icon::BookOpen),
        ])
        .unwrap();
        let view = SidebarView::build(
            &menu,
            DisplayState::new(true, false),
            Some("/courses"),
            &UserProfile::default(),
        );

        let titles: Vec<_> = view.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Dashboard", "Cursos"]);
        assert!(!view.entries[0].active);
        assert!(view.entries[1].active);
        assert_eq!(view.entries[1].aria_current, Some("page"));
        assert!(view.entries[1].classes.contains("nav-link--active"));
    }

    #[test]
    fn test_unknown_route_scenario() {
        let view = view(true, false, Some("/unknown"));
        assert!(view.active_entry().is_none());
        assert!(view.entries.iter().all(|e| e.aria_current.is_none()));

        assert!(self::view(true, false, None).active_entry().is_none());
    }

    #[test]
    fn test_collapsed_hides_labels_keeps_icons() {
        let view = view(false, false, Some("/"));
        for entry in &view.entries {
            assert!(entry.label.is_none());
            assert_eq!(entry.aria_label.as_deref(), Some(entry.title.as_str()));
        }
        let icons: Vec<_> = view.entries.iter().map(|e| e.icon).collect();
        assert_eq!(
            icons,
            [
                Icon::LayoutDashboard,
                Icon::BookOpen,
                Icon::FileClock,
                Icon::Calendar,
                Icon::MessageSquare
            ]
        );
        assert!(view.brand.wordmark.is_none());
        assert!(view.brand.href.is_none());
        assert!(view.footer.name.is_none());
        assert!(view.footer.email.is_none());
        assert_eq!(view.footer.initial, "U");
    }

    #[test]
    fn test_expanded_shows_labels_brand_and_footer() {
        let view = view(true, false, Some("/"));
        assert!(view
            .entries
            .iter()
            .all(|e| e.label.as_ref() == Some(&e.title) && e.aria_label.is_none()));
        assert_eq!(view.brand.wordmark, Some("EDUNEXUS"));
        assert_eq!(view.brand.href, Some("/"));
        assert_eq!(view.brand.icon, Icon::BookOpen);
        assert_eq!(view.footer.name.as_deref(), Some("Usuario"));
        assert_eq!(view.footer.email.as_deref(), Some("usuario@ejemplo.com"));
    }

    #[test]
    fn test_backdrop_follows_overlay() {
        let mut overlay = MobileOverlay::new();
        let render = |overlay: &MobileOverlay| view(true, overlay.is_open(), Some("/"));

        assert!(!render(&overlay).backdrop);
        overlay.toggle();
        assert!(render(&overlay).backdrop);

        // Backdrop click
        overlay.close();
        assert!(!render(&overlay).backdrop);
    }

    #[test]
    fn test_link_click_closes_overlay() {
        let mut overlay = MobileOverlay::new();
        overlay.toggle();
        let rendered = view(true, overlay.is_open(), Some("/"));
        assert!(rendered.entries.iter().all(|e| e.tab_index == 0));

        overlay.close();
        assert!(!overlay.is_open());
        overlay.close();
        assert!(!overlay.is_open());
        let rendered = view(true, overlay.is_open(), Some("/"));
        assert!(rendered.entries.iter().all(|e| e.tab_index == -1));
    }

    #[test]
    fn test_toggle_scenario_updates_width() {
        let mut control = Recorder::default();
        let before = view(control.is_expanded(), false, Some("/"));
        assert_eq!(before.style.width, SidebarWidth::Narrow);
        assert_eq!(before.width, "4rem");

        toggle_expansion(&mut control);
        assert!(control.is_expanded());

        let after = view(control.is_expanded(), false, Some("/"));
        assert_eq!(after.style.width, SidebarWidth::Wide);
        assert_eq!(after.width, "14rem");
        assert!(after.container_classes.contains("sidebar--expanded"));
    }

    #[test]
    fn test_build_is_idempotent() {
        assert_eq!(view(false, true, Some("/calendar")), view(false, true, Some("/calendar")));
    }

    #[test]
    fn test_user_initial() {
        let user = UserProfile {
            name: "  ana".into(),
            email: "ana@edunexus.io".into(),
        };
        assert_eq!(user.initial(), "A");

        let blank = UserProfile {
            name: String::new(),
            email: String::new(),
        };
        assert_eq!(blank.initial(), "?");
    }

    #[test]
    fn test_user_profile_json() {
        let user: UserProfile =
            serde_json::from_str(r#"{"name":"Ana","email":"ana@edunexus.io"}"#).unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.initial(), "A");
    }
}
