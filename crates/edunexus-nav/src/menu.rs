//! Static menu definition and active-route matching.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Glyphs the sidebar asks the icon renderer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    LayoutDashboard,
    BookOpen,
    FileClock,
    Calendar,
    MessageSquare,
    ChevronLeft,
    ChevronRight,
    /// Hamburger glyph for the mobile open trigger.
    Menu,
}

/// The dashboard menu, in display order: `(title, href, icon)`.
pub const DEFAULT_ENTRIES: [(&str, &str, Icon); 5] = [
    ("Dashboard", "/", Icon::LayoutDashboard),
    ("Cursos", "/courses", Icon::BookOpen),
    ("Tareas", "/assignments", Icon::FileClock),
    ("Calendario", "/calendar", Icon::Calendar),
    ("Mensajes", "/messages", Icon::MessageSquare),
];

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Display label.
    pub title: String,
    /// Destination path. Also the entry's identity key.
    pub href: String,
    /// Glyph rendered next to (or instead of) the label.
    pub icon: Icon,
}

impl MenuEntry {
    /// Creates a new menu entry.
    pub fn new(title: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            icon,
        }
    }

    /// Returns true if `path` is exactly this entry's destination.
    ///
    /// No normalization happens: `/courses/` and `/courses/42` do not match
    /// `/courses`. An undefined path matches nothing.
    #[must_use]
    pub fn is_active(&self, path: Option<&str>) -> bool {
        path == Some(self.href.as_str())
    }
}

/// An ordered, validated sequence of menu entries.
///
/// Hrefs are unique, so at most one entry can ever be active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
}

impl Menu {
    /// Builds a menu, rejecting entries that would break href identity.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, MenuError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.title.trim().is_empty() {
                return Err(MenuError::EmptyTitle {
                    href: entry.href.clone(),
                });
            }
            if !entry.href.starts_with('/') {
                return Err(MenuError::RelativeHref(entry.href.clone()));
            }
            if !seen.insert(entry.href.as_str()) {
                return Err(MenuError::DuplicateHref(entry.href.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The EduNexus dashboard menu.
    #[must_use]
    pub fn dashboard() -> Self {
        // DEFAULT_ENTRIES is checked by the tests below.
        Self {
            entries: DEFAULT_ENTRIES
                .iter()
                .map(|(title, href, icon)| MenuEntry::new(*title, *href, *icon))
                .collect(),
        }
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Position of the entry whose href equals `path`, if any.
    #[must_use]
    pub fn active_index(&self, path: Option<&str>) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_active(path))
    }

    /// The entry whose href equals `path`, if any.
    #[must_use]
    pub fn active_entry(&self, path: Option<&str>) -> Option<&MenuEntry> {
        self.active_index(path).map(|i| &self.entries[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_entries() -> Menu {
        Menu::new(vec![
            MenuEntry::new("Dashboard", "/", Icon::LayoutDashboard),
            MenuEntry::new("Cursos", "/courses", Icon::BookOpen),
        ])
        .unwrap()
    }

    #[test]
    fn test_dashboard_menu_is_valid() {
        let menu = Menu::dashboard();
        assert_eq!(Menu::new(menu.entries().to_vec()).unwrap(), menu);
        assert_eq!(menu.len(), 5);

        let titles: Vec<_> = menu.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Dashboard", "Cursos", "Tareas", "Calendario", "Mensajes"]
        );
    }

    #[test]
    fn test_courses_path_marks_cursos_active() {
        let menu = two_entries();
        let active = menu.active_entry(Some("/courses")).unwrap();
        assert_eq!(active.title, "Cursos");
        assert!(!menu.entries()[0].is_active(Some("/courses")));
        assert_eq!(menu.active_index(Some("/courses")), Some(1));
    }

    #[test]
    fn test_unknown_path_marks_nothing() {
        let menu = two_entries();
        assert!(menu.active_index(Some("/unknown")).is_none());
        assert!(menu.active_index(None).is_none());
    }

    #[test]
    fn test_no_normalization() {
        let menu = two_entries();
        assert!(menu.active_index(Some("/courses/")).is_none());
        assert!(menu.active_index(Some("/courses/42")).is_none());
        assert!(menu.active_index(Some("")).is_none());
        assert!(menu.active_index(Some("/COURSES")).is_none());
    }

    #[test]
    fn test_duplicate_href_rejected() {
        let err = Menu::new(vec![
            MenuEntry::new("Cursos", "/courses", Icon::BookOpen),
            MenuEntry::new("Mis cursos", "/courses", Icon::BookOpen),
        ])
        .unwrap_err();
        assert_eq!(err, MenuError::DuplicateHref("/courses".into()));
    }

    #[test]
    fn test_invalid_entries_rejected() {
        assert!(matches!(
            Menu::new(vec![MenuEntry::new("  ", "/", Icon::LayoutDashboard)]),
            Err(MenuError::EmptyTitle { .. })
        ));
        assert!(matches!(
            Menu::new(vec![MenuEntry::new("Cursos", "courses", Icon::BookOpen)]),
            Err(MenuError::RelativeHref(_))
        ));
    }

    #[test]
    fn test_empty_menu_is_allowed() {
        let menu = Menu::new(Vec::new()).unwrap();
        assert!(menu.is_empty());
        assert!(menu.active_index(Some("/")).is_none());
    }

    proptest! {
        /// Property: exactly one entry is active when the path is some href, zero otherwise
        #[test]
        fn prop_at_most_one_active(
            hrefs in prop::collection::hash_set("/[a-z]{0,6}", 0..8),
            path in "/[a-z/]{0,7}",
            pick in any::<prop::sample::Index>(),
            use_known in any::<bool>(),
        ) {
            let hrefs: Vec<String> = hrefs.into_iter().collect();
            let menu = Menu::new(
                hrefs.iter().map(|h| MenuEntry::new("Entry", h.clone(), Icon::BookOpen)).collect(),
            ).unwrap();

            let path = if use_known && !hrefs.is_empty() {
                hrefs[pick.index(hrefs.len())].clone()
            } else {
                path
            };

            let active = menu.entries().iter().filter(|e| e.is_active(Some(path.as_str()))).count();
            let expected = usize::from(hrefs.contains(&path));
            prop_assert_eq!(active, expected);
            prop_assert_eq!(menu.active_index(Some(path.as_str())).is_some(), expected == 1);
        }
    }
}
