//! Visual policy for the sidebar as plain data.
//!
//! [`compute_style`] maps the two display flags to a [`StyleDescriptor`].
//! Class strings are only produced at the edge, through [`ClassList`], so
//! the rules here can be asserted on directly.

use std::fmt;

use crate::menu::Icon;

/// The two flags every render is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// Shared expanded flag.
    pub expanded: bool,
    /// Local mobile overlay flag.
    pub mobile_open: bool,
}

impl DisplayState {
    #[must_use]
    pub fn new(expanded: bool, mobile_open: bool) -> Self {
        Self {
            expanded,
            mobile_open,
        }
    }
}

/// Sidebar container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarWidth {
    /// Labels visible.
    Wide,
    /// Icons only.
    Narrow,
}

impl SidebarWidth {
    /// CSS length applied inline to the container.
    #[must_use]
    pub fn css_length(self) -> &'static str {
        match self {
            Self::Wide => "14rem",
            Self::Narrow => "4rem",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Wide => "sidebar--expanded",
            Self::Narrow => "sidebar--collapsed",
        }
    }
}

/// Horizontal position below the desktop breakpoint.
///
/// At or above the breakpoint the sidebar is always on-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobilePosition {
    OnScreen,
    /// Translated fully left.
    OffScreen,
}

impl MobilePosition {
    fn class(self) -> &'static str {
        match self {
            Self::OnScreen => "sidebar--mobile-open",
            Self::OffScreen => "sidebar--mobile-closed",
        }
    }
}

/// Header row content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    /// Brand icon plus wordmark, linking to the root route.
    BrandWithWordmark,
    /// Centered brand icon only.
    IconOnly,
}

/// What the collapse/expand button will do when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    Collapse,
    Expand,
}

impl ToggleDirection {
    /// Left chevron to collapse, right chevron to expand.
    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Collapse => Icon::ChevronLeft,
            Self::Expand => Icon::ChevronRight,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Collapse => "Contraer menú",
            Self::Expand => "Expandir menú",
        }
    }
}

/// Everything the renderer needs to know about the sidebar's appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    pub width: SidebarWidth,
    pub mobile_position: MobilePosition,
    /// Whether the click-to-close backdrop exists at all.
    pub backdrop: bool,
    pub header: HeaderLayout,
    pub toggle: ToggleDirection,
    /// Whether menu entries show their text label.
    pub show_labels: bool,
    /// Tab index for every menu link.
    pub link_tab_index: i32,
    /// Whether the footer shows name and email next to the avatar.
    pub footer_details: bool,
}

/// Computes the sidebar's appearance from its display flags.
#[must_use]
pub fn compute_style(state: DisplayState) -> StyleDescriptor {
    let DisplayState {
        expanded,
        mobile_open,
    } = state;

    StyleDescriptor {
        width: if expanded {
            SidebarWidth::Wide
        } else {
            SidebarWidth::Narrow
        },
        mobile_position: if mobile_open {
            MobilePosition::OnScreen
        } else {
            MobilePosition::OffScreen
        },
        backdrop: mobile_open,
        header: if expanded {
            HeaderLayout::BrandWithWordmark
        } else {
            HeaderLayout::IconOnly
        },
        toggle: if expanded {
            ToggleDirection::Collapse
        } else {
            ToggleDirection::Expand
        },
        show_labels: expanded,
        // Applies at every breakpoint, not only on narrow viewports.
        link_tab_index: if mobile_open { 0 } else { -1 },
        footer_details: expanded,
    }
}

/// Presentation of a single menu link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStyle {
    pub classes: ClassList,
    /// `aria-current` value, set only on the active entry.
    pub aria_current: Option<&'static str>,
    /// Whether the title must be exposed through `aria-label` because the
    /// visible label is suppressed.
    pub label_in_aria: bool,
    pub tab_index: i32,
}

impl StyleDescriptor {
    /// Classes for the `aside` container.
    #[must_use]
    pub fn container_classes(&self) -> ClassList {
        ClassList::new("sidebar")
            .with(self.width.class())
            .with(self.mobile_position.class())
    }

    /// Classes for the header brand slot.
    #[must_use]
    pub fn brand_classes(&self) -> ClassList {
        ClassList::new("sidebar-brand").with_if(
            self.header == HeaderLayout::IconOnly,
            "sidebar-brand--centered",
        )
    }

    /// Presentation of a menu link given whether it is the active entry.
    #[must_use]
    pub fn item_style(&self, active: bool) -> ItemStyle {
        let classes = ClassList::new("nav-link")
            .with(if active {
                "nav-link--active"
            } else {
                "nav-link--inactive"
            })
            .with_if(!self.show_labels, "nav-link--icon-only");

        ItemStyle {
            classes,
            aria_current: active.then_some("page"),
            label_in_aria: !self.show_labels,
            tab_index: self.link_tab_index,
        }
    }

    /// Classes for the footer row.
    #[must_use]
    pub fn footer_classes(&self) -> ClassList {
        ClassList::new("sidebar-footer").with_if(!self.footer_details, "sidebar-footer--compact")
    }
}

/// Ordered, duplicate-free list of CSS classes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    #[must_use]
    pub fn new(base: &'static str) -> Self {
        Self::default().with(base)
    }

    /// Appends a class unless it is already present.
    #[must_use]
    pub fn with(mut self, class: &'static str) -> Self {
        if !class.is_empty() && !self.0.contains(&class) {
            self.0.push(class);
        }
        self
    }

    /// Appends a class only when `condition` holds.
    #[must_use]
    pub fn with_if(self, condition: bool, class: &'static str) -> Self {
        if condition {
            self.with(class)
        } else {
            self
        }
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| *c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
