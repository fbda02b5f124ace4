//! Navigation sidebar model for the EduNexus dashboard.
//!
//! This crate holds everything about the sidebar that does not depend on a
//! UI framework: the static menu, the mobile overlay state machine, the
//! expanded/collapsed contract shared with the surrounding layout, and the
//! pure style and view computations the desktop shell renders from.

mod control;
mod error;
mod menu;
mod overlay;
mod style;
mod view;

pub use control::{toggle_expansion, ExpansionControl};
pub use error::MenuError;
pub use menu::{Icon, Menu, MenuEntry, DEFAULT_ENTRIES};
pub use overlay::MobileOverlay;
pub use style::{
    compute_style, ClassList, DisplayState, HeaderLayout, ItemStyle, MobilePosition,
    SidebarWidth, StyleDescriptor, ToggleDirection,
};
pub use view::{BrandView, EntryView, FooterView, SidebarView, UserProfile};

/// Wordmark shown next to the brand icon when the sidebar is expanded.
pub const BRAND_NAME: &str = "EDUNEXUS";

/// Glyph used for the brand in the sidebar header.
pub const BRAND_ICON: Icon = Icon::BookOpen;
