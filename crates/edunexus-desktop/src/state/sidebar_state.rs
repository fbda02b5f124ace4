//! # Sidebar State
//!
//! Expanded/collapsed flag and footer identity, shared via Dioxus context.

use dioxus::prelude::*;
use edunexus_nav::{ExpansionControl, UserProfile};

use crate::config::Config;

/// Shared sidebar state.
///
/// Provided once by the root component. The layout looks it up with
/// `use_context::<SidebarContext>()`, which panics when no provider exists,
/// and then hands it to the sidebar explicitly as a prop.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarContext {
    /// Whether the sidebar is at its wide, labelled width.
    pub expanded: Signal<bool>,

    /// Identity shown in the sidebar footer.
    pub user: Signal<UserProfile>,
}

impl SidebarContext {
    /// Creates the sidebar state, seeded from the persisted config.
    #[must_use]
    pub fn new() -> Self {
        let config = Config::load();

        Self {
            expanded: Signal::new(config.sidebar_expanded),
            user: Signal::new(config.user),
        }
    }

    /// Persists the current expanded flag, keeping the rest of the config.
    fn save_config(&self) {
        let mut config = Config::load();
        config.sidebar_expanded = *self.expanded.peek();
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

impl ExpansionControl for SidebarContext {
    fn is_expanded(&self) -> bool {
        *self.expanded.read()
    }

    fn set_expanded(&mut self, next: bool) {
        self.expanded.set(next);
        self.save_config();
    }
}

impl Default for SidebarContext {
    fn default() -> Self {
        Self::new()
    }
}
