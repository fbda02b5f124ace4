//! Mobile overlay state machine.

/// Whether the sidebar is slid in over the page on narrow viewports.
///
/// Starts closed. Every transition is synchronous:
///
/// - [`toggle`](Self::toggle) flips it (the external open trigger),
/// - [`close`](Self::close) closes it (backdrop or link click),
/// - [`observe_route`](Self::observe_route) closes it whenever the route
///   differs from the last one observed, so navigation by any means never
///   leaves the drawer stuck open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobileOverlay {
    open: bool,
    observed: bool,
    route: Option<String>,
}

impl MobileOverlay {
    /// Creates a closed overlay that has not observed any route yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the overlay.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Mobile overlay toggled");
    }

    /// Closes the overlay. No-op when already closed.
    pub fn close(&mut self) {
        if self.open {
            tracing::debug!("Mobile overlay closed");
        }
        self.open = false;
    }

    /// Records the current route and closes the overlay if it changed.
    ///
    /// The first observation (mount) also forces the overlay closed.
    /// Returns true when the route was new.
    pub fn observe_route(&mut self, path: Option<&str>) -> bool {
        if self.observed && self.route.as_deref() == path {
            return false;
        }
        tracing::debug!(from = ?self.route, to = ?path, "Route changed");
        self.observed = true;
        self.route = path.map(str::to_owned);
        self.close();
        true
    }

    /// The last route passed to [`observe_route`](Self::observe_route).
    #[must_use]
    pub fn last_route(&self) -> Option<&str> {
        self.route.as_deref()
    }
}
