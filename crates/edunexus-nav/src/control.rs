//! Shared expanded/collapsed contract.

/// Holder of the sidebar's expanded flag, owned above the sidebar.
///
/// The sidebar only reads the flag and requests changes through
/// [`set_expanded`](Self::set_expanded); it never stores its own copy.
pub trait ExpansionControl {
    /// Whether the sidebar is at its wide, labelled width.
    fn is_expanded(&self) -> bool;

    /// Requests a new expanded value.
    fn set_expanded(&mut self, next: bool);
}

/// Collapse/expand toggle handler. Returns the requested value.
pub fn toggle_expansion<C: ExpansionControl + ?Sized>(control: &mut C) -> bool {
    let next = !control.is_expanded();
    tracing::debug!(expanded = next, "Sidebar expansion toggled");
    control.set_expanded(next);
    next
}
