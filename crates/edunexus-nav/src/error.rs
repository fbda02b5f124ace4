//! Error types for menu construction.

use thiserror::Error;

/// Errors that can occur while building a [`Menu`](crate::Menu).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Two entries share the same destination, which is also their identity key.
    #[error("duplicate menu href: {0}")]
    DuplicateHref(String),

    /// An entry has no display label.
    #[error("menu entry for {href} has an empty title")]
    EmptyTitle {
        /// Destination of the offending entry.
        href: String,
    },

    /// An entry points somewhere other than an absolute in-app path.
    #[error("menu href must start with '/': {0}")]
    RelativeHref(String),
}
