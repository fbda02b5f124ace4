//! # Application State
//!
//! Shared state provided at the application root.

mod sidebar_state;

pub use sidebar_state::SidebarContext;
