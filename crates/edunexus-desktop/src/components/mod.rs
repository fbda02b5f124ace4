//! # UI Components
//!
//! Reusable UI components for the EduNexus desktop application.
//!
//! This module provides the main layout components:
//! - [`Layout`] - Main application layout wrapper
//! - [`Sidebar`] - Collapsible navigation sidebar
//! - [`Header`] - Page header with the mobile menu trigger
//! - [`Glyph`] - Inline SVG icons

mod header;
mod icon;
mod layout;
mod sidebar;

pub use header::Header;
pub use icon::Glyph;
pub use layout::Layout;
pub use sidebar::Sidebar;
