//! # Views
//!
//! Page-level view components for the EduNexus desktop application.
//!
//! - [`Dashboard`] - Overview with shortcuts to every section
//! - [`Courses`], [`Assignments`], [`Calendar`], [`Messages`] - Section pages
//! - [`NotFound`] - Fallback for unknown paths

mod dashboard;
mod not_found;
mod sections;

pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use sections::{Assignments, Calendar, Courses, Messages};
