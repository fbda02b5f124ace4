//! # EduNexus Desktop
//!
//! Desktop shell for the EduNexus learning dashboard.
//!
//! ## Architecture
//!
//! The navigation model (menu, overlay state, style rules) lives in
//! `edunexus-nav`; this crate renders it with Dioxus and supplies the
//! router, the shared sidebar state and config persistence.
//!
//! ## Modules
//!
//! - [`components`] - Layout, sidebar, header and icons
//! - [`config`] - Configuration persistence
//! - [`router`] - Application routes
//! - [`state`] - Shared sidebar state
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod components;
mod config;
mod router;
mod state;
mod views;

use config::Config;
use router::Route;
use state::SidebarContext;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting EduNexus Desktop");

    let window = Config::load().window;

    // Configure desktop window
    let cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EduNexus")
            .with_inner_size(LogicalSize::new(window.width, window.height))
            .with_min_inner_size(LogicalSize::new(360.0, 480.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Provides the shared sidebar state, loads the stylesheet and renders
/// the router.
#[component]
fn App() -> Element {
    use_context_provider(SidebarContext::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
