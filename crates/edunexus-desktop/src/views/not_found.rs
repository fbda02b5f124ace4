//! # Not Found View

use dioxus::prelude::*;

use crate::router::Route;

/// Fallback for paths no route matches.
///
/// No sidebar entry is highlighted on this page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "Unknown route");

    rsx! {
        div {
            class: "not-found-view",

            h2 { "Página no encontrada" }

            p { class: "text-secondary", "No existe ninguna página en {path}." }

            Link {
                to: Route::Dashboard {},
                class: "btn-primary",
                "Volver al inicio"
            }
        }
    }
}
