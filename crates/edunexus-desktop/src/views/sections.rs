//! # Section Views
//!
//! Placeholder pages for the sidebar sections.

use dioxus::prelude::*;

/// Shared page frame for a section without content yet.
#[component]
fn SectionPage(title: &'static str, empty_message: &'static str) -> Element {
    rsx! {
        div {
            class: "section-view",

            h2 { "{title}" }

            p { class: "text-secondary", "{empty_message}" }
        }
    }
}

/// Enrolled courses.
#[component]
pub fn Courses() -> Element {
    rsx! {
        SectionPage { title: "Cursos", empty_message: "Todavía no estás inscrito en ningún curso." }
    }
}

/// Pending and submitted assignments.
#[component]
pub fn Assignments() -> Element {
    rsx! {
        SectionPage { title: "Tareas", empty_message: "No tienes tareas pendientes." }
    }
}

/// Upcoming classes and deadlines.
#[component]
pub fn Calendar() -> Element {
    rsx! {
        SectionPage { title: "Calendario", empty_message: "No hay eventos próximos." }
    }
}

/// Conversations.
#[component]
pub fn Messages() -> Element {
    rsx! {
        SectionPage { title: "Mensajes", empty_message: "No tienes mensajes nuevos." }
    }
}
