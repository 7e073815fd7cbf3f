//! Window bodies

use dioxus::prelude::*;
use folio_types::WindowKind;

pub mod calendar;
pub mod profile;
pub mod projects;

pub use calendar::CalendarView;
pub use profile::{NavigationSidebar, ProfileView};
pub use projects::{ProjectDetailView, ProjectsView};

/// Body for kinds that have no content of their own yet.
#[component]
pub fn PlaceholderView(kind: WindowKind) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.75rem; height: 100%; color: var(--text-muted, #64748b);",
            span { style: "font-size: 3rem;", {kind.glyph()} }
            span { {kind.title()} " is not available yet" }
        }
    }
}
