//! Desktop shell: menu bar, shortcuts, open windows and dock

use dioxus::prelude::*;

mod actions;
mod apps;
mod components;
mod effects;
mod shell;
pub mod state;

pub use shell::DesktopShell;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
