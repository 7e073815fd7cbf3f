use dioxus::prelude::*;
use folio_types::WindowId;

use crate::desktop::apps::Launcher;
use crate::window_manager::CHROME_Z_INDEX;

#[component]
pub fn Dock(
    items: Vec<Launcher>,
    open_windows: Vec<WindowId>,
    on_open: Callback<WindowId>,
    is_mobile: bool,
) -> Element {
    let padding = if is_mobile { "0.35rem 0.5rem" } else { "0.5rem 0.75rem" };

    rsx! {
        div {
            class: "dock",
            style: "position: fixed; bottom: 0.75rem; left: 50%; transform: translateX(-50%); z-index: {CHROME_Z_INDEX}; display: flex; align-items: flex-end; gap: 0.5rem; padding: {padding}; background: var(--dock-bg, rgba(30, 41, 59, 0.8)); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-lg, 12px); backdrop-filter: blur(12px); box-shadow: var(--shadow-md, 0 4px 6px rgba(0, 0, 0, 0.4));",

            for launcher in items {
                DockItem {
                    key: "{launcher.label}",
                    launcher,
                    is_open: launcher.window_id().is_some_and(|id| open_windows.contains(&id)),
                    on_open,
                    is_mobile,
                }
            }
        }
    }
}

#[component]
fn DockItem(
    launcher: Launcher,
    is_open: bool,
    on_open: Callback<WindowId>,
    is_mobile: bool,
) -> Element {
    let size = if is_mobile { "40px" } else { "48px" };
    let font_size = if is_mobile { "1.6rem" } else { "2rem" };

    rsx! {
        button {
            class: if is_open { "dock-item open" } else { "dock-item" },
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.2rem; background: transparent; border: none; cursor: pointer; padding: 0;",
            title: "{launcher.label}",
            onclick: move |_| {
                if let Some(window_id) = launcher.window_id() {
                    on_open.call(window_id);
                }
            },

            div {
                style: "width: {size}; height: {size}; display: flex; align-items: center; justify-content: center; background: var(--window-bg, #1f2937); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); font-size: {font_size}; transition: transform 0.15s ease-out;",
                {launcher.glyph()}
            }
            div {
                style: if is_open {
                    "width: 4px; height: 4px; border-radius: 999px; background: var(--text-primary, #f8fafc);"
                } else {
                    "width: 4px; height: 4px; border-radius: 999px; background: transparent;"
                },
            }
        }
    }
}
