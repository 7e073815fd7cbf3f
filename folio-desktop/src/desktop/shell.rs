use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use folio_types::{DesktopState, ProfileSection, Viewport, WindowId};

use crate::config::{layout_config, site_config};
use crate::desktop::actions;
use crate::desktop::apps::dock_items;
use crate::desktop::components::dock::Dock;
use crate::desktop::components::menu_bar::MenuBar;
use crate::desktop::components::startup::{StartupScreen, StartupStage};
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::interop::get_viewport_size;

#[component]
pub fn DesktopShell() -> Element {
    let desktop_state = use_signal(DesktopState::default);
    let viewport = use_signal(get_viewport_size);
    let startup_elapsed = use_signal(|| 0u32);

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(viewport).await;
        });
    });

    use_effect(move || {
        spawn(async move {
            effects::run_startup(startup_elapsed).await;
            info!("Desktop ready");
        });
    });

    let is_mobile = Viewport::from(*viewport.read()).is_mobile(layout_config());

    use_effect(use_reactive!(|is_mobile| {
        actions::viewport_changed_action(desktop_state, is_mobile);
    }));

    let open_window_cb = use_callback(move |window_id: WindowId| {
        actions::open_window_action(desktop_state, window_id.as_str());
    });

    let close_window_cb = use_callback(move |window_id: WindowId| {
        actions::close_window_action(desktop_state, window_id);
    });

    let toggle_maximize_cb = use_callback(move |window_id: WindowId| {
        actions::toggle_maximize_action(desktop_state, window_id);
    });

    let toggle_sidebar_cb = use_callback(move |_| {
        actions::toggle_sidebar_action(desktop_state);
    });

    let select_section_cb = use_callback(move |section: ProfileSection| {
        actions::select_section_action(desktop_state, section);
    });

    let open_project_cb = use_callback(move |project_name: String| {
        actions::open_project_action(desktop_state, project_name);
    });

    let open_finder_cb = use_callback(move |_| {
        actions::open_finder_action(desktop_state);
    });

    let site = site_config();
    let elapsed = startup_elapsed();
    let open_windows = desktop_state.read().open_windows.clone();

    rsx! {
        style { {DEFAULT_TOKENS} }

        if StartupStage::at(elapsed) != StartupStage::Complete {
            StartupScreen { logo_text: site.logo_text.clone(), elapsed_ms: elapsed }
        } else {
            div {
                class: "desktop-shell",
                style: "position: fixed; inset: 0; overflow: hidden; background: var(--desktop-bg);",

                MenuBar {
                    owner_name: site.owner_name.clone(),
                    owner_short_name: site.owner_short_name.clone(),
                    contacts: site.contacts.clone(),
                    is_mobile,
                    on_owner_click: open_finder_cb,
                }

                WorkspaceCanvas {
                    state: desktop_state,
                    viewport,
                    is_mobile,
                    on_open: open_window_cb,
                    on_close: close_window_cb,
                    on_toggle_maximize: toggle_maximize_cb,
                    on_toggle_sidebar: toggle_sidebar_cb,
                    on_select_section: select_section_cb,
                    on_open_project: open_project_cb,
                }

                Dock {
                    items: dock_items(),
                    open_windows,
                    on_open: open_window_cb,
                    is_mobile,
                }
            }
        }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    /* Colors */
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-text: #ffffff;
    --border-color: #334155;

    /* Semantic colors */
    --desktop-bg: radial-gradient(circle at 30% 20%, #1e3a8a 0%, #0f172a 60%);
    --window-bg: var(--bg-secondary);
    --titlebar-bg: #111827;
    --dock-bg: rgba(30, 41, 59, 0.8);
    --hover-bg: rgba(255, 255, 255, 0.1);
    --danger-bg: #ef4444;

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.desktop-icon:hover div {
    transform: scale(1.05);
}

.dock-item:hover div {
    transform: translateY(-4px) scale(1.1);
}

.sidebar-item:not(.active):hover,
.menu-dropdown button:hover,
.project-row:hover {
    background: var(--hover-bg) !important;
}

@media (max-width: 767px) {
    .desktop-icons {
        gap: 1rem !important;
    }
}
"#;
