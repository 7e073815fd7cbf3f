use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use folio_types::{Viewport, WindowBounds, WindowCapabilities, WindowId};
use gloo_timers::future::TimeoutFuture;

use crate::config::layout_config;
use crate::interop::{panel_is_attached, pointer_point, pointer_target_is_window_control, PointerCapture};
use crate::window_manager::{z_index_for, PanelMode, PanelState, PointerKind, ResizeEdge};

const OPEN_ANIMATION_MS: u32 = 300;
const OPEN_SCALE_DESKTOP: f64 = 0.8;
const OPEN_SCALE_MOBILE: f64 = 0.95;

fn open_scale(opening: bool, is_mobile: bool) -> f64 {
    match (opening, is_mobile) {
        (false, _) => 1.0,
        (true, true) => OPEN_SCALE_MOBILE,
        (true, false) => OPEN_SCALE_DESKTOP,
    }
}

fn window_style(bounds: WindowBounds, maximized: bool, opening: bool, is_mobile: bool) -> String {
    let z_index = z_index_for(maximized);
    let scale = open_scale(opening, is_mobile);
    let opacity = if opening { 0 } else { 1 };
    let (radius, shadow) = if maximized {
        ("0", "none")
    } else {
        (
            "var(--radius-lg, 12px)",
            "var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5))",
        )
    };

    format!(
        "position: fixed; left: {}px; top: {}px; width: {}px; height: {}px; z-index: {z_index}; \
         display: flex; flex-direction: column; background: var(--window-bg, #1f2937); \
         border: 1px solid var(--border-color, #374151); border-radius: {radius}; overflow: hidden; \
         box-shadow: {shadow}; transform: scale({scale}); opacity: {opacity}; \
         transition: transform {OPEN_ANIMATION_MS}ms ease-out, opacity {OPEN_ANIMATION_MS}ms ease-out;",
        bounds.x, bounds.y, bounds.width, bounds.height
    )
}

fn handle_style(edge: ResizeEdge) -> String {
    format!(
        "position: absolute; {} cursor: {}; z-index: 1; touch-action: none;",
        edge.handle_style(),
        edge.cursor()
    )
}

/// A draggable, resizable panel. Geometry lives here; which windows exist and
/// which are maximized is owned by the shell.
#[component]
pub fn FloatingWindow(
    window_id: WindowId,
    title: String,
    maximized: bool,
    viewport: (u32, u32),
    show_sidebar: bool,
    sidebar: Option<Element>,
    on_close: Callback<WindowId>,
    on_toggle_maximize: Callback<WindowId>,
    on_toggle_sidebar: Callback<()>,
    children: Element,
) -> Element {
    let kind = window_id.kind();
    let capabilities = kind.capabilities();
    let layout = layout_config();
    let screen = Viewport::from(viewport);
    let is_mobile = screen.is_mobile(layout);
    let mode = PanelMode {
        maximized,
        mobile: is_mobile,
    };

    let mut panel = use_signal(|| PanelState::placed(kind, screen, layout));
    let mut capture = use_signal(|| None::<PointerCapture>);
    let mut opening = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(OPEN_ANIMATION_MS).await;
            opening.set(false);
        });
    });

    use_effect(use_reactive!(|viewport| {
        panel
            .write()
            .relayout(kind, Viewport::from(viewport), layout_config());
        capture.set(None);
    }));

    let bounds = panel.read().rendered_bounds(maximized, screen, layout);
    let style = window_style(bounds, maximized, opening(), is_mobile);

    let window_id_for_controls = window_id.clone();
    let window_id_for_drag = window_id.clone();

    // Dropping the guard releases the pointer.
    let mut end_interaction = move || {
        if !panel.peek().is_idle() {
            panel.write().end_interaction();
        }
        capture.set(None);
    };

    rsx! {
        div {
            class: if maximized { "floating-window maximized" } else { "floating-window" },
            role: "dialog",
            "aria-label": "{title}",
            style: "{style}",
            onpointermove: move |e| {
                if panel.peek().is_idle() {
                    return;
                }
                if let Some(held) = capture.peek().as_ref() {
                    if held.pointer_id() != e.data().pointer_id() {
                        return;
                    }
                }
                let pointer = pointer_point(&e);
                panel.write().pointer_move(pointer, screen, layout_config());
            },
            onpointerup: move |_| end_interaction(),
            onpointercancel: move |_| end_interaction(),

            div {
                class: "window-titlebar",
                style: "position: relative; display: flex; align-items: center; justify-content: center; height: 2.25rem; padding: 0 0.75rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); cursor: default; user-select: none; touch-action: none; flex-shrink: 0;",
                onpointerdown: move |e| {
                    if pointer_target_is_window_control(&e) {
                        return;
                    }
                    let started = panel.write().begin_drag(pointer_point(&e), panel_is_attached(&e), mode);
                    if started {
                        e.prevent_default();
                        capture.set(PointerCapture::acquire(&e));
                        debug!("Dragging window {}", window_id_for_drag);
                    }
                },

                WindowControls {
                    window_id: window_id_for_controls,
                    capabilities,
                    maximized,
                    interaction_idle: panel.read().is_idle(),
                    on_close,
                    on_toggle_maximize,
                }

                div {
                    style: "display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; font-weight: 500; color: var(--text-primary, white); overflow: hidden; white-space: nowrap; text-overflow: ellipsis; max-width: 60%;",
                    span { {kind.glyph()} }
                    span { "{title}" }
                }
            }

            if capabilities.toolbar {
                div {
                    class: "window-toolbar",
                    style: "display: flex; align-items: center; gap: 0.5rem; height: 2.25rem; padding: 0 0.75rem; background: var(--bg-secondary, #1e293b); border-bottom: 1px solid var(--border-color, #374151); flex-shrink: 0;",
                    if capabilities.sidebar {
                        button {
                            class: "sidebar-toggle",
                            style: "background: transparent; border: none; color: var(--text-secondary, #94a3b8); cursor: pointer; font-size: 1rem; padding: 0.25rem;",
                            "aria-label": if show_sidebar { "Hide sidebar" } else { "Show sidebar" },
                            onclick: move |_| on_toggle_sidebar.call(()),
                            "☰"
                        }
                    }
                }
            }

            div {
                style: "flex: 1; display: flex; min-height: 0;",

                if show_sidebar {
                    if let Some(sidebar) = sidebar {
                        div {
                            class: "window-sidebar",
                            style: if is_mobile {
                                "width: 12rem; flex-shrink: 0; overflow-y: auto; border-right: 1px solid var(--border-color, #374151); background: var(--bg-primary, #0f172a);"
                            } else {
                                "width: 16rem; flex-shrink: 0; overflow-y: auto; border-right: 1px solid var(--border-color, #374151); background: var(--bg-primary, #0f172a);"
                            },
                            {sidebar}
                        }
                    }
                }

                div {
                    class: "window-content",
                    style: "flex: 1; overflow: auto; min-width: 0;",
                    {children}
                }
            }

            if capabilities.resizable && !maximized && !is_mobile {
                for edge in ResizeEdge::ALL {
                    div {
                        key: "{edge:?}",
                        class: "resize-handle",
                        style: handle_style(edge),
                        onpointerdown: move |e| {
                            e.stop_propagation();
                            let pointer_kind = PointerKind::from_pointer_type(&e.data().pointer_type());
                            let started = panel.write().begin_resize(
                                edge,
                                pointer_point(&e),
                                pointer_kind,
                                &capabilities,
                                mode,
                            );
                            if started {
                                e.prevent_default();
                                capture.set(PointerCapture::acquire(&e));
                            }
                        },
                    }
                }
            }
        }
    }
}

/// Traffic-light buttons pinned to the left of the title bar.
#[component]
fn WindowControls(
    window_id: WindowId,
    capabilities: WindowCapabilities,
    maximized: bool,
    interaction_idle: bool,
    on_close: Callback<WindowId>,
    on_toggle_maximize: Callback<WindowId>,
) -> Element {
    let window_id_for_close = window_id.clone();
    let window_id_for_maximize = window_id;

    rsx! {
        div {
            class: "window-controls",
            style: "position: absolute; left: 0.75rem; top: 50%; transform: translateY(-50%); display: flex; align-items: center; gap: 0.5rem;",

            button {
                class: "window-close",
                style: "width: 12px; height: 12px; padding: 0; border: none; border-radius: 999px; background: #ef4444; cursor: pointer; font-size: 8px; line-height: 12px; color: rgba(0,0,0,0.6);",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(window_id_for_close.clone());
                },
                "×"
            }

            if capabilities.maximizable {
                button {
                    class: "window-maximize",
                    style: "width: 12px; height: 12px; padding: 0; border: none; border-radius: 999px; background: #22c55e; cursor: pointer; font-size: 8px; line-height: 12px; color: rgba(0,0,0,0.6);",
                    onpointerdown: move |e| e.stop_propagation(),
                    "aria-label": if maximized { "Restore" } else { "Maximize" },
                    onclick: move |e| {
                        e.stop_propagation();
                        if interaction_idle {
                            on_toggle_maximize.call(window_id_for_maximize.clone());
                        }
                    },
                    if maximized { "❐" } else { "□" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_scale_settles_to_identity() {
        assert_eq!(open_scale(true, false), 0.8);
        assert_eq!(open_scale(true, true), 0.95);
        assert_eq!(open_scale(false, false), 1.0);
        assert_eq!(open_scale(false, true), 1.0);
    }

    #[test]
    fn style_carries_geometry_and_tier() {
        let style = window_style(WindowBounds::new(440.0, 107.0, 400.0, 500.0), false, false, false);
        assert!(style.contains("left: 440px; top: 107px; width: 400px; height: 500px;"));
        assert!(style.contains("z-index: 40;"));
        assert!(style.contains("transform: scale(1)"));

        let maximized = window_style(WindowBounds::new(0.0, 24.0, 1280.0, 776.0), true, true, false);
        assert!(maximized.contains("z-index: 60;"));
        assert!(maximized.contains("border-radius: 0;"));
        assert!(maximized.contains("opacity: 0;"));
    }
}
