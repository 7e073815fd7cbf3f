use dioxus::prelude::*;
use folio_types::WindowId;

use crate::desktop::apps::{Launcher, ShortcutColumn};
use crate::interop::now_ms;

const DOUBLE_CLICK_MS: f64 = 500.0;

/// Second click within the window of the first one.
fn is_double_click(last_click_ms: Option<f64>, now: f64) -> bool {
    last_click_ms.is_some_and(|last| now - last < DOUBLE_CLICK_MS)
}

#[component]
pub fn DesktopIcons(
    shortcuts: Vec<(Launcher, ShortcutColumn)>,
    on_open: Callback<WindowId>,
    is_mobile: bool,
) -> Element {
    let left: Vec<Launcher> = shortcuts
        .iter()
        .filter(|(_, column)| *column == ShortcutColumn::Left)
        .map(|(launcher, _)| *launcher)
        .collect();
    let right: Vec<Launcher> = shortcuts
        .iter()
        .filter(|(_, column)| *column == ShortcutColumn::Right)
        .map(|(launcher, _)| *launcher)
        .collect();
    let gap = if is_mobile { "1rem" } else { "1.5rem" };

    rsx! {
        div {
            class: "desktop-icons desktop-icons-left",
            style: "position: absolute; top: 2.5rem; left: 1rem; z-index: 1; display: flex; flex-direction: column; gap: {gap};",
            for launcher in left {
                DesktopIcon { key: "{launcher.label}", launcher, on_open, is_mobile }
            }
        }
        div {
            class: "desktop-icons desktop-icons-right",
            style: "position: absolute; top: 2.5rem; right: 1rem; z-index: 1; display: flex; flex-direction: column; gap: {gap};",
            for launcher in right {
                DesktopIcon { key: "{launcher.label}", launcher, on_open, is_mobile }
            }
        }
    }
}

#[component]
pub fn DesktopIcon(launcher: Launcher, on_open: Callback<WindowId>, is_mobile: bool) -> Element {
    let icon_size = if is_mobile { "3rem" } else { "3.5rem" };
    let font_size = if is_mobile { "2rem" } else { "2.5rem" };
    let mut last_click_ms = use_signal(|| None::<f64>);
    let mut is_selected = use_signal(|| false);

    let handle_click = move |_| {
        let now = now_ms();
        let opens = is_mobile || is_double_click(*last_click_ms.peek(), now);

        if opens {
            last_click_ms.set(None);
            if let Some(window_id) = launcher.window_id() {
                on_open.call(window_id);
            }
        } else {
            last_click_ms.set(Some(now));
        }
        is_selected.set(!opens);
    };

    let border_color = if is_selected() { "#60a5fa" } else { "transparent" };
    let label_bg = if is_selected() {
        "var(--accent-bg, #3b82f6)"
    } else {
        "transparent"
    };

    rsx! {
        button {
            class: "desktop-icon",
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.35rem; padding: 0.5rem; background: transparent; border: 1px solid {border_color}; border-radius: var(--radius-md, 8px); cursor: pointer; transition: all 0.15s ease-out;",
            onclick: handle_click,
            onblur: move |_| is_selected.set(false),

            div {
                style: "width: {icon_size}; height: {icon_size}; display: flex; align-items: center; justify-content: center; background: var(--dock-bg, rgba(30, 41, 59, 0.8)); border-radius: var(--radius-lg, 12px); backdrop-filter: blur(8px);",
                span { style: "font-size: {font_size}; pointer-events: none; user-select: none;", {launcher.glyph()} }
            }
            span {
                style: "font-size: 0.75rem; color: var(--text-primary, #f8fafc); background: {label_bg}; padding: 0 0.35rem; border-radius: var(--radius-sm, 4px); text-shadow: 0 1px 2px rgba(0,0,0,0.5); pointer-events: none; user-select: none;",
                {launcher.label}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_click_needs_a_recent_first_click() {
        assert!(!is_double_click(None, 1_000.0));
        assert!(is_double_click(Some(1_000.0), 1_300.0));
        assert!(!is_double_click(Some(1_000.0), 1_500.0));
    }
}
