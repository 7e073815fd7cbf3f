use dioxus::prelude::{Signal, WritableExt};
use dioxus_logger::tracing::{debug, warn};
use folio_types::{DesktopState, ProfileSection, WindowId};

use crate::desktop::state::{
    apply_viewport, close_window, open_finder_about, open_project, open_window_by_id,
    set_section, toggle_maximize, toggle_sidebar,
};

pub fn open_window_action(mut desktop_state: Signal<DesktopState>, raw_id: &str) {
    match open_window_by_id(&mut desktop_state.write(), raw_id) {
        Ok(true) => debug!("Opened window {}", raw_id),
        Ok(false) => debug!("Window {} already open", raw_id),
        Err(e) => warn!("Ignoring open request: {}", e),
    }
}

pub fn close_window_action(mut desktop_state: Signal<DesktopState>, window_id: WindowId) {
    close_window(&mut desktop_state.write(), &window_id);
    debug!("Closed window {}", window_id);
}

pub fn toggle_maximize_action(mut desktop_state: Signal<DesktopState>, window_id: WindowId) {
    let maximized = toggle_maximize(&mut desktop_state.write(), &window_id);
    debug!("Window {} maximized={}", window_id, maximized);
}

pub fn open_finder_action(mut desktop_state: Signal<DesktopState>) {
    open_finder_about(&mut desktop_state.write());
}

pub fn open_project_action(mut desktop_state: Signal<DesktopState>, project_name: String) {
    match open_project(&mut desktop_state.write(), &project_name) {
        Ok(window_id) => debug!("Opened project {} as {}", project_name, window_id),
        Err(e) => warn!("Failed to open project: {}", e),
    }
}

pub fn select_section_action(mut desktop_state: Signal<DesktopState>, section: ProfileSection) {
    set_section(&mut desktop_state.write(), section);
}

pub fn toggle_sidebar_action(mut desktop_state: Signal<DesktopState>) {
    toggle_sidebar(&mut desktop_state.write());
}

pub fn viewport_changed_action(mut desktop_state: Signal<DesktopState>, is_mobile: bool) {
    apply_viewport(&mut desktop_state.write(), is_mobile);
}
