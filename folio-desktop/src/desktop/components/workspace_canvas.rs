use dioxus::prelude::*;
use folio_types::{DesktopState, ProfileSection, WindowId, WindowKind};

use crate::config::site_config;
use crate::content::{
    CalendarView, NavigationSidebar, PlaceholderView, ProfileView, ProjectDetailView, ProjectsView,
};
use crate::desktop::apps::desktop_shortcuts;
use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop::state::{shows_sidebar, title_for};
use crate::desktop_window::FloatingWindow;

fn profile_body(section: ProfileSection) -> Element {
    let site = site_config();
    rsx! {
        ProfileView {
            section,
            content: site.section(section).cloned(),
            contacts: site.contacts.clone(),
        }
    }
}

fn window_body(window_id: &WindowId, state: &DesktopState, on_open_project: Callback<String>) -> Element {
    let site = site_config();
    let kind = window_id.kind();
    match kind {
        WindowKind::Finder => profile_body(state.active_section),
        WindowKind::About => profile_body(ProfileSection::About),
        WindowKind::Education => profile_body(ProfileSection::Education),
        WindowKind::Experience => profile_body(ProfileSection::Experience),
        WindowKind::Contact => profile_body(ProfileSection::Contact),
        WindowKind::Projects => rsx! {
            ProjectsView { projects: site.projects.clone(), on_open_project }
        },
        WindowKind::ProjectDetail => {
            let project = site.project_for_window(window_id).cloned();
            rsx! { ProjectDetailView { project } }
        }
        WindowKind::Calendar => rsx! { CalendarView {} },
        WindowKind::Calculator | WindowKind::FlappyBird => rsx! { PlaceholderView { kind } },
    }
}

#[component]
pub fn WorkspaceCanvas(
    state: Signal<DesktopState>,
    viewport: Signal<(u32, u32)>,
    is_mobile: bool,
    on_open: Callback<WindowId>,
    on_close: Callback<WindowId>,
    on_toggle_maximize: Callback<WindowId>,
    on_toggle_sidebar: Callback<()>,
    on_select_section: Callback<ProfileSection>,
    on_open_project: Callback<String>,
) -> Element {
    let state_value = state.read().clone();
    let viewport_value = *viewport.read();
    let site = site_config();

    rsx! {
        div {
            class: "desktop-workspace",
            style: "position: absolute; inset: 24px 0 0 0; overflow: hidden;",

            DesktopIcons {
                shortcuts: desktop_shortcuts(),
                on_open,
                is_mobile,
            }
        }

        for window_id in state_value.open_windows.iter().cloned() {
            FloatingWindow {
                key: "{window_id}",
                window_id: window_id.clone(),
                title: title_for(site, &window_id),
                maximized: state_value.is_maximized(&window_id),
                viewport: viewport_value,
                show_sidebar: shows_sidebar(&state_value, &window_id),
                sidebar: (window_id.kind() == WindowKind::Finder).then(|| rsx! {
                    NavigationSidebar { active: state_value.active_section, on_select: on_select_section }
                }),
                on_close,
                on_toggle_maximize,
                on_toggle_sidebar,
                {window_body(&window_id, &state_value, on_open_project)}
            }
        }
    }
}
