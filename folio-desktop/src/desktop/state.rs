use folio_types::{DesktopState, ProfileSection, SiteConfig, WindowId, WindowIdError, WindowKind};

/// Append `window_id` unless it is already open. Returns whether it was added.
pub fn open_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    if state.is_open(&window_id) {
        return false;
    }
    state.open_windows.push(window_id);
    true
}

/// Parse an id coming from a launcher surface and open it.
pub fn open_window_by_id(state: &mut DesktopState, raw_id: &str) -> Result<bool, WindowIdError> {
    let window_id = raw_id.parse::<WindowId>()?;
    Ok(open_window(state, window_id))
}

pub fn close_window(state: &mut DesktopState, window_id: &WindowId) {
    state.open_windows.retain(|id| id != window_id);
    state.maximized.remove(window_id);

    if window_id.is_project_detail() {
        state.selected_project = None;
    }
}

/// Flip maximized membership. Closed windows and fixed-size kinds are left
/// alone. Returns the new maximized flag.
pub fn toggle_maximize(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if !state.is_open(window_id) || !window_id.kind().capabilities().maximizable {
        return state.is_maximized(window_id);
    }

    if !state.maximized.remove(window_id) {
        state.maximized.insert(window_id.clone());
        return true;
    }
    false
}

pub fn open_finder_about(state: &mut DesktopState) {
    state.active_section = ProfileSection::About;
    if let Some(finder) = WindowId::fixed(WindowKind::Finder) {
        open_window(state, finder);
    }
}

pub fn open_project(state: &mut DesktopState, project_name: &str) -> Result<WindowId, WindowIdError> {
    let window_id = WindowId::project_detail(project_name)?;
    state.selected_project = Some(project_name.to_string());
    open_window(state, window_id.clone());
    Ok(window_id)
}

pub fn set_section(state: &mut DesktopState, section: ProfileSection) {
    state.active_section = section;
}

pub fn toggle_sidebar(state: &mut DesktopState) {
    state.sidebar_visible = !state.sidebar_visible;
}

/// Narrow viewports start with the sidebar hidden.
pub fn apply_viewport(state: &mut DesktopState, is_mobile: bool) {
    if is_mobile {
        state.sidebar_visible = false;
    }
}

/// Project-detail windows are titled by the project their own id names.
pub fn title_for(site: &SiteConfig, window_id: &WindowId) -> String {
    match window_id.kind() {
        WindowKind::ProjectDetail => site
            .project_for_window(window_id)
            .map(|project| project.name.clone())
            .unwrap_or_else(|| WindowKind::ProjectDetail.title().to_string()),
        WindowKind::Finder => format!("{} - {}", site.owner_name, WindowKind::Finder.title()),
        kind => kind.title().to_string(),
    }
}

/// Whether the sidebar column should render for this window right now.
pub fn shows_sidebar(state: &DesktopState, window_id: &WindowId) -> bool {
    window_id.kind().capabilities().sidebar && state.sidebar_visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> WindowId {
        raw.parse().unwrap()
    }

    #[test]
    fn reopening_is_a_no_op() {
        let mut state = DesktopState::default();
        assert!(open_window(&mut state, id("projects")));
        assert!(open_window(&mut state, id("calendar")));
        assert!(!open_window(&mut state, id("projects")));
        assert_eq!(state.open_windows, vec![id("projects"), id("calendar")]);
    }

    #[test]
    fn unknown_launcher_ids_are_rejected() {
        let mut state = DesktopState::default();
        assert!(open_window_by_id(&mut state, "terminal").is_err());
        assert_eq!(open_window_by_id(&mut state, "finder"), Ok(true));
        assert_eq!(state.open_windows, vec![id("finder")]);
    }

    #[test]
    fn close_drops_open_and_maximized_membership() {
        let mut state = DesktopState::default();
        open_window(&mut state, id("projects"));
        assert!(toggle_maximize(&mut state, &id("projects")));
        close_window(&mut state, &id("projects"));
        assert!(!state.is_open(&id("projects")));
        assert!(!state.is_maximized(&id("projects")));
    }

    #[test]
    fn toggle_maximize_flips_and_skips_fixed_kinds() {
        let mut state = DesktopState::default();
        open_window(&mut state, id("finder"));
        open_window(&mut state, id("calculator"));

        assert!(toggle_maximize(&mut state, &id("finder")));
        assert!(!toggle_maximize(&mut state, &id("finder")));
        assert!(!toggle_maximize(&mut state, &id("calculator")));
        assert!(state.maximized.is_empty());

        // not open
        assert!(!toggle_maximize(&mut state, &id("calendar")));
        assert!(state.maximized.is_empty());
    }

    #[test]
    fn project_detail_lifecycle_tracks_selection() {
        let mut state = DesktopState::default();
        let window_id = open_project(&mut state, "Front-End Invious Visuals").unwrap();
        assert_eq!(window_id.as_str(), "project-detail-front-end-invious-visuals");
        assert_eq!(
            title_for(&SiteConfig::default(), &window_id),
            "Front-End Invious Visuals"
        );

        close_window(&mut state, &window_id);
        assert_eq!(state.selected_project, None);
        assert_eq!(
            title_for(&SiteConfig::default(), &id("project-detail-unlisted")),
            "Project Details"
        );
    }

    #[test]
    fn two_project_windows_keep_their_own_titles() {
        let site = SiteConfig::default();
        let mut state = DesktopState::default();
        let first = open_project(&mut state, "WebApp WhatsApp Blast").unwrap();
        let second = open_project(&mut state, "Front-End Invious Visuals").unwrap();
        assert_eq!(title_for(&site, &first), "WebApp WhatsApp Blast");
        assert_eq!(title_for(&site, &second), "Front-End Invious Visuals");

        close_window(&mut state, &second);
        assert!(state.is_open(&first));
        assert_eq!(title_for(&site, &first), "WebApp WhatsApp Blast");
    }

    #[test]
    fn finder_about_resets_section() {
        let mut state = DesktopState::default();
        set_section(&mut state, ProfileSection::Contact);
        open_finder_about(&mut state);
        assert_eq!(state.active_section, ProfileSection::About);
        assert_eq!(state.open_windows, vec![id("finder")]);
    }

    #[test]
    fn sidebar_only_for_finder_and_hidden_on_mobile() {
        let mut state = DesktopState::default();
        assert!(shows_sidebar(&state, &id("finder")));
        assert!(!shows_sidebar(&state, &id("projects")));

        apply_viewport(&mut state, true);
        assert!(!shows_sidebar(&state, &id("finder")));
        toggle_sidebar(&mut state);
        assert!(shows_sidebar(&state, &id("finder")));
    }
}
