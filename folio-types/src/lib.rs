//! Shared types for the folio desktop
//!
//! These types are used by:
//! - the window manager geometry (placement, drag, resize, maximize)
//! - the desktop shell state container and its intents
//! - Dioxus components (WASM)
//!
//! Serializable with serde so the site config can be embedded as JSON.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowIdError {
    #[error("unknown window id '{0}'")]
    Unknown(String),

    #[error("project name '{0}' produces an empty slug")]
    EmptyProjectSlug(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid folio config: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Window Identity
// ============================================================================

pub const PROJECT_DETAIL_PREFIX: &str = "project-detail-";

/// Category of a panel. Determines sizing and capabilities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum WindowKind {
    Finder,
    About,
    Projects,
    Education,
    Experience,
    Contact,
    Calculator,
    Calendar,
    FlappyBird,
    ProjectDetail,
}

impl WindowKind {
    /// Kinds that map to exactly one window id.
    pub const FIXED: [WindowKind; 9] = [
        WindowKind::Finder,
        WindowKind::About,
        WindowKind::Projects,
        WindowKind::Education,
        WindowKind::Experience,
        WindowKind::Contact,
        WindowKind::Calculator,
        WindowKind::Calendar,
        WindowKind::FlappyBird,
    ];

    pub fn fixed_id(self) -> Option<&'static str> {
        match self {
            WindowKind::Finder => Some("finder"),
            WindowKind::About => Some("about"),
            WindowKind::Projects => Some("projects"),
            WindowKind::Education => Some("education"),
            WindowKind::Experience => Some("experience"),
            WindowKind::Contact => Some("contact"),
            WindowKind::Calculator => Some("calculator"),
            WindowKind::Calendar => Some("calendar"),
            WindowKind::FlappyBird => Some("flappy-bird"),
            WindowKind::ProjectDetail => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WindowKind::Finder => "Profile",
            WindowKind::About => "About Me",
            WindowKind::Projects => "Selected Projects",
            WindowKind::Education => "Education",
            WindowKind::Experience => "Experience",
            WindowKind::Contact => "Contact",
            WindowKind::Calculator => "Calculator",
            WindowKind::Calendar => "Calendar",
            WindowKind::FlappyBird => "Kotak Loncat",
            WindowKind::ProjectDetail => "Project Details",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            WindowKind::Finder => "🗂️",
            WindowKind::About => "👤",
            WindowKind::Projects => "📁",
            WindowKind::Education => "🎓",
            WindowKind::Experience => "💼",
            WindowKind::Contact => "✉️",
            WindowKind::Calculator => "🧮",
            WindowKind::Calendar => "📅",
            WindowKind::FlappyBird => "🐦",
            WindowKind::ProjectDetail => "📄",
        }
    }

    /// The canonical per-kind policy table.
    pub fn capabilities(self) -> WindowCapabilities {
        match self {
            WindowKind::Finder => {
                WindowCapabilities::standard(SizingPolicy::new(0.7, 0.8, 1100.0, 750.0))
                    .with_sidebar()
            }
            WindowKind::Calendar => {
                WindowCapabilities::standard(SizingPolicy::new(0.55, 0.7, 800.0, 600.0))
            }
            WindowKind::ProjectDetail => {
                WindowCapabilities::standard(SizingPolicy::new(0.6, 0.8, 900.0, 700.0))
            }
            WindowKind::Calculator => {
                WindowCapabilities::fixed(SizingPolicy::new(0.35, 0.8, 400.0, 500.0))
            }
            WindowKind::FlappyBird => {
                WindowCapabilities::fixed(SizingPolicy::new(0.35, 0.85, 500.0, 700.0))
            }
            WindowKind::About
            | WindowKind::Projects
            | WindowKind::Education
            | WindowKind::Experience
            | WindowKind::Contact => {
                WindowCapabilities::standard(SizingPolicy::new(0.65, 0.75, 1000.0, 700.0))
            }
        }
    }
}

/// Identifier of an open panel: a fixed kind id or `project-detail-<slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WindowId(String);

impl WindowId {
    pub fn fixed(kind: WindowKind) -> Option<Self> {
        kind.fixed_id().map(|id| Self(id.to_string()))
    }

    pub fn project_detail(project_name: &str) -> Result<Self, WindowIdError> {
        let slug = project_slug(project_name);
        if slug.is_empty() {
            return Err(WindowIdError::EmptyProjectSlug(project_name.to_string()));
        }
        Ok(Self(format!("{PROJECT_DETAIL_PREFIX}{slug}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> WindowKind {
        WindowKind::FIXED
            .into_iter()
            .find(|kind| kind.fixed_id() == Some(self.0.as_str()))
            .unwrap_or(WindowKind::ProjectDetail)
    }

    pub fn is_project_detail(&self) -> bool {
        self.kind() == WindowKind::ProjectDetail
    }

    /// The `<slug>` part of a project-detail id.
    pub fn project_slug(&self) -> Option<&str> {
        if !self.is_project_detail() {
            return None;
        }
        self.0.strip_prefix(PROJECT_DETAIL_PREFIX)
    }
}

impl FromStr for WindowId {
    type Err = WindowIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if WindowKind::FIXED.iter().any(|kind| kind.fixed_id() == Some(s)) {
            return Ok(Self(s.to_string()));
        }
        match s.strip_prefix(PROJECT_DETAIL_PREFIX) {
            Some(slug) if !slug.is_empty() => Ok(Self(s.to_string())),
            _ => Err(WindowIdError::Unknown(s.to_string())),
        }
    }
}

impl TryFrom<String> for WindowId {
    type Error = WindowIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WindowId> for String {
    fn from(id: WindowId) -> Self {
        id.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whitespace runs become `-`, then lowercase.
pub fn project_slug(project_name: &str) -> String {
    project_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

// ============================================================================
// Capabilities
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingPolicy {
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl SizingPolicy {
    pub const fn new(width_ratio: f64, height_ratio: f64, max_width: f64, max_height: f64) -> Self {
        Self {
            width_ratio,
            height_ratio,
            max_width,
            max_height,
        }
    }
}

/// Per-kind behavior switches, looked up once per panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowCapabilities {
    pub resizable: bool,
    pub maximizable: bool,
    /// Toolbar row under the title bar
    pub toolbar: bool,
    /// Navigation sidebar beside the body
    pub sidebar: bool,
    pub sizing: SizingPolicy,
}

impl WindowCapabilities {
    const fn standard(sizing: SizingPolicy) -> Self {
        Self {
            resizable: true,
            maximizable: true,
            toolbar: true,
            sidebar: false,
            sizing,
        }
    }

    const fn fixed(sizing: SizingPolicy) -> Self {
        Self {
            resizable: false,
            maximizable: false,
            toolbar: false,
            sidebar: false,
            sizing,
        }
    }

    const fn with_sidebar(mut self) -> Self {
        self.sidebar = true;
        self
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Panel rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowBounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self, layout: &LayoutConfig) -> bool {
        self.width < layout.mobile_breakpoint
    }
}

impl From<(u32, u32)> for Viewport {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(f64::from(width), f64::from(height))
    }
}

/// Chrome metrics and size floors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub menu_bar_height: f64,
    /// Bottom strip a dragged panel may not cover
    pub dock_height: f64,
    /// Bottom strip reserved when computing initial placement
    pub dock_reserve: f64,
    pub padding: f64,
    pub mobile_breakpoint: f64,
    pub min_initial_width: f64,
    pub min_initial_height: f64,
    pub min_resize_width: f64,
    pub min_resize_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            menu_bar_height: 24.0,
            dock_height: 80.0,
            dock_reserve: 90.0,
            padding: 20.0,
            mobile_breakpoint: 768.0,
            min_initial_width: 350.0,
            min_initial_height: 300.0,
            min_resize_width: 400.0,
            min_resize_height: 300.0,
        }
    }
}

// ============================================================================
// Site Content
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSection {
    #[default]
    About,
    Education,
    Experience,
    Contact,
}

impl ProfileSection {
    pub const ALL: [ProfileSection; 4] = [
        ProfileSection::About,
        ProfileSection::Education,
        ProfileSection::Experience,
        ProfileSection::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileSection::About => "About Me",
            ProfileSection::Education => "Education",
            ProfileSection::Experience => "Experience",
            ProfileSection::Contact => "Contact",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ProfileSection::About => "👤",
            ProfileSection::Education => "🎓",
            ProfileSection::Experience => "💼",
            ProfileSection::Contact => "✉️",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Linkedin,
    Github,
    Web,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub url: String,
}

/// A dated item under Education or Experience.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionContent {
    pub section: ProfileSection,
    pub heading: String,
    /// Line under the heading, e.g. roles
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub entries: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub owner_short_name: String,
    /// Wordmark shown on the startup screen
    pub logo_text: String,
    pub contacts: Vec<ContactLink>,
    pub sections: Vec<SectionContent>,
    pub projects: Vec<Project>,
}

impl SiteConfig {
    pub fn section(&self, section: ProfileSection) -> Option<&SectionContent> {
        self.sections.iter().find(|content| content.section == section)
    }

    /// Project a project-detail window belongs to, matched on its slug.
    pub fn project_for_window(&self, window_id: &WindowId) -> Option<&Project> {
        let slug = window_id.project_slug()?;
        self.projects
            .iter()
            .find(|project| project_slug(&project.name) == slug)
    }

    pub fn contact(&self, kind: ContactKind) -> Option<&ContactLink> {
        self.contacts.iter().find(|contact| contact.kind == kind)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Amara Thuridha".to_string(),
            owner_short_name: "Amara".to_string(),
            logo_text: "amar".to_string(),
            contacts: default_contacts(),
            sections: default_sections(),
            projects: default_projects(),
        }
    }
}

fn default_contacts() -> Vec<ContactLink> {
    fn contact(kind: ContactKind, label: &str, url: &str) -> ContactLink {
        ContactLink {
            kind,
            label: label.to_string(),
            url: url.to_string(),
        }
    }

    vec![
        contact(
            ContactKind::Email,
            "athuridhaa@gmail.com",
            "mailto:athuridhaa@gmail.com",
        ),
        contact(
            ContactKind::Linkedin,
            "linkedin.com/in/amara-thuridha-3baa3122b",
            "https://linkedin.com/in/amara-thuridha-3baa3122b",
        ),
        contact(
            ContactKind::Github,
            "github.com/athuridha",
            "https://github.com/athuridha",
        ),
    ]
}

fn default_sections() -> Vec<SectionContent> {
    fn entry(title: &str, organization: &str, period: &str, description: &str) -> TimelineEntry {
        TimelineEntry {
            title: title.to_string(),
            organization: organization.to_string(),
            period: period.to_string(),
            description: description.to_string(),
        }
    }

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    vec![
        SectionContent {
            section: ProfileSection::About,
            heading: "Amara Thuridha".to_string(),
            tagline: Some("Student · Designer · Developer".to_string()),
            paragraphs: strings(&[
                "I'm a student and aspiring developer based in Jakarta, Indonesia. Currently pursuing a degree in \
                 Information Systems at Universitas Tarumanagara, focusing on business process analysis and \
                 technology implementation.",
                "My passion lies in creating innovative solutions that bridge the gap between business processes \
                 and technology. I enjoy exploring new technologies and frameworks to enhance my skills and stay \
                 up-to-date with the latest industry trends.",
                "Prior to that I was involved in various volunteer activities including being a Member of Visual \
                 Design Creative at Tarumanagara Fair 2023, focused on creating engaging visual content and event \
                 documentation.",
            ]),
            entries: Vec::new(),
        },
        SectionContent {
            section: ProfileSection::Education,
            heading: "Education".to_string(),
            tagline: None,
            paragraphs: Vec::new(),
            entries: vec![entry(
                "Bachelor of Information Systems",
                "Universitas Tarumanagara",
                "2022 - Present (Expected 2026)",
                "Currently pursuing a degree in Information Systems, focusing on business process analysis, \
                 database management, and information technology implementation in organizations.",
            )],
        },
        SectionContent {
            section: ProfileSection::Experience,
            heading: "Volunteer Experience".to_string(),
            tagline: None,
            paragraphs: Vec::new(),
            entries: vec![
                entry(
                    "Member of Visual Design Creative",
                    "Tarumanagara Fair 2023",
                    "Mar 2024 - Jun 2024",
                    "Responsible for creating an engaging and informative event trailer video to attract \
                     participants and build excitement before the event. Also handled video documentation during \
                     the event by capturing and editing key moments for use as official documentation. \
                     Additionally, designed creative and interactive graphic assets for ice-breaking sessions to \
                     foster a fun and dynamic atmosphere for event participants.",
                ),
                entry(
                    "Deputy Coordinator of Publication and Documentation",
                    "UKM OPEN HOUSE 2023",
                    "Okt 2023 - Sep 2023",
                    "Responsible for coordinating and distributing tasks among team members effectively, ensuring \
                     that each individual clearly understands their roles and responsibilities to achieve optimal \
                     team performance. Also provided mentoring and support by assisting team members facing \
                     challenges, offering guidance and practical solutions to help them complete their tasks to the \
                     expected standards.",
                ),
            ],
        },
        SectionContent {
            section: ProfileSection::Contact,
            heading: "Get In Touch".to_string(),
            tagline: None,
            paragraphs: strings(&["Reach me through any of the links below."]),
            entries: Vec::new(),
        },
    ]
}

fn default_projects() -> Vec<Project> {
    fn project(
        name: &str,
        description: &str,
        technologies: &[&str],
        github: Option<&str>,
        live_demo: Option<&str>,
    ) -> Project {
        Project {
            name: name.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            github: github.map(str::to_string),
            live_demo: live_demo.map(str::to_string),
        }
    }

    vec![
        project(
            "Sekolah - Frontend Application",
            "A school management system frontend with a responsive interface for managing school-related data.",
            &["Next.js", "TypeScript", "Tailwind CSS", "React"],
            Some("https://github.com/athuridha/Sekolah"),
            Some("https://sekolah-beta.vercel.app/"),
        ),
        project(
            "Analysis of House Prices in Yogyakarta by Region",
            "Analyzing house price datasets in Yogyakarta.",
            &["Python"],
            None,
            Some("https://colab.research.google.com/drive/1Md_LcGJYyWdLZ5hOohXm5j8u9L4Rgj9T"),
        ),
        project(
            "Front-End Invious Visuals",
            "Front-End Invious Visuals.",
            &["Html", "PHP"],
            Some("https://github.com/athuridha/MidExam-College"),
            Some("https://athuridha.github.io/MidExam-College/"),
        ),
        project(
            "WebApp WhatsApp Blast",
            "A web-based bulk messaging application with an admin dashboard, contact management and message history.",
            &["React", "Node.js", "Express", "Sqlite"],
            Some("https://github.com/athuridha/webapp-whatsapp-blast"),
            None,
        ),
        project(
            "Samudra Kreatif - Agency Frontend",
            "Frontend website for a digital agency.",
            &["Next.js", "React", "Tailwind CSS"],
            Some("https://github.com/athuridha/samudra-kreatif"),
            Some("https://samudra-kreatif.vercel.app/"),
        ),
    ]
}

/// Everything the page can be configured with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    pub layout: LayoutConfig,
    pub site: SiteConfig,
}

impl FolioConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// ============================================================================
// UI State
// ============================================================================

/// Desktop shell state - open windows and shell-level selections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesktopState {
    /// Open windows in opening order, no duplicates
    pub open_windows: Vec<WindowId>,
    pub maximized: BTreeSet<WindowId>,
    pub active_section: ProfileSection,
    pub sidebar_visible: bool,
    pub selected_project: Option<String>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            open_windows: Vec::new(),
            maximized: BTreeSet::new(),
            active_section: ProfileSection::About,
            sidebar_visible: true,
            selected_project: None,
        }
    }
}

impl DesktopState {
    pub fn is_open(&self, window_id: &WindowId) -> bool {
        self.open_windows.contains(window_id)
    }

    pub fn is_maximized(&self, window_id: &WindowId) -> bool {
        self.maximized.contains(window_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ids_parse_to_their_kind() {
        for kind in WindowKind::FIXED {
            let id: WindowId = kind.fixed_id().unwrap().parse().unwrap();
            assert_eq!(id.kind(), kind);
        }
    }

    #[test]
    fn test_project_detail_id_from_name() {
        let id = WindowId::project_detail("WebApp  WhatsApp Blast").unwrap();
        assert_eq!(id.as_str(), "project-detail-webapp-whatsapp-blast");
        assert_eq!(id.kind(), WindowKind::ProjectDetail);
        assert!(id.is_project_detail());
    }

    #[test]
    fn test_blank_project_name_is_rejected() {
        assert_eq!(
            WindowId::project_detail("   "),
            Err(WindowIdError::EmptyProjectSlug("   ".to_string()))
        );
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        assert_eq!(
            "terminal".parse::<WindowId>(),
            Err(WindowIdError::Unknown("terminal".to_string()))
        );
        assert!("project-detail-".parse::<WindowId>().is_err());
        assert!("project-detail-x".parse::<WindowId>().is_ok());
    }

    #[test]
    fn test_window_id_serializes_as_plain_string() {
        let id = WindowId::fixed(WindowKind::FlappyBird).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"flappy-bird\"");

        let bad: Result<WindowId, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_fixed_size_kinds_forbid_resize_and_maximize() {
        for kind in [WindowKind::Calculator, WindowKind::FlappyBird] {
            let caps = kind.capabilities();
            assert!(!caps.resizable);
            assert!(!caps.maximizable);
            assert!(!caps.toolbar);
        }
        assert!(WindowKind::Finder.capabilities().sidebar);
        assert!(!WindowKind::Projects.capabilities().sidebar);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config =
            FolioConfig::from_json(r#"{"layout": {"menu_bar_height": 30}, "site": {"owner_name": "Ada"}}"#)
                .unwrap();
        assert_eq!(config.layout.menu_bar_height, 30.0);
        assert_eq!(config.layout.dock_height, 80.0);
        assert_eq!(config.site.owner_name, "Ada");
        assert_eq!(config.site.projects.len(), 5);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = FolioConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid folio config"));
    }

    #[test]
    fn test_default_site_fills_every_profile_section() {
        let site = SiteConfig::default();
        for section in ProfileSection::ALL {
            let content = site.section(section).unwrap();
            assert!(!content.paragraphs.is_empty() || !content.entries.is_empty());
        }
        let education = site.section(ProfileSection::Education).unwrap();
        assert_eq!(education.entries[0].title, "Bachelor of Information Systems");
        assert_eq!(site.section(ProfileSection::Experience).unwrap().entries.len(), 2);
        assert_eq!(
            site.contact(ContactKind::Email).map(|c| c.url.as_str()),
            Some("mailto:athuridhaa@gmail.com")
        );
        assert!(site.contact(ContactKind::Linkedin).is_some());
        assert!(site.contact(ContactKind::Github).is_some());
    }

    #[test]
    fn test_sections_without_entries_still_parse() {
        let config = FolioConfig::from_json(
            r#"{"site": {"sections": [{"section": "about", "heading": "Hi", "paragraphs": ["One"]}]}}"#,
        )
        .unwrap();
        let about = config.site.section(ProfileSection::About).unwrap();
        assert_eq!(about.tagline, None);
        assert!(about.entries.is_empty());
        assert!(config.site.section(ProfileSection::Education).is_none());
    }

    #[test]
    fn test_project_resolves_from_window_slug() {
        let site = SiteConfig::default();
        let first = WindowId::project_detail("WebApp WhatsApp Blast").unwrap();
        let second = WindowId::project_detail("Front-End Invious Visuals").unwrap();
        assert_eq!(first.project_slug(), Some("webapp-whatsapp-blast"));
        assert_eq!(
            site.project_for_window(&first).map(|p| p.name.as_str()),
            Some("WebApp WhatsApp Blast")
        );
        assert_eq!(
            site.project_for_window(&second).map(|p| p.name.as_str()),
            Some("Front-End Invious Visuals")
        );

        let missing: WindowId = "project-detail-nope".parse().unwrap();
        assert!(site.project_for_window(&missing).is_none());
        assert_eq!(WindowId::fixed(WindowKind::Projects).unwrap().project_slug(), None);
    }

    #[test]
    fn test_mobile_breakpoint_is_exclusive() {
        let layout = LayoutConfig::default();
        assert!(Viewport::new(767.0, 900.0).is_mobile(&layout));
        assert!(!Viewport::new(768.0, 900.0).is_mobile(&layout));
    }
}
