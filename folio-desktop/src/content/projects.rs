use dioxus::prelude::*;
use folio_types::Project;

use crate::interop::open_external;

const NOT_FOUND_HEADING: &str = "Project Not Found";

#[component]
pub fn ProjectsView(projects: Vec<Project>, on_open_project: Callback<String>) -> Element {
    rsx! {
        div {
            class: "projects-view",
            style: "padding: 1rem; color: var(--text-primary, #f8fafc);",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 0.85rem;",
                thead {
                    tr {
                        style: "text-align: left; color: var(--text-muted, #64748b);",
                        th { style: "padding: 0.5rem;", "Name" }
                        th { style: "padding: 0.5rem;", "Technologies" }
                        th { style: "padding: 0.5rem;", "Links" }
                    }
                }
                tbody {
                    for project in projects {
                        ProjectRow { key: "{project.name}", project, on_open_project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectRow(project: Project, on_open_project: Callback<String>) -> Element {
    let name = project.name.clone();
    let technologies = project.technologies.join(", ");

    rsx! {
        tr {
            class: "project-row",
            style: "border-top: 1px solid var(--border-color, #334155); cursor: pointer;",
            onclick: move |_| on_open_project.call(name.clone()),
            td { style: "padding: 0.5rem;", "📄 {project.name}" }
            td { style: "padding: 0.5rem; color: var(--text-secondary, #94a3b8);", "{technologies}" }
            td {
                style: "padding: 0.5rem; display: flex; gap: 0.5rem;",
                ProjectLinks { github: project.github.clone(), live_demo: project.live_demo.clone() }
            }
        }
    }
}

#[component]
fn ProjectLinks(github: Option<String>, live_demo: Option<String>) -> Element {
    rsx! {
        if let Some(url) = github {
            ExternalLink { url, label: "GitHub" }
        }
        if let Some(url) = live_demo {
            ExternalLink { url, label: "Demo" }
        }
    }
}

#[component]
fn ExternalLink(url: String, label: &'static str) -> Element {
    rsx! {
        button {
            style: "background: transparent; border: 1px solid var(--border-color, #334155); border-radius: var(--radius-sm, 4px); padding: 0.1rem 0.45rem; color: var(--accent-bg, #3b82f6); cursor: pointer; font-size: 0.75rem;",
            onclick: move |e| {
                // Row clicks open the detail window; links only open the tab.
                e.stop_propagation();
                open_external(&url);
            },
            {label}
        }
    }
}

#[component]
pub fn ProjectDetailView(project: Option<Project>) -> Element {
    let Some(project) = project else {
        return rsx! {
            div {
                style: "display: flex; align-items: center; justify-content: center; height: 100%; color: var(--text-muted, #64748b); font-size: 1.1rem;",
                {NOT_FOUND_HEADING}
            }
        };
    };

    rsx! {
        article {
            class: "project-detail",
            style: "padding: 1.5rem; color: var(--text-primary, #f8fafc); line-height: 1.6;",
            h1 { style: "margin: 0 0 0.75rem; font-size: 1.5rem;", "{project.name}" }
            p { style: "margin: 0 0 1rem; color: var(--text-secondary, #94a3b8);", "{project.description}" }

            if !project.technologies.is_empty() {
                h2 { style: "margin: 0 0 0.5rem; font-size: 1rem;", "Technologies" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 0.4rem; margin-bottom: 1rem;",
                    for tech in project.technologies.iter() {
                        span {
                            key: "{tech}",
                            style: "padding: 0.15rem 0.55rem; border-radius: 999px; background: var(--hover-bg, rgba(255,255,255,0.1)); font-size: 0.8rem;",
                            "{tech}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; gap: 0.5rem;",
                ProjectLinks { github: project.github.clone(), live_demo: project.live_demo.clone() }
            }
        }
    }
}
