use dioxus::prelude::*;
use folio_types::{ContactKind, ContactLink, ProfileSection, SectionContent, TimelineEntry};

use crate::interop::open_external;

/// Finder's left column: one row per profile section.
#[component]
pub fn NavigationSidebar(active: ProfileSection, on_select: Callback<ProfileSection>) -> Element {
    rsx! {
        nav {
            class: "navigation-sidebar",
            style: "display: flex; flex-direction: column; gap: 0.15rem; padding: 0.75rem 0.5rem;",
            div {
                style: "padding: 0 0.5rem 0.35rem; font-size: 0.7rem; font-weight: 600; text-transform: uppercase; color: var(--text-muted, #64748b);",
                "Favorites"
            }
            for section in ProfileSection::ALL {
                button {
                    key: "{section:?}",
                    class: if section == active { "sidebar-item active" } else { "sidebar-item" },
                    style: if section == active {
                        "display: flex; align-items: center; gap: 0.5rem; padding: 0.35rem 0.5rem; border: none; border-radius: var(--radius-sm, 4px); background: var(--accent-bg, #3b82f6); color: var(--accent-text, #fff); cursor: pointer; text-align: left; font-size: 0.85rem;"
                    } else {
                        "display: flex; align-items: center; gap: 0.5rem; padding: 0.35rem 0.5rem; border: none; border-radius: var(--radius-sm, 4px); background: transparent; color: var(--text-primary, #f8fafc); cursor: pointer; text-align: left; font-size: 0.85rem;"
                    },
                    onclick: move |_| on_select.call(section),
                    span { {section.glyph()} }
                    span { {section.label()} }
                }
            }
        }
    }
}

/// Contact rows a section lists under its text: About shows the email
/// address, Contact shows every link.
fn listed_contacts(section: ProfileSection, contacts: Vec<ContactLink>) -> Vec<ContactLink> {
    match section {
        ProfileSection::Contact => contacts,
        ProfileSection::About => contacts
            .into_iter()
            .filter(|contact| contact.kind == ContactKind::Email)
            .collect(),
        _ => Vec::new(),
    }
}

/// One profile section as configured.
#[component]
pub fn ProfileView(
    section: ProfileSection,
    content: Option<SectionContent>,
    contacts: Vec<ContactLink>,
) -> Element {
    let heading = content
        .as_ref()
        .map(|content| content.heading.clone())
        .unwrap_or_else(|| section.label().to_string());
    let (tagline, paragraphs, entries) = content
        .map(|content| (content.tagline, content.paragraphs, content.entries))
        .unwrap_or_default();
    let contacts = listed_contacts(section, contacts);

    rsx! {
        article {
            class: "profile-view",
            style: "padding: 1.5rem; color: var(--text-primary, #f8fafc); line-height: 1.6;",
            h1 { style: "margin: 0 0 0.25rem; font-size: 1.5rem;", "{heading}" }
            if let Some(tagline) = tagline {
                div { style: "margin: 0 0 1rem; color: var(--text-muted, #64748b); font-size: 0.9rem;", "{tagline}" }
            }

            for (index, paragraph) in paragraphs.into_iter().enumerate() {
                p { key: "{index}", style: "margin: 0.75rem 0 0; color: var(--text-secondary, #94a3b8);", "{paragraph}" }
            }

            for (index, entry) in entries.into_iter().enumerate() {
                TimelineItem { key: "{index}", entry }
            }

            if !contacts.is_empty() {
                ul {
                    style: "list-style: none; padding: 0; margin: 1rem 0 0; display: flex; flex-direction: column; gap: 0.5rem;",
                    for contact in contacts {
                        ContactRow { key: "{contact.url}", contact }
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> Element {
    rsx! {
        section {
            style: "margin: 1.25rem 0 0; padding-left: 1rem; border-left: 3px solid var(--accent-bg, #3b82f6);",
            h3 { style: "margin: 0; font-size: 1.05rem;", "{entry.title}" }
            div { style: "color: var(--accent-bg, #3b82f6); font-weight: 500;", "{entry.organization}" }
            div { style: "color: var(--text-muted, #64748b); font-size: 0.8rem;", "{entry.period}" }
            if !entry.description.is_empty() {
                p { style: "margin: 0.5rem 0 0; color: var(--text-secondary, #94a3b8);", "{entry.description}" }
            }
        }
    }
}

#[component]
fn ContactRow(contact: ContactLink) -> Element {
    let url = contact.url.clone();

    rsx! {
        li {
            button {
                style: "background: transparent; border: none; padding: 0; color: var(--accent-bg, #3b82f6); cursor: pointer; font-size: 0.95rem; text-decoration: underline;",
                onclick: move |_| open_external(&url),
                "{contact.label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::SiteConfig;

    #[test]
    fn about_lists_only_the_email_and_contact_lists_everything() {
        let contacts = SiteConfig::default().contacts;
        let about = listed_contacts(ProfileSection::About, contacts.clone());
        assert_eq!(about.len(), 1);
        assert_eq!(about[0].kind, ContactKind::Email);

        assert_eq!(listed_contacts(ProfileSection::Contact, contacts.clone()).len(), 3);
        assert!(listed_contacts(ProfileSection::Education, contacts).is_empty());
    }
}
