use chrono::{Datelike, Local, NaiveDateTime};
use dioxus::prelude::*;
use folio_types::{ContactKind, ContactLink};

use crate::content::calendar::MonthGrid;
use crate::desktop::effects;
use crate::interop::{open_external, OutsidePressListener};
use crate::window_manager::CHROME_Z_INDEX;

const CLOCK_FORMAT: &str = "%a, %b %-d %-I:%M %p";
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

pub fn clock_text(now: &NaiveDateTime) -> String {
    now.format(CLOCK_FORMAT).to_string()
}

pub fn long_date_text(now: &NaiveDateTime) -> String {
    now.format(LONG_DATE_FORMAT).to_string()
}

fn contact_glyph(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "✉️",
        ContactKind::Linkedin => "💼",
        ContactKind::Github => "🐙",
        ContactKind::Web => "🌐",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuDropdown {
    Contact,
    Calendar,
}

/// Opening one dropdown closes the other; re-clicking closes it.
fn toggle_dropdown(current: Option<MenuDropdown>, clicked: MenuDropdown) -> Option<MenuDropdown> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn MenuBar(
    owner_name: String,
    owner_short_name: String,
    contacts: Vec<ContactLink>,
    is_mobile: bool,
    on_owner_click: Callback<()>,
) -> Element {
    let now = use_signal(Local::now);
    let mut open_menu = use_signal(|| None::<MenuDropdown>);
    let mut outside_listener = use_signal(|| None::<OutsidePressListener>);

    use_effect(move || {
        spawn(async move {
            effects::run_clock(now).await;
        });
    });

    use_effect(move || {
        if open_menu().is_some() {
            outside_listener.set(OutsidePressListener::register(".menu-bar", move || {
                open_menu.set(None);
            }));
        } else {
            outside_listener.set(None);
        }
    });

    let local_now = now().naive_local();
    let clock = clock_text(&local_now);
    let long_date = long_date_text(&local_now);
    let today = local_now.date();
    let owner_label = if is_mobile { owner_short_name } else { owner_name };

    rsx! {
        div {
            class: "menu-bar",
            style: "position: fixed; top: 0; left: 0; right: 0; height: 24px; z-index: {CHROME_Z_INDEX}; display: flex; align-items: center; justify-content: space-between; padding: 0 0.75rem; background: rgba(15, 23, 42, 0.75); backdrop-filter: blur(12px); color: var(--text-primary, #f8fafc); font-size: 0.8rem; user-select: none;",

            div {
                style: "display: flex; align-items: center; gap: 1rem; height: 100%;",
                button {
                    class: "menu-owner",
                    style: "background: transparent; border: none; color: inherit; font-weight: 700; cursor: pointer; padding: 0; font-size: inherit;",
                    onclick: move |_| on_owner_click.call(()),
                    "{owner_label}"
                }

                div {
                    style: "position: relative; height: 100%; display: flex; align-items: center;",
                    button {
                        class: "menu-item",
                        style: "background: transparent; border: none; color: inherit; cursor: pointer; padding: 0; font-size: inherit;",
                        onclick: move |_| open_menu.set(toggle_dropdown(open_menu(), MenuDropdown::Contact)),
                        "Contact"
                    }
                    if open_menu() == Some(MenuDropdown::Contact) {
                        div {
                            class: "menu-dropdown",
                            style: "position: absolute; top: 24px; left: 0; min-width: 14rem; padding: 0.35rem; background: var(--window-bg, #1e293b); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5));",
                            if contacts.is_empty() {
                                div { style: "padding: 0.35rem 0.5rem; color: var(--text-muted, #64748b);", "No contact links" }
                            }
                            for contact in contacts.iter().cloned() {
                                ContactMenuItem {
                                    key: "{contact.url}",
                                    contact,
                                    on_picked: move |_| open_menu.set(None),
                                }
                            }
                        }
                    }
                }
            }

            div {
                style: "position: relative; height: 100%; display: flex; align-items: center;",
                button {
                    class: "menu-clock",
                    style: "background: transparent; border: none; color: inherit; cursor: pointer; padding: 0; font-size: inherit;",
                    onclick: move |_| open_menu.set(toggle_dropdown(open_menu(), MenuDropdown::Calendar)),
                    "{clock}"
                }
                if open_menu() == Some(MenuDropdown::Calendar) {
                    div {
                        class: "menu-dropdown",
                        style: "position: absolute; top: 24px; right: 0; padding: 0.75rem; background: var(--window-bg, #1e293b); border: 1px solid var(--border-color, #334155); border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5)); display: flex; flex-direction: column; gap: 0.5rem;",
                        div { style: "font-weight: 600; white-space: nowrap;", "{long_date}" }
                        MonthGrid { year: today.year(), month: today.month(), today, compact: true }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactMenuItem(contact: ContactLink, on_picked: Callback<()>) -> Element {
    let url = contact.url.clone();

    rsx! {
        button {
            style: "display: flex; align-items: center; gap: 0.5rem; width: 100%; padding: 0.35rem 0.5rem; background: transparent; border: none; border-radius: var(--radius-sm, 4px); color: inherit; cursor: pointer; text-align: left; font-size: inherit;",
            onclick: move |_| {
                open_external(&url);
                on_picked.call(());
            },
            span { {contact_glyph(contact.kind)} }
            span { "{contact.label}" }
        }
    }
}
