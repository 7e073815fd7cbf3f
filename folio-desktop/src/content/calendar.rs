use chrono::{Datelike, Local, Month, NaiveDate};
use dioxus::prelude::*;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// English month name for 1..=12, empty otherwise.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .map(|month| month.name())
        .unwrap_or("")
}

/// Year and month `delta` months away from the given one.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = shift_month(year, month, 1);
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Sunday-first cells for one month: `None` for the leading blanks, then
/// each day of the month.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as usize;

    std::iter::repeat(None)
        .take(leading)
        .chain((1..=days_in_month(year, month)).map(Some))
        .collect()
}

fn cell_style(cell_size: &str, highlighted: bool) -> String {
    let emphasis = if highlighted {
        " background: var(--danger-bg, #ef4444); color: #fff; font-weight: 600;"
    } else {
        ""
    };
    format!(
        "height: {cell_size}; display: flex; align-items: center; justify-content: center; border-radius: 999px;{emphasis}"
    )
}

#[component]
pub fn MonthGrid(year: i32, month: u32, today: NaiveDate, compact: bool) -> Element {
    let cell_size = if compact { "1.75rem" } else { "2.75rem" };
    let font_size = if compact { "0.75rem" } else { "0.95rem" };
    let highlight = (today.year() == year && today.month() == month).then(|| today.day());

    rsx! {
        div {
            class: "month-grid",
            style: "display: grid; grid-template-columns: repeat(7, {cell_size}); gap: 0.25rem; justify-content: center; font-size: {font_size};",

            for label in WEEKDAY_LABELS {
                div {
                    style: "text-align: center; color: var(--text-muted, #64748b); font-weight: 600;",
                    {label}
                }
            }

            for (index, cell) in month_grid(year, month).into_iter().enumerate() {
                div {
                    key: "{index}",
                    style: cell_style(cell_size, cell.is_some() && cell == highlight),
                    if let Some(day) = cell {
                        "{day}"
                    }
                }
            }
        }
    }
}

/// Body of the calendar window: one month at a time with prev/next controls.
#[component]
pub fn CalendarView() -> Element {
    let today = Local::now().date_naive();
    let mut shown = use_signal(|| (today.year(), today.month()));
    let (year, month) = shown();
    let heading = format!("{} {}", month_name(month), year);

    rsx! {
        div {
            class: "calendar-view",
            style: "display: flex; flex-direction: column; gap: 1rem; padding: 1.25rem; color: var(--text-primary, #f8fafc);",

            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                button {
                    style: "background: transparent; border: 1px solid var(--border-color, #334155); color: inherit; border-radius: var(--radius-sm, 4px); padding: 0.25rem 0.6rem; cursor: pointer;",
                    "aria-label": "Previous month",
                    onclick: move |_| {
                        let (y, m) = shown();
                        shown.set(shift_month(y, m, -1));
                    },
                    "‹"
                }
                h2 {
                    style: "margin: 0; font-size: 1.1rem; font-weight: 600;",
                    "{heading}"
                }
                button {
                    style: "background: transparent; border: 1px solid var(--border-color, #334155); color: inherit; border-radius: var(--radius-sm, 4px); padding: 0.25rem 0.6rem; cursor: pointer;",
                    "aria-label": "Next month",
                    onclick: move |_| {
                        let (y, m) = shown();
                        shown.set(shift_month(y, m, 1));
                    },
                    "›"
                }
            }

            MonthGrid { year, month, today, compact: false }
        }
    }
}
