use chrono::{DateTime, Local};
use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use dioxus_logger::tracing::warn;
use gloo_timers::future::TimeoutFuture;

use crate::desktop::components::startup::{STARTUP_COMPLETE_MS, STARTUP_TICK_MS};
use crate::interop::{measure_viewport, on_viewport_change};

const CLOCK_REFRESH_MS: u32 = 60_000;

/// Keep `viewport` in step with the browser window for as long as the task
/// runs. Dropping the task removes the listener.
pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    let mut publish = move |size: (u32, u32)| {
        if *viewport.peek() != size {
            viewport.set(size);
        }
    };

    if let Some(size) = measure_viewport() {
        publish(size);
    }

    let Some(_listener) = on_viewport_change(publish) else {
        warn!("Viewport listener unavailable; layout stays at its first size");
        return;
    };
    std::future::pending::<()>().await;
}

/// Advance the startup clock until the splash is done.
pub async fn run_startup(mut elapsed_ms: Signal<u32>) {
    while *elapsed_ms.peek() < STARTUP_COMPLETE_MS {
        TimeoutFuture::new(STARTUP_TICK_MS).await;
        let next = (*elapsed_ms.peek() + STARTUP_TICK_MS).min(STARTUP_COMPLETE_MS);
        elapsed_ms.set(next);
    }
}

/// Refresh the menu bar clock once a minute for as long as the task lives.
pub async fn run_clock(mut now: Signal<DateTime<Local>>) {
    loop {
        TimeoutFuture::new(CLOCK_REFRESH_MS).await;
        now.set(Local::now());
    }
}
