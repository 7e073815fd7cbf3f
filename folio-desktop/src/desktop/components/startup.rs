use dioxus::prelude::*;

pub const STARTUP_TICK_MS: u32 = 50;
pub const STARTUP_COMPLETE_MS: u32 = 4_000;
const LOGO_AT_MS: u32 = 500;
const PROGRESS_AT_MS: u32 = 1_500;
const CAPTION_AT_MS: u32 = 2_500;
const PROGRESS_STEP: u32 = 2;

/// Splash screen phases, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StartupStage {
    Blank,
    Logo,
    Progress,
    Caption,
    Complete,
}

impl StartupStage {
    pub fn at(elapsed_ms: u32) -> Self {
        match elapsed_ms {
            ms if ms >= STARTUP_COMPLETE_MS => StartupStage::Complete,
            ms if ms >= CAPTION_AT_MS => StartupStage::Caption,
            ms if ms >= PROGRESS_AT_MS => StartupStage::Progress,
            ms if ms >= LOGO_AT_MS => StartupStage::Logo,
            _ => StartupStage::Blank,
        }
    }
}

/// Percent shown on the progress bar after `elapsed_ms`.
pub fn progress_at(elapsed_ms: u32) -> u32 {
    (elapsed_ms / STARTUP_TICK_MS * PROGRESS_STEP).min(100)
}

#[component]
pub fn StartupScreen(logo_text: String, elapsed_ms: u32) -> Element {
    let stage = StartupStage::at(elapsed_ms);
    let progress = progress_at(elapsed_ms);

    rsx! {
        div {
            class: "startup-screen",
            style: "position: fixed; inset: 0; z-index: 100; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; background: #000; color: #fff;",

            if stage >= StartupStage::Logo {
                div {
                    style: "font-size: 3rem; font-weight: 700; letter-spacing: 0.05em;",
                    "{logo_text}"
                }
            }

            if stage >= StartupStage::Progress {
                div {
                    style: "width: 12rem; height: 4px; background: rgba(255, 255, 255, 0.2); border-radius: 999px; overflow: hidden;",
                    div {
                        style: "width: {progress}%; height: 100%; background: #fff; transition: width 50ms linear;",
                    }
                }
            }

            if stage >= StartupStage::Caption {
                p {
                    style: "margin: 0; font-size: 0.875rem; color: rgba(255, 255, 255, 0.7);",
                    "Starting up..."
                }
            }
        }
    }
}
