//! Floating window geometry
//!
//! Pure state for one panel: where it sits, how big it is, and whether a drag
//! or resize is in flight. The `FloatingWindow` component owns one
//! [`PanelState`] per open window and feeds it pointer positions.

mod interaction;
mod placement;

pub use interaction::{Interaction, PanelMode, PanelState, PointerKind, ResizeEdge};
pub use placement::{available_area, clamp_drag_position, initial_bounds, maximized_bounds};

/// Stacking tier for panels that are not maximized.
pub const NORMAL_Z_INDEX: u32 = 40;
/// Menu bar and dock sit between the two panel tiers.
pub const CHROME_Z_INDEX: u32 = 50;
pub const MAXIMIZED_Z_INDEX: u32 = 60;

pub fn z_index_for(maximized: bool) -> u32 {
    if maximized {
        MAXIMIZED_Z_INDEX
    } else {
        NORMAL_Z_INDEX
    }
}
