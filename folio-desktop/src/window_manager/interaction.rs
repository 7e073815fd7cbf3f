use folio_types::{LayoutConfig, Viewport, WindowBounds, WindowCapabilities, WindowKind};

use super::placement::{clamp_drag_position, initial_bounds, maximized_bounds};

/// One of the eight hit regions around a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::Left,
        ResizeEdge::Right,
    ];

    fn moves_left(self) -> bool {
        matches!(self, ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft)
    }

    fn moves_right(self) -> bool {
        matches!(self, ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight)
    }

    fn moves_top(self) -> bool {
        matches!(self, ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight)
    }

    pub fn cursor(self) -> &'static str {
        match self {
            ResizeEdge::Top => "n-resize",
            ResizeEdge::Bottom => "s-resize",
            ResizeEdge::Left => "w-resize",
            ResizeEdge::Right => "e-resize",
            ResizeEdge::TopLeft => "nw-resize",
            ResizeEdge::TopRight => "ne-resize",
            ResizeEdge::BottomLeft => "sw-resize",
            ResizeEdge::BottomRight => "se-resize",
        }
    }

    /// Absolute placement of the hit region inside the panel. Corners are
    /// 12px squares, edges a 4px strip between them.
    pub fn handle_style(self) -> &'static str {
        match self {
            ResizeEdge::TopLeft => "top: 0; left: 0; width: 12px; height: 12px;",
            ResizeEdge::TopRight => "top: 0; right: 0; width: 12px; height: 12px;",
            ResizeEdge::BottomLeft => "bottom: 0; left: 0; width: 12px; height: 12px;",
            ResizeEdge::BottomRight => "bottom: 0; right: 0; width: 12px; height: 12px;",
            ResizeEdge::Top => "top: 0; left: 12px; right: 12px; height: 4px;",
            ResizeEdge::Bottom => "bottom: 0; left: 12px; right: 12px; height: 4px;",
            ResizeEdge::Left => "left: 0; top: 12px; bottom: 12px; width: 4px;",
            ResizeEdge::Right => "right: 0; top: 12px; bottom: 12px; width: 4px;",
        }
    }

    /// Move the dragged edges of `anchor` by the pointer delta. Edges that are
    /// not dragged keep their absolute coordinate, including when the floor
    /// absorbs the rest of the pointer travel.
    pub fn apply(self, anchor: WindowBounds, dx: f64, dy: f64, layout: &LayoutConfig) -> WindowBounds {
        let mut next = anchor;

        if self.moves_right() {
            next.width = (anchor.width + dx).max(layout.min_resize_width);
        }
        if self.moves_left() {
            let right = anchor.right();
            next.x = (anchor.x + dx).min(right - layout.min_resize_width);
            next.width = right - next.x;
        }
        if self.moves_bottom() {
            next.height = (anchor.height + dy).max(layout.min_resize_height);
        }
        if self.moves_top() {
            let bottom = anchor.bottom();
            next.y = (anchor.y + dy).min(bottom - layout.min_resize_height);
            next.height = bottom - next.y;
        }

        next
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }
}

/// Panel-level conditions that switch interactions off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanelMode {
    pub maximized: bool,
    pub mobile: bool,
}

impl PanelMode {
    fn interactive(self) -> bool {
        !self.maximized && !self.mobile
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    Idle,
    Dragging {
        offset_x: f64,
        offset_y: f64,
    },
    Resizing {
        edge: ResizeEdge,
        anchor: WindowBounds,
        start_x: f64,
        start_y: f64,
    },
}

/// Geometry and interaction state owned by one panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelState {
    pub bounds: WindowBounds,
    pub interaction: Interaction,
}

impl PanelState {
    pub fn new(bounds: WindowBounds) -> Self {
        Self {
            bounds,
            interaction: Interaction::Idle,
        }
    }

    pub fn placed(kind: WindowKind, viewport: Viewport, layout: &LayoutConfig) -> Self {
        Self::new(initial_bounds(kind, viewport, layout))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle)
    }

    /// Re-run initial placement after the viewport changed. A drag or resize
    /// in flight is dropped so its anchor cannot restore the old geometry.
    pub fn relayout(&mut self, kind: WindowKind, viewport: Viewport, layout: &LayoutConfig) {
        self.bounds = initial_bounds(kind, viewport, layout);
        self.interaction = Interaction::Idle;
    }

    /// Start a title bar drag. The offset is taken against the stored bounds,
    /// which the open animation's transform does not touch. `attached` is
    /// false while the panel element is not in the document yet; the drag
    /// does not start then.
    pub fn begin_drag(&mut self, pointer: (f64, f64), attached: bool, mode: PanelMode) -> bool {
        if !mode.interactive() || !self.is_idle() || !attached {
            return false;
        }

        self.interaction = Interaction::Dragging {
            offset_x: pointer.0 - self.bounds.x,
            offset_y: pointer.1 - self.bounds.y,
        };
        true
    }

    pub fn begin_resize(
        &mut self,
        edge: ResizeEdge,
        pointer: (f64, f64),
        pointer_kind: PointerKind,
        capabilities: &WindowCapabilities,
        mode: PanelMode,
    ) -> bool {
        if !mode.interactive()
            || !capabilities.resizable
            || pointer_kind == PointerKind::Touch
            || !self.is_idle()
        {
            return false;
        }

        self.interaction = Interaction::Resizing {
            edge,
            anchor: self.bounds,
            start_x: pointer.0,
            start_y: pointer.1,
        };
        true
    }

    /// Feed a pointer move. Returns whether the bounds changed.
    pub fn pointer_move(&mut self, pointer: (f64, f64), viewport: Viewport, layout: &LayoutConfig) -> bool {
        let next = match self.interaction {
            Interaction::Idle => return false,
            Interaction::Dragging { offset_x, offset_y } => {
                let (x, y) = clamp_drag_position(
                    pointer.0 - offset_x,
                    pointer.1 - offset_y,
                    self.bounds.width,
                    self.bounds.height,
                    viewport,
                    layout,
                );
                WindowBounds { x, y, ..self.bounds }
            }
            Interaction::Resizing {
                edge,
                anchor,
                start_x,
                start_y,
            } => edge.apply(anchor, pointer.0 - start_x, pointer.1 - start_y, layout),
        };

        let changed = next != self.bounds;
        self.bounds = next;
        changed
    }

    /// Pointer up, touch end or cancel. Always returns to idle.
    pub fn end_interaction(&mut self) {
        self.interaction = Interaction::Idle;
    }

    /// Maximize toggles are refused for fixed-size kinds and mid-gesture.
    pub fn can_toggle_maximize(&self, capabilities: &WindowCapabilities) -> bool {
        capabilities.maximizable && self.is_idle()
    }

    /// What actually gets rendered. The stored bounds are left alone while
    /// maximized so restoring returns to them.
    pub fn rendered_bounds(&self, maximized: bool, viewport: Viewport, layout: &LayoutConfig) -> WindowBounds {
        if maximized {
            maximized_bounds(viewport, layout)
        } else {
            self.bounds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: PanelMode = PanelMode {
        maximized: false,
        mobile: false,
    };

    fn layout() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    fn panel() -> PanelState {
        PanelState::new(WindowBounds::new(100.0, 100.0, 400.0, 300.0))
    }

    fn resizable() -> WindowCapabilities {
        WindowKind::About.capabilities()
    }

    #[test]
    fn drag_follows_pointer_delta() {
        let mut state = panel();
        assert!(state.begin_drag((120.0, 110.0), true, DESKTOP));
        assert!(state.pointer_move((170.0, 160.0), viewport(), &layout()));
        assert_eq!(state.bounds, WindowBounds::new(150.0, 150.0, 400.0, 300.0));
        state.end_interaction();
        assert!(state.is_idle());
    }

    #[test]
    fn drag_before_the_panel_is_attached_does_not_start() {
        let mut state = panel();
        assert!(!state.begin_drag((120.0, 110.0), false, DESKTOP));
        assert!(state.is_idle());
        assert!(!state.pointer_move((500.0, 500.0), viewport(), &layout()));
        assert_eq!(state.bounds, panel().bounds);
    }

    #[test]
    fn drag_is_disabled_when_maximized_or_mobile() {
        let mut state = panel();
        let maximized = PanelMode {
            maximized: true,
            mobile: false,
        };
        let mobile = PanelMode {
            maximized: false,
            mobile: true,
        };
        assert!(!state.begin_drag((0.0, 0.0), true, maximized));
        assert!(!state.begin_drag((0.0, 0.0), true, mobile));
    }

    #[test]
    fn drag_sequences_stay_inside_bounds() {
        let viewport = viewport();
        let layout = layout();
        let mut state = panel();
        assert!(state.begin_drag((110.0, 110.0), true, DESKTOP));

        for step in -20..=40 {
            let pointer = (f64::from(step) * 97.0, f64::from(step) * -53.0 + 400.0);
            state.pointer_move(pointer, viewport, &layout);
            let b = state.bounds;
            assert!(b.x >= 0.0 && b.x <= viewport.width - b.width);
            assert!(b.y >= layout.menu_bar_height);
            assert!(b.y <= viewport.height - b.height - layout.dock_height);
        }
    }

    #[test]
    fn right_edge_resize_keeps_left_edge() {
        let mut state = panel();
        let layout = layout();
        assert!(state.begin_resize(
            ResizeEdge::Right,
            (500.0, 250.0),
            PointerKind::Mouse,
            &resizable(),
            DESKTOP
        ));
        for dx in [-500.0, -50.0, 0.0, 35.0, 400.0] {
            state.pointer_move((500.0 + dx, 250.0), viewport(), &layout);
            assert_eq!(state.bounds.x, 100.0);
            assert!(state.bounds.width >= layout.min_resize_width);
        }
        assert_eq!(state.bounds.width, 800.0);
    }

    #[test]
    fn left_edge_resize_keeps_right_edge_past_the_floor() {
        let mut state = PanelState::new(WindowBounds::new(100.0, 100.0, 600.0, 400.0));
        let layout = layout();
        assert!(state.begin_resize(
            ResizeEdge::Left,
            (100.0, 300.0),
            PointerKind::Mouse,
            &resizable(),
            DESKTOP
        ));

        state.pointer_move((-50.0, 300.0), viewport(), &layout);
        assert_eq!(state.bounds.x, -50.0);
        assert_eq!(state.bounds.right(), 700.0);

        state.pointer_move((900.0, 300.0), viewport(), &layout);
        assert_eq!(state.bounds.width, 400.0);
        assert_eq!(state.bounds.x, 300.0);
        assert_eq!(state.bounds.right(), 700.0);
    }

    #[test]
    fn top_edge_resize_keeps_bottom_edge() {
        let mut state = PanelState::new(WindowBounds::new(100.0, 200.0, 500.0, 400.0));
        let layout = layout();
        assert!(state.begin_resize(
            ResizeEdge::Top,
            (300.0, 200.0),
            PointerKind::Mouse,
            &resizable(),
            DESKTOP
        ));
        for dy in [-100.0, 60.0, 300.0, 1000.0] {
            state.pointer_move((300.0, 200.0 + dy), viewport(), &layout);
            assert_eq!(state.bounds.bottom(), 600.0);
            assert!(state.bounds.height >= 300.0);
        }
        assert_eq!(state.bounds.y, 300.0);
    }

    #[test]
    fn corner_resize_composes_both_axes() {
        let mut state = PanelState::new(WindowBounds::new(200.0, 200.0, 500.0, 400.0));
        assert!(state.begin_resize(
            ResizeEdge::TopLeft,
            (200.0, 200.0),
            PointerKind::Mouse,
            &resizable(),
            DESKTOP
        ));
        state.pointer_move((150.0, 260.0), viewport(), &layout());
        assert_eq!(state.bounds, WindowBounds::new(150.0, 260.0, 550.0, 340.0));
    }

    #[test]
    fn resize_refused_for_touch_fixed_kinds_and_maximized() {
        let mut state = panel();
        assert!(!state.begin_resize(
            ResizeEdge::Right,
            (0.0, 0.0),
            PointerKind::Touch,
            &resizable(),
            DESKTOP
        ));
        assert!(!state.begin_resize(
            ResizeEdge::Right,
            (0.0, 0.0),
            PointerKind::Mouse,
            &WindowKind::Calculator.capabilities(),
            DESKTOP
        ));
        assert!(!state.begin_resize(
            ResizeEdge::Right,
            (0.0, 0.0),
            PointerKind::Mouse,
            &resizable(),
            PanelMode {
                maximized: true,
                mobile: false
            }
        ));
        assert!(state.is_idle());
    }

    #[test]
    fn stray_moves_after_pointer_up_are_ignored() {
        let mut state = panel();
        assert!(state.begin_resize(
            ResizeEdge::BottomRight,
            (500.0, 400.0),
            PointerKind::Mouse,
            &resizable(),
            DESKTOP
        ));
        state.pointer_move((560.0, 430.0), viewport(), &layout());
        state.end_interaction();
        let settled = state.bounds;

        assert!(!state.pointer_move((900.0, 700.0), viewport(), &layout()));
        assert_eq!(state.bounds, settled);
        assert_eq!(state.interaction, Interaction::Idle);
    }

    #[test]
    fn drag_and_resize_are_exclusive() {
        let mut state = panel();
        assert!(state.begin_drag((110.0, 110.0), true, DESKTOP));
        assert!(!state.begin_resize(
            ResizeEdge::Right,
            (500.0, 250.0),
            PointerKind::Mouse,
            &resizable(),
            DESKTOP
        ));
        assert!(matches!(state.interaction, Interaction::Dragging { .. }));
    }

    #[test]
    fn maximize_round_trip_restores_exact_bounds() {
        let state = PanelState::new(WindowBounds::new(123.5, 77.0, 640.0, 480.0));
        let maximized = state.rendered_bounds(true, viewport(), &layout());
        assert_eq!(maximized, WindowBounds::new(0.0, 24.0, 1280.0, 776.0));
        assert_eq!(
            state.rendered_bounds(false, viewport(), &layout()),
            WindowBounds::new(123.5, 77.0, 640.0, 480.0)
        );
    }

    #[test]
    fn maximize_refused_mid_gesture_and_for_fixed_kinds() {
        let mut state = panel();
        assert!(state.can_toggle_maximize(&resizable()));
        assert!(!state.can_toggle_maximize(&WindowKind::FlappyBird.capabilities()));

        state.begin_drag((110.0, 110.0), true, DESKTOP);
        assert!(!state.can_toggle_maximize(&resizable()));
    }

    #[test]
    fn drag_offset_ignores_the_rendered_transform() {
        // Grabbed 40px into a 400px panel while it still renders at 0.8 scale.
        let mut state = panel();
        assert!(state.begin_drag((140.0, 110.0), true, DESKTOP));
        state.pointer_move((141.0, 110.0), viewport(), &layout());
        assert_eq!(state.bounds.x, 101.0);
        assert_eq!(state.bounds.y, 100.0);
    }

    #[test]
    fn relayout_mid_resize_keeps_the_new_placement() {
        let layout = layout();
        let mut state = PanelState::placed(WindowKind::About, viewport(), &layout);
        let corner = (state.bounds.right(), state.bounds.bottom());
        assert!(state.begin_resize(
            ResizeEdge::BottomRight,
            corner,
            PointerKind::Mouse,
            &resizable(),
            DESKTOP
        ));

        let small = Viewport::new(900.0, 600.0);
        state.relayout(WindowKind::About, small, &layout);
        let relaid = state.bounds;
        assert!(state.is_idle());

        assert!(!state.pointer_move((corner.0 + 1.0, corner.1 + 1.0), small, &layout));
        assert_eq!(state.bounds, relaid);
        assert!(relaid.right() <= small.width);
        assert!(relaid.bottom() <= small.height);
    }

    #[test]
    fn relayout_while_maximized_restores_to_fresh_placement() {
        let layout = layout();
        let mut state = PanelState::new(WindowBounds::new(10.0, 30.0, 1200.0, 700.0));
        let small = Viewport::new(1024.0, 700.0);
        state.relayout(WindowKind::Projects, small, &layout);

        assert_eq!(
            state.rendered_bounds(true, small, &layout),
            WindowBounds::new(0.0, 24.0, 1024.0, 676.0)
        );
        assert_eq!(
            state.rendered_bounds(false, small, &layout),
            initial_bounds(WindowKind::Projects, small, &layout)
        );
    }
}
