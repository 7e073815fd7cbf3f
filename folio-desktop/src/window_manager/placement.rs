use folio_types::{LayoutConfig, Viewport, WindowBounds, WindowKind};

/// Space left for panels once the menu bar, dock and padding are taken out.
pub fn available_area(viewport: Viewport, layout: &LayoutConfig) -> (f64, f64) {
    let width = viewport.width - layout.padding * 2.0;
    let height = viewport.height - layout.menu_bar_height - layout.dock_reserve - layout.padding;
    (width.max(0.0), height.max(0.0))
}

/// Size and position a freshly opened panel of `kind`.
///
/// Desktop viewports use the kind's ratio and maximum, floored at the
/// placement minimum and then capped by the available area. Mobile viewports
/// ignore the kind entirely and fill the available area.
pub fn initial_bounds(kind: WindowKind, viewport: Viewport, layout: &LayoutConfig) -> WindowBounds {
    let (available_width, available_height) = available_area(viewport, layout);

    if viewport.is_mobile(layout) {
        let width = available_width.min((viewport.width - 20.0).max(0.0));
        let height = available_height;
        return WindowBounds::new(
            (viewport.width - width) / 2.0,
            layout.menu_bar_height + 10.0,
            width,
            height,
        );
    }

    let sizing = kind.capabilities().sizing;
    let width = (available_width * sizing.width_ratio)
        .min(sizing.max_width)
        .max(layout.min_initial_width)
        .min(available_width);
    let height = (available_height * sizing.height_ratio)
        .min(sizing.max_height)
        .max(layout.min_initial_height)
        .min(available_height);

    let center_x = (viewport.width - width) / 2.0;
    let center_y = layout.menu_bar_height + (available_height - height) / 2.0;

    WindowBounds::new(
        center_x.max(layout.padding),
        center_y.max(layout.menu_bar_height + 10.0),
        width,
        height,
    )
}

/// Full viewport below the menu bar.
pub fn maximized_bounds(viewport: Viewport, layout: &LayoutConfig) -> WindowBounds {
    WindowBounds::new(
        0.0,
        layout.menu_bar_height,
        viewport.width,
        (viewport.height - layout.menu_bar_height).max(0.0),
    )
}

/// Keep a dragged panel inside the viewport, clear of the menu bar and dock.
/// When the panel is larger than the room available the lower bound wins.
pub fn clamp_drag_position(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    viewport: Viewport,
    layout: &LayoutConfig,
) -> (f64, f64) {
    let max_x = viewport.width - width;
    let max_y = viewport.height - height - layout.dock_height;
    (
        x.min(max_x).max(0.0),
        y.min(max_y).max(layout.menu_bar_height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn calculator_clamps_to_its_max_and_centers() {
        let bounds = initial_bounds(WindowKind::Calculator, Viewport::new(1280.0, 800.0), &layout());
        assert_eq!(bounds.width, 400.0);
        assert_eq!(bounds.height, 500.0);
        assert_eq!(bounds.x, 440.0);
        // available height 666, centered below the menu bar
        assert_eq!(bounds.y, 24.0 + (666.0 - 500.0) / 2.0);
    }

    #[test]
    fn default_kind_uses_ratio_below_max() {
        let bounds = initial_bounds(WindowKind::About, Viewport::new(1280.0, 800.0), &layout());
        assert!((bounds.width - 1240.0 * 0.65).abs() < 1e-9);
        assert!((bounds.height - 666.0 * 0.75).abs() < 1e-9);
    }

    #[test]
    fn small_desktop_viewport_floors_then_caps_to_available() {
        // available: 760 x 266
        let bounds = initial_bounds(WindowKind::Finder, Viewport::new(800.0, 400.0), &layout());
        assert_eq!(bounds.width, 532.0);
        assert_eq!(bounds.height, 266.0);
        assert!(bounds.y >= 24.0 + 10.0);
        assert!(bounds.x >= 20.0);
    }

    #[test]
    fn mobile_ignores_kind_ratios() {
        let viewport = Viewport::new(390.0, 844.0);
        let calculator = initial_bounds(WindowKind::Calculator, viewport, &layout());
        let finder = initial_bounds(WindowKind::Finder, viewport, &layout());
        assert_eq!(calculator, finder);
        assert_eq!(calculator.width, 350.0);
        assert_eq!(calculator.height, 844.0 - 24.0 - 90.0 - 20.0);
        assert_eq!(calculator.x, 20.0);
        assert_eq!(calculator.y, 34.0);
    }

    #[test]
    fn tiny_viewport_never_yields_negative_size() {
        let bounds = initial_bounds(WindowKind::About, Viewport::new(30.0, 60.0), &layout());
        assert!(bounds.width >= 0.0);
        assert!(bounds.height >= 0.0);
    }

    #[test]
    fn maximized_covers_everything_below_menu_bar() {
        let bounds = maximized_bounds(Viewport::new(1440.0, 900.0), &layout());
        assert_eq!(bounds, WindowBounds::new(0.0, 24.0, 1440.0, 876.0));
    }

    #[test]
    fn drag_clamp_respects_chrome() {
        let viewport = Viewport::new(1280.0, 800.0);
        assert_eq!(
            clamp_drag_position(-50.0, -50.0, 400.0, 300.0, viewport, &layout()),
            (0.0, 24.0)
        );
        assert_eq!(
            clamp_drag_position(5000.0, 5000.0, 400.0, 300.0, viewport, &layout()),
            (880.0, 420.0)
        );
    }

    #[test]
    fn oversized_panel_pins_to_lower_bound() {
        let viewport = Viewport::new(300.0, 300.0);
        assert_eq!(
            clamp_drag_position(100.0, 100.0, 400.0, 300.0, viewport, &layout()),
            (0.0, 24.0)
        );
    }
}
