pub mod desktop_icons;
pub mod dock;
pub mod menu_bar;
pub mod startup;
pub mod workspace_canvas;
