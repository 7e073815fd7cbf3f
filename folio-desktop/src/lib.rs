pub mod config;
pub mod content;
pub mod desktop;
pub mod desktop_window;
pub mod interop;
pub mod window_manager;

pub use config::*;
pub use desktop::*;
pub use desktop_window::*;
pub use interop::*;
