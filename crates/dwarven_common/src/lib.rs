pub mod app;
pub mod color;
pub mod event;
pub mod key;

pub use app::{App, IdleApp};
pub use color::Color;
pub use event::{Event, UpdateResult, WindowHandle};
pub use key::Key;

/// Window title used when an app does not provide its own.
pub const DEFAULT_TITLE: &str = "Dwarfare";
