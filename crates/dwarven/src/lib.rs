mod error;
pub mod ffi;
pub mod lifecycle;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use dwarven_common;
pub use dwarven_common::{App, Event, IdleApp, Key, UpdateResult, WindowHandle};
pub use error::LifecycleError;
pub use lifecycle::{Lifecycle, LifecycleConfig, LifecycleState};

/// Initial capacity of the per-frame event queue.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;
