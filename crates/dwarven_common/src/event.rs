use crate::key::Key;

/// One input occurrence delivered by the host.
///
/// New variants may be added later; code matching on `Event` outside this
/// crate has to carry a catch-all arm, which is where unknown events are
/// ignored.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum Event {
    KeyDown { key: Key },
}

impl Event {
    #[inline]
    pub const fn key_down(key: Key) -> Event {
        Event::KeyDown { key }
    }
}

/// Per-frame answer to the host loop.
#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UpdateResult {
    KeepRunning = 0,
    StopRunning = 1,
}

impl UpdateResult {
    #[inline]
    pub const fn should_stop(self) -> bool {
        matches!(self, UpdateResult::StopRunning)
    }
}

/// Opaque token for a window owned by the host.
///
/// The core only compares and logs it; it never dereferences it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct WindowHandle(usize);

impl WindowHandle {
    #[inline]
    pub const fn new(raw: usize) -> WindowHandle {
        WindowHandle(raw)
    }

    #[inline]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl From<u32> for WindowHandle {
    fn from(id: u32) -> Self {
        WindowHandle(id as usize)
    }
}

impl<T> From<*mut T> for WindowHandle {
    fn from(ptr: *mut T) -> Self {
        WindowHandle(ptr as usize)
    }
}
