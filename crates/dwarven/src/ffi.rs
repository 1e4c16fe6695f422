//! C ABI over one process-wide [`Lifecycle`], for hosts written in other
//! languages. The matching declarations live in `include/dwarven.h`.
//!
//! Errors cannot cross this boundary, so precondition violations are logged
//! and the call does nothing.

use std::ffi::{c_char, c_void};
use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

use crate::{App, Event, Key, Lifecycle, LifecycleError, UpdateResult, WindowHandle};

lazy_static! {
    static ref CORE: Mutex<Lifecycle> = Mutex::new(Lifecycle::new());
}

fn core() -> MutexGuard<'static, Lifecycle> {
    CORE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn report(operation: &str, result: Result<(), LifecycleError>) {
    if let Err(err) = result {
        log::error!("dwarven_{}: {}", operation, err);
    }
}

/// Replace the app driven by the process-wide lifecycle.
///
/// Only allowed while uninitialized, so a running app is never swapped out
/// mid-run.
///
/// The app's callbacks run with the process-wide lifecycle locked: calling
/// any `dwarven_*` function from inside them deadlocks.
pub fn set_app(app: impl App + 'static) -> Result<(), LifecycleError> {
    let mut core = core();
    if core.state() != crate::LifecycleState::Uninitialized {
        return Err(LifecycleError::AlreadyInitialized(core.state()));
    }
    *core = Lifecycle::with_app(app);
    Ok(())
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKeyDown {
    pub key: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union RawEventData {
    pub key_down: RawKeyDown,
}

/// `struct Event` as laid out by C hosts: a tag followed by its payload.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawEvent {
    pub tag: u32,
    pub data: RawEventData,
}

impl RawEvent {
    pub const KEY_DOWN: u32 = 0;

    pub fn key_down(key: u32) -> RawEvent {
        RawEvent {
            tag: RawEvent::KEY_DOWN,
            data: RawEventData {
                key_down: RawKeyDown { key },
            },
        }
    }

    /// `None` for tags this build does not know about.
    pub fn to_event(&self) -> Option<Event> {
        match self.tag {
            // SAFETY: every payload variant is a plain `u32` record.
            RawEvent::KEY_DOWN => Some(Event::key_down(Key(unsafe { self.data.key_down.key }))),
            _ => None,
        }
    }
}

#[no_mangle]
pub extern "C" fn dwarven_init() {
    report("init", core().init());
}

#[no_mangle]
pub extern "C" fn dwarven_on_window_close(window_handle: *mut c_void) {
    report(
        "on_window_close",
        core().on_window_close(WindowHandle::from(window_handle)),
    );
}

/// # Safety
///
/// `event` must be null or point to a valid `struct Event` for the duration
/// of the call. The pointer is not kept.
#[no_mangle]
pub unsafe extern "C" fn dwarven_receive_event(event: *const RawEvent) {
    let Some(raw) = event.as_ref() else {
        log::warn!("dwarven_receive_event: null event");
        return;
    };
    match raw.to_event() {
        Some(event) => report("receive_event", core().receive_event(&event)),
        None => log::debug!("dwarven_receive_event: ignoring unknown tag {}", raw.tag),
    }
}

/// Returns `stop_running` when called before `dwarven_init`, so a
/// misbehaving host leaves its loop instead of spinning.
#[no_mangle]
pub extern "C" fn dwarven_update() -> UpdateResult {
    core().update().unwrap_or_else(|err| {
        log::error!("dwarven_update: {}", err);
        UpdateResult::StopRunning
    })
}

#[no_mangle]
pub extern "C" fn dwarven_kill() {
    report("kill", core().kill());
}

/// Copy the window title into `buf` as a NUL-terminated string, truncating
/// to fit on a UTF-8 character boundary, and return the full title length in bytes (without the NUL).
///
/// # Safety
///
/// `buf` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn dwarven_window_title(buf: *mut c_char, len: usize) -> usize {
    let title = core().title();
    let bytes = title.as_bytes();
    if !buf.is_null() && len > 0 {
        let mut n = bytes.len().min(len - 1);
        while !title.is_char_boundary(n) {
            n -= 1;
        }
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), n);
        *buf.add(n) = 0;
    }
    bytes.len()
}
