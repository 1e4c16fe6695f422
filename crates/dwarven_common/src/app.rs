use crate::event::Event;
use crate::DEFAULT_TITLE;

/// Game-side hooks driven by the lifecycle core.
///
/// The core forwards every queued event to `handle_event` during `update`,
/// and asks `should_exit` afterwards. Nothing here is required: the
/// defaults describe an app that ignores input and never asks to stop.
pub trait App: Send {
    fn init(&mut self) {}

    fn handle_event(&mut self, _event: &Event) {}

    fn should_exit(&self) -> bool {
        false
    }

    fn exit(&mut self) {}

    fn title(&self) -> String {
        DEFAULT_TITLE.to_string()
    }
}

/// An app that does nothing with its input.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleApp;

impl App for IdleApp {
    fn handle_event(&mut self, event: &Event) {
        log::trace!("Idle app ignoring {:?}", event);
    }
}
