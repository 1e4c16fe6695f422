use std::collections::VecDeque;

use typed_builder::TypedBuilder;

use crate::error::LifecycleError;
use crate::{App, Event, IdleApp, UpdateResult, WindowHandle, DEFAULT_EVENT_CAPACITY};

#[cfg(test)]
mod tests;

/// Where a [`Lifecycle`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Uninitialized,
    Running,
    Stopped,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct LifecycleConfig {
    #[builder(default = DEFAULT_EVENT_CAPACITY)]
    pub event_capacity: usize,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        LifecycleConfig::builder().build()
    }
}

/// The application lifecycle driven by a host loop.
///
/// A host calls [`init`](Self::init) once, then feeds window-close
/// notifications and input events between calls to
/// [`update`](Self::update) until it answers
/// [`UpdateResult::StopRunning`], and finally calls [`kill`](Self::kill).
///
/// Events are copied into a queue on delivery and handed to the [`App`] in
/// delivery order on the next `update`. Once stopped, a lifecycle stays
/// stopped until it is killed and initialized again.
pub struct Lifecycle {
    state: LifecycleState,
    events: VecDeque<Event>,
    app: Box<dyn App>,
    config: LifecycleConfig,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Lifecycle::with_app(IdleApp)
    }

    pub fn with_app(app: impl App + 'static) -> Self {
        Lifecycle::with_config(app, LifecycleConfig::default())
    }

    pub fn with_config(app: impl App + 'static, config: LifecycleConfig) -> Self {
        Lifecycle {
            state: LifecycleState::Uninitialized,
            events: VecDeque::new(),
            app: Box::new(app),
            config,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn title(&self) -> String {
        self.app.title()
    }

    pub fn init(&mut self) -> Result<(), LifecycleError> {
        if self.state != LifecycleState::Uninitialized {
            log::warn!("Dwarven init called while {:?}", self.state);
            return Err(LifecycleError::AlreadyInitialized(self.state));
        }
        log::info!("Dwarven init");
        self.events = VecDeque::with_capacity(self.config.event_capacity);
        self.app.init();
        self.state = LifecycleState::Running;
        Ok(())
    }

    pub fn on_window_close(&mut self, window: WindowHandle) -> Result<(), LifecycleError> {
        match self.state {
            LifecycleState::Uninitialized => Err(LifecycleError::NotInitialized),
            LifecycleState::Running => {
                log::info!("Window {:#x} closed, stopping", window.raw());
                self.state = LifecycleState::Stopped;
                Ok(())
            }
            LifecycleState::Stopped => {
                log::debug!("Window {:#x} closed, already stopped", window.raw());
                Ok(())
            }
        }
    }

    pub fn receive_event(&mut self, event: &Event) -> Result<(), LifecycleError> {
        match self.state {
            LifecycleState::Uninitialized => Err(LifecycleError::NotInitialized),
            LifecycleState::Running => {
                log::debug!("Queued {:?}", event);
                self.events.push_back(*event);
                Ok(())
            }
            LifecycleState::Stopped => {
                log::debug!("Dropped {:?}, lifecycle stopped", event);
                Ok(())
            }
        }
    }

    pub fn update(&mut self) -> Result<UpdateResult, LifecycleError> {
        if self.state == LifecycleState::Uninitialized {
            return Err(LifecycleError::NotInitialized);
        }

        while let Some(event) = self.events.pop_front() {
            self.app.handle_event(&event);
        }

        if self.state == LifecycleState::Running && self.app.should_exit() {
            log::info!("App requested exit, stopping");
            self.state = LifecycleState::Stopped;
        }

        Ok(match self.state {
            LifecycleState::Stopped => UpdateResult::StopRunning,
            _ => UpdateResult::KeepRunning,
        })
    }

    pub fn kill(&mut self) -> Result<(), LifecycleError> {
        if self.state == LifecycleState::Uninitialized {
            return Err(LifecycleError::NotInitialized);
        }
        if !self.events.is_empty() {
            log::debug!("Discarding {} unhandled events", self.events.len());
        }
        self.events.clear();
        self.app.exit();
        self.state = LifecycleState::Uninitialized;
        log::info!("Dwarven exit");
        Ok(())
    }
}
