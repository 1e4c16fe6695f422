use std::sync::{Arc, Mutex};

use super::*;
use crate::Key;

/// Records every event it is handed and asks to exit after `exit_after`
/// events, when set.
#[derive(Default, Clone)]
struct RecordingApp {
    seen: Arc<Mutex<Vec<Event>>>,
    exits: Arc<Mutex<u32>>,
    exit_after: Option<usize>,
}

impl RecordingApp {
    fn seen(&self) -> Vec<Event> {
        self.seen.lock().unwrap().clone()
    }

    fn exits(&self) -> u32 {
        *self.exits.lock().unwrap()
    }
}

impl App for RecordingApp {
    fn handle_event(&mut self, event: &Event) {
        self.seen.lock().unwrap().push(*event);
    }

    fn should_exit(&self) -> bool {
        self.exit_after
            .is_some_and(|limit| self.seen.lock().unwrap().len() >= limit)
    }

    fn exit(&mut self) {
        *self.exits.lock().unwrap() += 1;
    }
}

fn running() -> Lifecycle {
    let mut lifecycle = Lifecycle::new();
    lifecycle.init().unwrap();
    lifecycle
}

#[test]
fn keeps_running_after_init() {
    let mut lifecycle = running();
    assert_eq!(lifecycle.state(), LifecycleState::Running);
    assert_eq!(lifecycle.update(), Ok(UpdateResult::KeepRunning));
}

#[test]
fn stops_after_window_close() {
    let mut lifecycle = running();
    lifecycle.on_window_close(WindowHandle::new(0xdead)).unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
    assert_eq!(lifecycle.update(), Ok(UpdateResult::StopRunning));
}

#[test]
fn window_close_is_idempotent() {
    let mut lifecycle = running();
    for _ in 0..3 {
        lifecycle.on_window_close(WindowHandle::new(1)).unwrap();
        assert_eq!(lifecycle.update(), Ok(UpdateResult::StopRunning));
    }
}

#[test]
fn key_down_does_not_stop_by_itself() {
    let mut lifecycle = running();
    lifecycle.receive_event(&Event::key_down(Key(65))).unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::KeepRunning));
    lifecycle.receive_event(&Event::key_down(Key::ESCAPE)).unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::KeepRunning));
}

#[test]
fn update_is_stable_without_new_stimuli() {
    let mut lifecycle = running();
    let first = lifecycle.update();
    for _ in 0..5 {
        assert_eq!(lifecycle.update(), first);
    }
    assert_eq!(lifecycle.state(), LifecycleState::Running);
}

#[test]
fn full_run_returns_to_uninitialized() {
    let mut lifecycle = Lifecycle::new();
    lifecycle.init().unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::KeepRunning));
    lifecycle.receive_event(&Event::key_down(Key(27))).unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::KeepRunning));
    lifecycle.on_window_close(WindowHandle::new(7)).unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::StopRunning));
    lifecycle.kill().unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Uninitialized);

    lifecycle.init().unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::KeepRunning));
}

#[test]
fn events_reach_the_app_in_delivery_order() {
    let app = RecordingApp::default();
    let mut lifecycle = Lifecycle::with_app(app.clone());
    lifecycle.init().unwrap();

    let keys = [Key(119), Key(97), Key(115), Key(100)];
    for key in keys {
        lifecycle.receive_event(&Event::key_down(key)).unwrap();
    }
    assert_eq!(lifecycle.pending_events(), keys.len());
    assert!(app.seen().is_empty());

    lifecycle.update().unwrap();
    assert_eq!(lifecycle.pending_events(), 0);
    let expected: Vec<Event> = keys.iter().map(|&key| Event::key_down(key)).collect();
    assert_eq!(app.seen(), expected);
}

#[test]
fn events_before_close_still_reach_the_app() {
    let app = RecordingApp::default();
    let mut lifecycle = Lifecycle::with_app(app.clone());
    lifecycle.init().unwrap();

    lifecycle.receive_event(&Event::key_down(Key(65))).unwrap();
    lifecycle.receive_event(&Event::key_down(Key(66))).unwrap();
    lifecycle.on_window_close(WindowHandle::new(3)).unwrap();

    assert_eq!(lifecycle.update(), Ok(UpdateResult::StopRunning));
    assert_eq!(
        app.seen(),
        vec![Event::key_down(Key(65)), Event::key_down(Key(66))]
    );
}

#[test]
fn app_exit_request_stops_the_run() {
    let app = RecordingApp {
        exit_after: Some(2),
        ..Default::default()
    };
    let mut lifecycle = Lifecycle::with_app(app.clone());
    lifecycle.init().unwrap();

    lifecycle.receive_event(&Event::key_down(Key(1))).unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::KeepRunning));
    lifecycle.receive_event(&Event::key_down(Key(2))).unwrap();
    assert_eq!(lifecycle.update(), Ok(UpdateResult::StopRunning));
    assert_eq!(lifecycle.update(), Ok(UpdateResult::StopRunning));
}

#[test]
fn events_after_stop_are_dropped() {
    let app = RecordingApp::default();
    let mut lifecycle = Lifecycle::with_app(app.clone());
    lifecycle.init().unwrap();
    lifecycle.on_window_close(WindowHandle::default()).unwrap();

    lifecycle.receive_event(&Event::key_down(Key(65))).unwrap();
    assert_eq!(lifecycle.pending_events(), 0);
    assert_eq!(lifecycle.update(), Ok(UpdateResult::StopRunning));
    assert!(app.seen().is_empty());
}

#[test]
fn kill_discards_pending_events_and_exits_app() {
    let app = RecordingApp::default();
    let mut lifecycle = Lifecycle::with_app(app.clone());
    lifecycle.init().unwrap();
    lifecycle.receive_event(&Event::key_down(Key(65))).unwrap();

    lifecycle.kill().unwrap();
    assert_eq!(lifecycle.pending_events(), 0);
    assert_eq!(app.exits(), 1);

    lifecycle.init().unwrap();
    lifecycle.update().unwrap();
    assert!(app.seen().is_empty());
}

#[test]
fn double_init_is_rejected() {
    let mut lifecycle = running();
    assert_eq!(
        lifecycle.init(),
        Err(LifecycleError::AlreadyInitialized(LifecycleState::Running))
    );
    lifecycle.on_window_close(WindowHandle::default()).unwrap();
    assert_eq!(
        lifecycle.init(),
        Err(LifecycleError::AlreadyInitialized(LifecycleState::Stopped))
    );
    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
}

#[test]
fn operations_before_init_are_rejected() {
    let mut lifecycle = Lifecycle::new();
    assert_eq!(lifecycle.update(), Err(LifecycleError::NotInitialized));
    assert_eq!(
        lifecycle.on_window_close(WindowHandle::default()),
        Err(LifecycleError::NotInitialized)
    );
    assert_eq!(
        lifecycle.receive_event(&Event::key_down(Key(65))),
        Err(LifecycleError::NotInitialized)
    );
    assert_eq!(lifecycle.kill(), Err(LifecycleError::NotInitialized));
    assert_eq!(lifecycle.state(), LifecycleState::Uninitialized);
}

#[test]
fn kill_while_running_is_allowed() {
    let mut lifecycle = running();
    lifecycle.kill().unwrap();
    assert_eq!(lifecycle.state(), LifecycleState::Uninitialized);
    assert_eq!(lifecycle.update(), Err(LifecycleError::NotInitialized));
}

#[test]
fn config_sets_queue_capacity() {
    let config = LifecycleConfig::builder().event_capacity(4).build();
    let mut lifecycle = Lifecycle::with_config(IdleApp, config);
    lifecycle.init().unwrap();
    for code in 0..16 {
        lifecycle.receive_event(&Event::key_down(Key(code))).unwrap();
    }
    assert_eq!(lifecycle.pending_events(), 16);
    assert_eq!(LifecycleConfig::default().event_capacity, DEFAULT_EVENT_CAPACITY);
}
