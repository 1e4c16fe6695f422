use dwarven::{App, Event, Key};

/// The Dwarfare game as seen by the lifecycle core.
///
/// There is no gameplay yet: key presses are logged and counted, and the
/// game only ends when its window is closed.
#[derive(Debug, Default)]
pub struct DwarfareApp {
    key_presses: u64,
    last_key: Option<Key>,
}

impl DwarfareApp {
    pub fn key_presses(&self) -> u64 {
        self.key_presses
    }

    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }
}

impl App for DwarfareApp {
    fn init(&mut self) {
        log::info!("Dwarfare init");
        self.key_presses = 0;
        self.last_key = None;
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown { key } => {
                log::info!("Key down: {}", key);
                self.key_presses += 1;
                self.last_key = Some(*key);
            }
            _ => {}
        }
    }

    fn exit(&mut self) {
        log::info!("Dwarfare exit after {} key presses", self.key_presses);
    }
}
