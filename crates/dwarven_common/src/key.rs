use std::fmt;

/// A keyboard key code as delivered by the host.
///
/// Codes follow the SDL keycode layout, which matches ASCII for printable
/// keys and control characters (`Escape` is 27, `'a'` is 97).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Key(pub u32);

impl Key {
    pub const BACKSPACE: Key = Key(8);
    pub const TAB: Key = Key(9);
    pub const RETURN: Key = Key(13);
    pub const ESCAPE: Key = Key(27);
    pub const SPACE: Key = Key(32);
    pub const DELETE: Key = Key(127);
    pub const RIGHT: Key = Key(0x4000_004f);
    pub const LEFT: Key = Key(0x4000_0050);
    pub const DOWN: Key = Key(0x4000_0051);
    pub const UP: Key = Key(0x4000_0052);

    #[inline]
    pub const fn new(code: u32) -> Key {
        Key(code)
    }

    #[inline]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// The printable character for this key, if it has one.
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0).filter(|c| !c.is_control())
    }

    /// Map a DOM `KeyboardEvent.key` name onto the same codes SDL reports.
    ///
    /// Printable keys are folded to lowercase, as SDL keycodes are.
    pub fn from_dom_key(name: &str) -> Option<Key> {
        let key = match name {
            "Backspace" => Key::BACKSPACE,
            "Tab" => Key::TAB,
            "Enter" => Key::RETURN,
            "Escape" => Key::ESCAPE,
            "Delete" => Key::DELETE,
            "ArrowRight" => Key::RIGHT,
            "ArrowLeft" => Key::LEFT,
            "ArrowDown" => Key::DOWN,
            "ArrowUp" => Key::UP,
            _ => {
                let mut chars = name.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                let mut lower = c.to_lowercase();
                let folded = lower.next()?;
                if lower.next().is_some() {
                    return None;
                }
                Key(folded as u32)
            }
        };
        Some(key)
    }
}

impl From<u32> for Key {
    fn from(code: u32) -> Self {
        Key(code)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) => write!(f, "'{}' ({})", c, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
