/// Keyboard key identifier.
///
/// Only the keys the runtime reacts to get a named variant.
/// Everything else maps to `Key::Unknown(u32)` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
///
/// Runtime translates window system events into these.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
    },

    /// The OS asked for the window to close (title bar button, Alt+F4, ...).
    CloseRequested,

    /// New framebuffer size in physical pixels.
    Resized { width: u32, height: u32 },
}

/// Effect of an input event on the canvas.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CanvasAction {
    RequestClose,
}

/// Maps a key transition to a canvas action.
///
/// Escape closes the window when it is released, not when it is pressed.
pub fn key_action(key: Key, state: KeyState) -> Option<CanvasAction> {
    match (key, state) {
        (Key::Escape, KeyState::Released) => Some(CanvasAction::RequestClose),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_release_requests_close() {
        assert_eq!(
            key_action(Key::Escape, KeyState::Released),
            Some(CanvasAction::RequestClose)
        );
    }

    #[test]
    fn escape_press_is_ignored() {
        assert_eq!(key_action(Key::Escape, KeyState::Pressed), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        for state in [KeyState::Pressed, KeyState::Released] {
            assert_eq!(key_action(Key::Unknown(42), state), None);
        }
    }
}
