//! Host input mapped onto fountain actions.
//!
//! Pointer presses and drags move the fountain; `s`/`S` asks the host to
//! save a screenshot. Anything the fountain can do itself it does
//! immediately, anything needing the host comes back as a [`Command`].

/// Raw input from the host, already in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerPressed { x: f32, y: f32 },
    /// Pointer moved while held, so the fountain can be dragged like a sparkler.
    PointerDragged { x: f32, y: f32 },
    KeyPressed(char),
}

/// Work the host has to carry out on the fountain's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write the current frame to the configured screenshot path.
    SaveScreenshot,
}

impl InputEvent {
    /// New fountain origin, if this event moves it.
    pub fn target(&self) -> Option<(f32, f32)> {
        match *self {
            InputEvent::PointerPressed { x, y } | InputEvent::PointerDragged { x, y } => Some((x, y)),
            InputEvent::KeyPressed(_) => None,
        }
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            InputEvent::KeyPressed('s' | 'S') => Some(Command::SaveScreenshot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_events_target_their_position() {
        assert_eq!(InputEvent::PointerPressed { x: 1.0, y: 2.0 }.target(), Some((1.0, 2.0)));
        assert_eq!(InputEvent::PointerDragged { x: 5.0, y: 6.0 }.target(), Some((5.0, 6.0)));
        assert_eq!(InputEvent::KeyPressed('s').target(), None);
    }

    #[test]
    fn only_s_requests_screenshot() {
        assert_eq!(InputEvent::KeyPressed('s').command(), Some(Command::SaveScreenshot));
        assert_eq!(InputEvent::KeyPressed('S').command(), Some(Command::SaveScreenshot));
        assert_eq!(InputEvent::KeyPressed('a').command(), None);
        assert_eq!(InputEvent::PointerPressed { x: 0.0, y: 0.0 }.command(), None);
    }
}
