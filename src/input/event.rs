//! Platform-agnostic input events and mouse button identifiers.

use glam::Vec2;

use super::keycode::KeyCode;

/// Platform-agnostic input events.
///
/// These are produced by an event source (e.g. the winit viewer) after
/// translating native identifiers, and routed into the state store via
/// [`InputState::apply`](super::InputState::apply).
///
/// # Example
///
/// ```
/// use cadre::input::{InputEvent, InputState, KeyCode};
///
/// let mut input = InputState::new();
/// input.apply(InputEvent::KeyDown { key: KeyCode::KeyW });
/// assert!(input.is_key_down(KeyCode::KeyW));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key went down (repeated delivery while held is harmless).
    KeyDown {
        /// Which key.
        key: KeyCode,
    },
    /// A key came back up.
    KeyUp {
        /// Which key.
        key: KeyCode,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Pointer moved to an absolute position in the caller's coordinate
    /// space (opaque to the state store: no clamping, no smoothing).
    CursorMoved {
        /// New pointer position.
        position: Vec2,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Number of tracked mouse buttons.
    pub const COUNT: usize = 3;

    /// Dense index of this button in `[0, COUNT)`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Translate a winit mouse button.
    ///
    /// Returns `None` for buttons outside the tracked set (back/forward
    /// thumb buttons, vendor extras). Collapsing those onto a tracked
    /// button would desynchronize per-button state, so they are refused at
    /// the boundary instead.
    #[cfg(feature = "viewer")]
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}
