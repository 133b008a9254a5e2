//! Input handling: key/button identifiers, platform-agnostic events, and
//! the double-buffered state store with frame-accurate edge detection.

/// Platform-agnostic input events and mouse buttons.
pub mod event;
/// Dense physical-key enumeration.
pub mod keycode;
/// The double-buffered state store.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keycode::KeyCode;
pub use state::InputState;
