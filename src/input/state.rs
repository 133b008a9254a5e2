//! The double-buffered input state store.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keycode::KeyCode;

/// Frame-synchronized keyboard and mouse state.
///
/// Two parallel snapshots are kept for keys and for buttons: the *current*
/// state, mutated as raw events arrive, and the *previous* state, frozen
/// for the duration of the frame. Edge queries ([`is_key_just_pressed`],
/// [`is_key_just_released`] and the button equivalents) compare the two;
/// [`commit`] advances the previous snapshot at the frame boundary.
///
/// The value is constructed once at session startup with everything
/// released and the pointer at the origin, and lives for the whole
/// input-consuming session. Access is exclusive and single-threaded: event
/// mutators and queries are expected to run on the same logical thread
/// (callers bridging a threaded event source serialize externally).
///
/// [`is_key_just_pressed`]: Self::is_key_just_pressed
/// [`is_key_just_released`]: Self::is_key_just_released
/// [`commit`]: Self::commit
#[derive(Debug, Clone)]
pub struct InputState {
    current_keys: [bool; KeyCode::COUNT],
    previous_keys: [bool; KeyCode::COUNT],
    current_buttons: [bool; MouseButton::COUNT],
    previous_buttons: [bool; MouseButton::COUNT],
    pointer: Vec2,
}

impl InputState {
    /// Create a state store with every key and button released and the
    /// pointer at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_keys: [false; KeyCode::COUNT],
            previous_keys: [false; KeyCode::COUNT],
            current_buttons: [false; MouseButton::COUNT],
            previous_buttons: [false; MouseButton::COUNT],
            pointer: Vec2::ZERO,
        }
    }

    // ── Event mutators ───────────────────────────────────────────────────

    /// Record that `key` is down.
    ///
    /// Touches the current snapshot only. Idempotent: OS auto-repeat or
    /// duplicate delivery within a frame has no further effect.
    pub fn set_key_down(&mut self, key: KeyCode) {
        self.current_keys[key.index()] = true;
    }

    /// Record that `key` is up. Same contract as [`set_key_down`](Self::set_key_down).
    pub fn set_key_up(&mut self, key: KeyCode) {
        self.current_keys[key.index()] = false;
    }

    /// Record that `button` is down.
    pub fn set_button_down(&mut self, button: MouseButton) {
        self.current_buttons[button.index()] = true;
    }

    /// Record that `button` is up.
    pub fn set_button_up(&mut self, button: MouseButton) {
        self.current_buttons[button.index()] = false;
    }

    /// Overwrite the pointer position.
    ///
    /// The coordinate space belongs to the caller; no validation, clamping,
    /// or smoothing is applied, and no position history is kept.
    pub fn set_pointer_position(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Route a platform-agnostic event to the matching mutator.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } => self.set_key_down(key),
            InputEvent::KeyUp { key } => self.set_key_up(key),
            InputEvent::MouseButton { button, pressed: true } => {
                self.set_button_down(button);
            }
            InputEvent::MouseButton { button, pressed: false } => {
                self.set_button_up(button);
            }
            InputEvent::CursorMoved { position } => {
                self.set_pointer_position(position);
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Whether `key` is down as of the most recent event.
    #[must_use]
    pub const fn is_key_down(&self, key: KeyCode) -> bool {
        self.current_keys[key.index()]
    }

    /// Whether `key` went down this frame (up at the last commit, down now).
    ///
    /// True only during the exact frame the up→down transition was
    /// observed; false on later frames even while the key stays held.
    #[must_use]
    pub const fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.current_keys[key.index()] && !self.previous_keys[key.index()]
    }

    /// Whether `key` came up this frame (down at the last commit, up now).
    #[must_use]
    pub const fn is_key_just_released(&self, key: KeyCode) -> bool {
        !self.current_keys[key.index()] && self.previous_keys[key.index()]
    }

    /// Whether `button` is down as of the most recent event.
    #[must_use]
    pub const fn is_button_down(&self, button: MouseButton) -> bool {
        self.current_buttons[button.index()]
    }

    /// Whether `button` went down this frame.
    #[must_use]
    pub const fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.current_buttons[button.index()]
            && !self.previous_buttons[button.index()]
    }

    /// Whether `button` came up this frame.
    #[must_use]
    pub const fn is_button_just_released(&self, button: MouseButton) -> bool {
        !self.current_buttons[button.index()]
            && self.previous_buttons[button.index()]
    }

    /// Last reported pointer position (the origin before any report).
    #[must_use]
    pub const fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    // ── Frame boundary ───────────────────────────────────────────────────

    /// Advance the previous-frame snapshot to match the current state.
    ///
    /// Call exactly once per frame, after every query and mutator for the
    /// frame and before any mutator of the next one; conventionally the
    /// scheduler does this at end of frame ([`Session::advance_frame`]).
    /// This is the sole state-advancing operation: skipping it leaves edges
    /// stuck, calling it early consumes them.
    ///
    /// [`Session::advance_frame`]: crate::session::Session::advance_frame
    pub fn commit(&mut self) {
        self.previous_keys = self.current_keys;
        self.previous_buttons = self.current_buttons;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_all_clear() {
        let input = InputState::new();
        for key in KeyCode::ALL {
            assert!(!input.is_key_down(key));
            assert!(!input.is_key_just_pressed(key));
            assert!(!input.is_key_just_released(key));
        }
        for button in
            [MouseButton::Left, MouseButton::Right, MouseButton::Middle]
        {
            assert!(!input.is_button_down(button));
            assert!(!input.is_button_just_pressed(button));
            assert!(!input.is_button_just_released(button));
        }
        assert_eq!(input.pointer_position(), Vec2::ZERO);
    }

    #[test]
    fn test_press_edge_within_frame_then_consumed_by_commit() {
        let mut input = InputState::new();

        input.set_key_down(KeyCode::Space);
        assert!(input.is_key_down(KeyCode::Space));
        assert!(input.is_key_just_pressed(KeyCode::Space));
        assert!(!input.is_key_just_released(KeyCode::Space));

        input.commit();
        assert!(input.is_key_down(KeyCode::Space), "still held after commit");
        assert!(
            !input.is_key_just_pressed(KeyCode::Space),
            "edge must not persist past the frame it occurred in"
        );
    }

    #[test]
    fn test_release_edge() {
        let mut input = InputState::new();
        input.set_key_down(KeyCode::KeyA);
        input.commit();

        input.set_key_up(KeyCode::KeyA);
        assert!(!input.is_key_down(KeyCode::KeyA));
        assert!(input.is_key_just_released(KeyCode::KeyA));
        assert!(!input.is_key_just_pressed(KeyCode::KeyA));

        input.commit();
        assert!(!input.is_key_just_released(KeyCode::KeyA));
    }

    #[test]
    fn test_redundant_press_is_idempotent() {
        let mut once = InputState::new();
        once.set_key_down(KeyCode::KeyW);

        let mut twice = InputState::new();
        twice.set_key_down(KeyCode::KeyW);
        twice.set_key_down(KeyCode::KeyW);

        for key in KeyCode::ALL {
            assert_eq!(once.is_key_down(key), twice.is_key_down(key));
            assert_eq!(
                once.is_key_just_pressed(key),
                twice.is_key_just_pressed(key)
            );
        }
    }

    #[test]
    fn test_held_key_fires_just_pressed_on_first_frame_only() {
        let mut input = InputState::new();
        input.set_key_down(KeyCode::KeyD);
        assert!(input.is_key_just_pressed(KeyCode::KeyD));
        input.commit();

        // Held across several frames with no further events.
        for frame in 0..5 {
            assert!(input.is_key_down(KeyCode::KeyD), "frame {frame}");
            assert!(
                !input.is_key_just_pressed(KeyCode::KeyD),
                "edge reappeared on frame {frame}"
            );
            input.commit();
        }
    }

    #[test]
    fn test_key_mutation_does_not_leak_into_other_state() {
        let mut input = InputState::new();
        input.set_pointer_position(Vec2::new(3.0, 4.0));
        input.set_button_down(MouseButton::Right);
        input.commit();

        input.set_key_down(KeyCode::KeyQ);
        input.set_key_up(KeyCode::KeyQ);

        for key in KeyCode::ALL {
            if key != KeyCode::KeyQ {
                assert!(!input.is_key_down(key));
                assert!(!input.is_key_just_pressed(key));
            }
        }
        assert!(input.is_button_down(MouseButton::Right));
        assert!(!input.is_button_just_pressed(MouseButton::Right));
        assert_eq!(input.pointer_position(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_button_edges_mirror_key_edges() {
        let mut input = InputState::new();

        input.set_button_down(MouseButton::Left);
        assert!(input.is_button_down(MouseButton::Left));
        assert!(input.is_button_just_pressed(MouseButton::Left));
        input.commit();
        assert!(!input.is_button_just_pressed(MouseButton::Left));

        input.set_button_up(MouseButton::Left);
        assert!(input.is_button_just_released(MouseButton::Left));
        input.commit();
        assert!(!input.is_button_just_released(MouseButton::Left));
    }

    #[test]
    fn test_pointer_passthrough_is_exact_and_commit_neutral() {
        let mut input = InputState::new();
        let p = Vec2::new(-12.5, 9000.25);
        input.set_pointer_position(p);
        assert_eq!(input.pointer_position(), p);
        input.commit();
        assert_eq!(input.pointer_position(), p, "commit must not touch it");
    }

    #[test]
    fn test_apply_routes_every_event_kind() {
        let mut input = InputState::new();
        input.apply(InputEvent::KeyDown { key: KeyCode::Enter });
        input.apply(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: true,
        });
        input.apply(InputEvent::CursorMoved {
            position: Vec2::new(1.0, 2.0),
        });
        assert!(input.is_key_down(KeyCode::Enter));
        assert!(input.is_button_down(MouseButton::Middle));
        assert_eq!(input.pointer_position(), Vec2::new(1.0, 2.0));

        input.apply(InputEvent::KeyUp { key: KeyCode::Enter });
        input.apply(InputEvent::MouseButton {
            button: MouseButton::Middle,
            pressed: false,
        });
        assert!(!input.is_key_down(KeyCode::Enter));
        assert!(!input.is_button_down(MouseButton::Middle));
    }
}
