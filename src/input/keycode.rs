//! Platform-neutral physical key identifiers.
//!
//! [`KeyCode`] is a dense enumeration: the variant order defines a stable
//! index in `[0, KeyCode::COUNT)`, which [`InputState`](super::InputState)
//! uses to back fixed-size state arrays with O(1) lookup. Event sources
//! translate native key identifiers into this domain *before* touching the
//! input state; the fallible conversions here are the only place an invalid
//! key can appear, so a refused code is attributable to the call site that
//! produced it.

/// A physical key on a conventional keyboard.
///
/// Variant names follow the `winit::keyboard::KeyCode` convention
/// (`KeyA`, `Digit1`, `ArrowUp`, ...) so translation code reads naturally.
/// The set covers letters, digits, function keys, modifiers, punctuation,
/// navigation, arrows, and the numeric keypad. Identity only; there are no
/// ordering semantics beyond the index.
#[allow(missing_docs)] // key names are self-describing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    // Digit row
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    // Function row
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    // Control & modifier keys
    Escape,
    Tab,
    CapsLock,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    SuperLeft,
    SuperRight,
    Space,
    Enter,
    Backspace,
    // Punctuation
    Minus,
    Equal,
    BracketLeft,
    BracketRight,
    Backslash,
    Semicolon,
    Quote,
    Backquote,
    Comma,
    Period,
    Slash,
    // Navigation block
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    // Arrows
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    // Numeric keypad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadAdd,
    NumpadSubtract,
    NumpadMultiply,
    NumpadDivide,
    NumpadDecimal,
    NumpadEnter,
}

impl KeyCode {
    /// Number of trackable keys (the length of the state arrays).
    pub const COUNT: usize = 99;

    /// Every key in index order. `ALL[k.index()] == k` for all keys.
    pub const ALL: [Self; Self::COUNT] = [
        Self::KeyA,
        Self::KeyB,
        Self::KeyC,
        Self::KeyD,
        Self::KeyE,
        Self::KeyF,
        Self::KeyG,
        Self::KeyH,
        Self::KeyI,
        Self::KeyJ,
        Self::KeyK,
        Self::KeyL,
        Self::KeyM,
        Self::KeyN,
        Self::KeyO,
        Self::KeyP,
        Self::KeyQ,
        Self::KeyR,
        Self::KeyS,
        Self::KeyT,
        Self::KeyU,
        Self::KeyV,
        Self::KeyW,
        Self::KeyX,
        Self::KeyY,
        Self::KeyZ,
        Self::Digit0,
        Self::Digit1,
        Self::Digit2,
        Self::Digit3,
        Self::Digit4,
        Self::Digit5,
        Self::Digit6,
        Self::Digit7,
        Self::Digit8,
        Self::Digit9,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
        Self::Escape,
        Self::Tab,
        Self::CapsLock,
        Self::ShiftLeft,
        Self::ShiftRight,
        Self::ControlLeft,
        Self::ControlRight,
        Self::AltLeft,
        Self::AltRight,
        Self::SuperLeft,
        Self::SuperRight,
        Self::Space,
        Self::Enter,
        Self::Backspace,
        Self::Minus,
        Self::Equal,
        Self::BracketLeft,
        Self::BracketRight,
        Self::Backslash,
        Self::Semicolon,
        Self::Quote,
        Self::Backquote,
        Self::Comma,
        Self::Period,
        Self::Slash,
        Self::Insert,
        Self::Delete,
        Self::Home,
        Self::End,
        Self::PageUp,
        Self::PageDown,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::Numpad0,
        Self::Numpad1,
        Self::Numpad2,
        Self::Numpad3,
        Self::Numpad4,
        Self::Numpad5,
        Self::Numpad6,
        Self::Numpad7,
        Self::Numpad8,
        Self::Numpad9,
        Self::NumpadAdd,
        Self::NumpadSubtract,
        Self::NumpadMultiply,
        Self::NumpadDivide,
        Self::NumpadDecimal,
        Self::NumpadEnter,
    ];

    /// Dense index of this key in `[0, COUNT)`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a key by its dense index.
    ///
    /// Returns `None` for any index outside `[0, COUNT)`; the caller holds
    /// a raw index of unknown provenance and must handle the refusal rather
    /// than have it silently clamped.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Translate a winit physical key code.
    ///
    /// Returns `None` for keys outside the tracked set (media keys,
    /// international layout keys, ...). Callers at the event boundary log
    /// and drop those rather than guessing a mapping.
    #[cfg(feature = "viewer")]
    #[must_use]
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode as Winit;
        match key {
            Winit::KeyA => Some(Self::KeyA),
            Winit::KeyB => Some(Self::KeyB),
            Winit::KeyC => Some(Self::KeyC),
            Winit::KeyD => Some(Self::KeyD),
            Winit::KeyE => Some(Self::KeyE),
            Winit::KeyF => Some(Self::KeyF),
            Winit::KeyG => Some(Self::KeyG),
            Winit::KeyH => Some(Self::KeyH),
            Winit::KeyI => Some(Self::KeyI),
            Winit::KeyJ => Some(Self::KeyJ),
            Winit::KeyK => Some(Self::KeyK),
            Winit::KeyL => Some(Self::KeyL),
            Winit::KeyM => Some(Self::KeyM),
            Winit::KeyN => Some(Self::KeyN),
            Winit::KeyO => Some(Self::KeyO),
            Winit::KeyP => Some(Self::KeyP),
            Winit::KeyQ => Some(Self::KeyQ),
            Winit::KeyR => Some(Self::KeyR),
            Winit::KeyS => Some(Self::KeyS),
            Winit::KeyT => Some(Self::KeyT),
            Winit::KeyU => Some(Self::KeyU),
            Winit::KeyV => Some(Self::KeyV),
            Winit::KeyW => Some(Self::KeyW),
            Winit::KeyX => Some(Self::KeyX),
            Winit::KeyY => Some(Self::KeyY),
            Winit::KeyZ => Some(Self::KeyZ),
            Winit::Digit0 => Some(Self::Digit0),
            Winit::Digit1 => Some(Self::Digit1),
            Winit::Digit2 => Some(Self::Digit2),
            Winit::Digit3 => Some(Self::Digit3),
            Winit::Digit4 => Some(Self::Digit4),
            Winit::Digit5 => Some(Self::Digit5),
            Winit::Digit6 => Some(Self::Digit6),
            Winit::Digit7 => Some(Self::Digit7),
            Winit::Digit8 => Some(Self::Digit8),
            Winit::Digit9 => Some(Self::Digit9),
            Winit::F1 => Some(Self::F1),
            Winit::F2 => Some(Self::F2),
            Winit::F3 => Some(Self::F3),
            Winit::F4 => Some(Self::F4),
            Winit::F5 => Some(Self::F5),
            Winit::F6 => Some(Self::F6),
            Winit::F7 => Some(Self::F7),
            Winit::F8 => Some(Self::F8),
            Winit::F9 => Some(Self::F9),
            Winit::F10 => Some(Self::F10),
            Winit::F11 => Some(Self::F11),
            Winit::F12 => Some(Self::F12),
            Winit::Escape => Some(Self::Escape),
            Winit::Tab => Some(Self::Tab),
            Winit::CapsLock => Some(Self::CapsLock),
            Winit::ShiftLeft => Some(Self::ShiftLeft),
            Winit::ShiftRight => Some(Self::ShiftRight),
            Winit::ControlLeft => Some(Self::ControlLeft),
            Winit::ControlRight => Some(Self::ControlRight),
            Winit::AltLeft => Some(Self::AltLeft),
            Winit::AltRight => Some(Self::AltRight),
            Winit::SuperLeft => Some(Self::SuperLeft),
            Winit::SuperRight => Some(Self::SuperRight),
            Winit::Space => Some(Self::Space),
            Winit::Enter => Some(Self::Enter),
            Winit::Backspace => Some(Self::Backspace),
            Winit::Minus => Some(Self::Minus),
            Winit::Equal => Some(Self::Equal),
            Winit::BracketLeft => Some(Self::BracketLeft),
            Winit::BracketRight => Some(Self::BracketRight),
            Winit::Backslash => Some(Self::Backslash),
            Winit::Semicolon => Some(Self::Semicolon),
            Winit::Quote => Some(Self::Quote),
            Winit::Backquote => Some(Self::Backquote),
            Winit::Comma => Some(Self::Comma),
            Winit::Period => Some(Self::Period),
            Winit::Slash => Some(Self::Slash),
            Winit::Insert => Some(Self::Insert),
            Winit::Delete => Some(Self::Delete),
            Winit::Home => Some(Self::Home),
            Winit::End => Some(Self::End),
            Winit::PageUp => Some(Self::PageUp),
            Winit::PageDown => Some(Self::PageDown),
            Winit::ArrowUp => Some(Self::ArrowUp),
            Winit::ArrowDown => Some(Self::ArrowDown),
            Winit::ArrowLeft => Some(Self::ArrowLeft),
            Winit::ArrowRight => Some(Self::ArrowRight),
            Winit::Numpad0 => Some(Self::Numpad0),
            Winit::Numpad1 => Some(Self::Numpad1),
            Winit::Numpad2 => Some(Self::Numpad2),
            Winit::Numpad3 => Some(Self::Numpad3),
            Winit::Numpad4 => Some(Self::Numpad4),
            Winit::Numpad5 => Some(Self::Numpad5),
            Winit::Numpad6 => Some(Self::Numpad6),
            Winit::Numpad7 => Some(Self::Numpad7),
            Winit::Numpad8 => Some(Self::Numpad8),
            Winit::Numpad9 => Some(Self::Numpad9),
            Winit::NumpadAdd => Some(Self::NumpadAdd),
            Winit::NumpadSubtract => Some(Self::NumpadSubtract),
            Winit::NumpadMultiply => Some(Self::NumpadMultiply),
            Winit::NumpadDivide => Some(Self::NumpadDivide),
            Winit::NumpadDecimal => Some(Self::NumpadDecimal),
            Winit::NumpadEnter => Some(Self::NumpadEnter),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_table_is_dense_and_in_declaration_order() {
        assert_eq!(KeyCode::ALL.len(), KeyCode::COUNT);
        for (i, key) in KeyCode::ALL.iter().enumerate() {
            assert_eq!(
                key.index(),
                i,
                "ALL[{i}] is {key:?} with index {}",
                key.index()
            );
        }
    }

    #[test]
    fn test_from_index_round_trips() {
        for key in KeyCode::ALL {
            assert_eq!(KeyCode::from_index(key.index()), Some(key));
        }
    }

    #[test]
    fn test_from_index_rejects_out_of_range() {
        assert_eq!(KeyCode::from_index(KeyCode::COUNT), None);
        assert_eq!(KeyCode::from_index(usize::MAX), None);
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn test_winit_translation_covers_tracked_set() {
        use winit::keyboard::KeyCode as Winit;
        assert_eq!(
            KeyCode::from_winit(Winit::KeyW),
            Some(KeyCode::KeyW)
        );
        assert_eq!(
            KeyCode::from_winit(Winit::NumpadEnter),
            Some(KeyCode::NumpadEnter)
        );
        // Outside the tracked set: refused, not clamped.
        assert_eq!(KeyCode::from_winit(Winit::MediaPlayPause), None);
    }
}
