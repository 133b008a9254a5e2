//! The top-level input-consuming session.

use web_time::Duration;

use crate::frame::{FrameClock, FrameContext, LateUpdatable, Scheduler, Updatable};
use crate::input::{InputEvent, InputState};

/// Owner of the input state, the frame scheduler, and the frame clock.
///
/// A `Session` is constructed once at application startup and threaded by
/// reference to whatever needs it; there is no ambient singleton. The
/// event source feeds it via [`handle_event`](Self::handle_event); the host
/// loop drives it via [`advance_frame`](Self::advance_frame), which runs
/// one full frame:
///
/// 1. tick the clock (delta for this frame),
/// 2. every registered [`Updatable`], in order, with a [`FrameContext`]
///    borrowing the pre-commit input state,
/// 3. every registered [`LateUpdatable`], in order,
/// 4. [`InputState::commit`], the frame boundary.
///
/// One `advance_frame` call is exactly one frame; the commit happens once,
/// after all of the frame's queries and before any of the next frame's
/// mutators can be observed.
pub struct Session {
    input: InputState,
    scheduler: Scheduler,
    clock: FrameClock,
}

impl Session {
    /// Create a session with an unlimited-rate clock and no participants.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            scheduler: Scheduler::new(),
            clock: FrameClock::default(),
        }
    }

    /// Replace the frame clock (e.g. to impose a target FPS).
    #[must_use]
    pub fn with_clock(mut self, clock: FrameClock) -> Self {
        self.clock = clock;
        self
    }

    /// Read access to the input state, for query sites outside the
    /// scheduler's participants.
    #[must_use]
    pub const fn input(&self) -> &InputState {
        &self.input
    }

    /// The frame clock (delta / FPS readouts).
    #[must_use]
    pub const fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Register a per-frame update participant.
    pub fn register_updatable<U: Updatable + 'static>(&mut self, participant: U) {
        self.scheduler.register_updatable(participant);
    }

    /// Register an end-of-frame participant.
    pub fn register_late_updatable<L: LateUpdatable + 'static>(
        &mut self,
        participant: L,
    ) {
        self.scheduler.register_late_updatable(participant);
    }

    /// Feed one translated event into the input state.
    ///
    /// Called by the event source as raw notifications arrive, any number
    /// of times between frames, on the same thread as `advance_frame`.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// Run one frame: update phase, late phase, then input commit.
    ///
    /// Returns the frame's delta time.
    pub fn advance_frame(&mut self) -> Duration {
        let delta = self.clock.tick();
        let frame = FrameContext { input: &self.input, delta };
        self.scheduler.run_update(&frame);
        self.scheduler.run_late_update();
        self.input.commit();
        delta
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::input::KeyCode;

    /// Records what the input state looked like during each update phase.
    struct EdgeProbe {
        observations: Rc<RefCell<Vec<(bool, bool)>>>, // (down, just_pressed)
    }

    impl Updatable for EdgeProbe {
        fn update(&mut self, frame: &FrameContext<'_>) {
            self.observations.borrow_mut().push((
                frame.input.is_key_down(KeyCode::Space),
                frame.input.is_key_just_pressed(KeyCode::Space),
            ));
        }
    }

    #[test]
    fn test_edge_is_visible_during_its_frame_and_consumed_after() {
        let observations = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::new();
        session.register_updatable(EdgeProbe {
            observations: Rc::clone(&observations),
        });

        // Frame 1: key goes down before the frame runs.
        session.handle_event(InputEvent::KeyDown { key: KeyCode::Space });
        let _ = session.advance_frame();

        // Frames 2-3: key stays held, no further events.
        let _ = session.advance_frame();
        let _ = session.advance_frame();

        assert_eq!(
            *observations.borrow(),
            vec![(true, true), (true, false), (true, false)],
            "just-pressed must fire on the first frame only"
        );
    }

    #[test]
    fn test_queries_outside_participants_read_pre_commit_state() {
        let mut session = Session::new();
        session.handle_event(InputEvent::KeyDown { key: KeyCode::KeyA });
        assert!(session.input().is_key_just_pressed(KeyCode::KeyA));

        let _ = session.advance_frame();
        assert!(session.input().is_key_down(KeyCode::KeyA));
        assert!(!session.input().is_key_just_pressed(KeyCode::KeyA));
    }

    #[test]
    fn test_late_participants_run_every_frame() {
        struct Counter {
            count: Rc<RefCell<u32>>,
        }
        impl LateUpdatable for Counter {
            fn late_update(&mut self) {
                *self.count.borrow_mut() += 1;
            }
        }

        let count = Rc::new(RefCell::new(0));
        let mut session = Session::new();
        session.register_late_updatable(Counter { count: Rc::clone(&count) });

        let _ = session.advance_frame();
        let _ = session.advance_frame();
        assert_eq!(*count.borrow(), 2);
    }
}
