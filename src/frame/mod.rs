//! Per-frame scheduling: the update capability traits and the registry
//! that dispatches them.
//!
//! Participants implement [`Updatable`] (per-frame logic, reads input) or
//! [`LateUpdatable`] (end-of-frame bookkeeping) and are registered with a
//! [`Scheduler`], which iterates them directly in registration order; the
//! participant set is known at construction, so no dynamic type inspection
//! is involved.

use web_time::Duration;

use crate::input::InputState;

/// Frame clock.
pub mod clock;

pub use clock::FrameClock;

/// Everything an update participant may read during one frame.
///
/// Borrows the session's [`InputState`] for the duration of the update
/// phase, so queries observe the frame's consistent pre-commit view.
pub struct FrameContext<'a> {
    /// Input state for the current frame (pre-commit).
    pub input: &'a InputState,
    /// Time elapsed since the previous frame began.
    pub delta: Duration,
}

/// Per-frame update participant.
///
/// `update` runs once per frame, during the frame's query phase, where edge
/// queries on `frame.input` are frame-accurate.
pub trait Updatable {
    /// Run this participant's per-frame logic.
    fn update(&mut self, frame: &FrameContext<'_>);
}

/// End-of-frame participant, run after every [`Updatable`] of the frame.
pub trait LateUpdatable {
    /// Run this participant's end-of-frame logic.
    fn late_update(&mut self);
}

/// Ordered registry of frame participants.
///
/// Registration order is execution order within each phase; the late phase
/// always runs after the update phase.
#[derive(Default)]
pub struct Scheduler {
    updatables: Vec<Box<dyn Updatable>>,
    late_updatables: Vec<Box<dyn LateUpdatable>>,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a per-frame update participant.
    pub fn register_updatable<U: Updatable + 'static>(&mut self, participant: U) {
        self.updatables.push(Box::new(participant));
    }

    /// Register an end-of-frame participant.
    pub fn register_late_updatable<L: LateUpdatable + 'static>(
        &mut self,
        participant: L,
    ) {
        self.late_updatables.push(Box::new(participant));
    }

    /// Number of registered update participants.
    #[must_use]
    pub fn updatable_count(&self) -> usize {
        self.updatables.len()
    }

    /// Run the update phase: every [`Updatable`], in registration order.
    pub fn run_update(&mut self, frame: &FrameContext<'_>) {
        for participant in &mut self.updatables {
            participant.update(frame);
        }
    }

    /// Run the late phase: every [`LateUpdatable`], in registration order.
    pub fn run_late_update(&mut self) {
        for participant in &mut self.late_updatables {
            participant.late_update();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type CallLog = Rc<RefCell<Vec<&'static str>>>;

    struct Recorder {
        name: &'static str,
        log: CallLog,
    }

    impl Updatable for Recorder {
        fn update(&mut self, _frame: &FrameContext<'_>) {
            self.log.borrow_mut().push(self.name);
        }
    }

    struct LateRecorder {
        name: &'static str,
        log: CallLog,
    }

    impl LateUpdatable for LateRecorder {
        fn late_update(&mut self) {
            self.log.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn test_updatables_run_in_registration_order() {
        let log: CallLog = Rc::default();
        let mut scheduler = Scheduler::new();
        scheduler.register_updatable(Recorder { name: "first", log: Rc::clone(&log) });
        scheduler.register_updatable(Recorder { name: "second", log: Rc::clone(&log) });
        scheduler.register_updatable(Recorder { name: "third", log: Rc::clone(&log) });

        let input = InputState::new();
        let frame = FrameContext { input: &input, delta: Duration::ZERO };
        scheduler.run_update(&frame);

        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_late_phase_runs_after_update_phase() {
        let log: CallLog = Rc::default();
        let mut scheduler = Scheduler::new();
        scheduler
            .register_late_updatable(LateRecorder { name: "late", log: Rc::clone(&log) });
        scheduler.register_updatable(Recorder { name: "update", log: Rc::clone(&log) });

        let input = InputState::new();
        let frame = FrameContext { input: &input, delta: Duration::ZERO };
        scheduler.run_update(&frame);
        scheduler.run_late_update();

        assert_eq!(*log.borrow(), vec!["update", "late"]);
    }

    #[test]
    fn test_update_phase_sees_frame_input() {
        struct Asserter {
            saw_edge: Rc<RefCell<bool>>,
        }
        impl Updatable for Asserter {
            fn update(&mut self, frame: &FrameContext<'_>) {
                *self.saw_edge.borrow_mut() =
                    frame.input.is_key_just_pressed(crate::input::KeyCode::KeyW);
            }
        }

        let saw_edge = Rc::new(RefCell::new(false));
        let mut scheduler = Scheduler::new();
        scheduler.register_updatable(Asserter { saw_edge: Rc::clone(&saw_edge) });

        let mut input = InputState::new();
        input.set_key_down(crate::input::KeyCode::KeyW);
        let frame = FrameContext { input: &input, delta: Duration::ZERO };
        scheduler.run_update(&frame);

        assert!(*saw_edge.borrow());
    }
}
