//! Demo binary: opens a window and logs input edges as they happen.
//!
//! Run with `RUST_LOG=info cargo run` and mash some keys.

use cadre::frame::FrameContext;
use cadre::input::{KeyCode, MouseButton};
use cadre::{CadreError, Session, Updatable, Viewer};

/// Logs every key/button edge observed during the frame's update phase.
struct EdgeLogger;

impl Updatable for EdgeLogger {
    fn update(&mut self, frame: &FrameContext<'_>) {
        for key in KeyCode::ALL {
            if frame.input.is_key_just_pressed(key) {
                log::info!("{key:?} pressed");
            }
            if frame.input.is_key_just_released(key) {
                log::info!("{key:?} released");
            }
        }
        if frame.input.is_button_just_pressed(MouseButton::Left) {
            log::info!(
                "left click at {}",
                frame.input.pointer_position()
            );
        }
        if frame.input.is_key_down(KeyCode::Space) {
            log::debug!(
                "space held ({:.1} fps)",
                1.0 / frame.delta.as_secs_f32().max(f32::EPSILON)
            );
        }
    }
}

fn main() -> Result<(), CadreError> {
    env_logger::init();

    let mut session = Session::new();
    session.register_updatable(EdgeLogger);

    Viewer::builder()
        .with_title("cadre input edge demo")
        .with_inner_size(960, 540)
        .build()
        .run(session)
}
