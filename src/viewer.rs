//! Standalone input-tracking window backed by winit.
//!
//! The viewer plays both roles a [`Session`] expects of its host: the
//! winit event loop is the event source (native notifications are
//! translated into [`InputEvent`]s at this boundary) and the redraw cycle
//! is the frame scheduler (one redraw = one [`Session::advance_frame`]).
//!
//! ```no_run
//! # use cadre::{Session, Viewer};
//! Viewer::builder()
//!     .with_title("input demo")
//!     .build()
//!     .run(Session::new())
//!     .unwrap();
//! ```

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::error::CadreError;
use crate::input::{InputEvent, KeyCode, MouseButton};
use crate::session::Session;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    title: String,
    inner_size: Option<(u32, u32)>,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Cadre", the
    /// platform's default window size).
    fn new() -> Self {
        Self {
            title: "Cadre".into(),
            inner_size: None,
        }
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window's logical inner size.
    #[must_use]
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        self.inner_size = Some((width, height));
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            title: self.title,
            inner_size: self.inner_size,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that feeds a [`Session`] from native input events.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    title: String,
    inner_size: Option<(u32, u32)>,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// Event translation and frame advancement both happen on the event
    /// loop's thread, which gives the session the exclusive, serialized
    /// access it assumes.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::EventLoop`] if the platform event loop cannot
    /// be created or fails while running, and [`CadreError::Window`] if
    /// window creation fails.
    pub fn run(self, session: Session) -> Result<(), CadreError> {
        let event_loop = EventLoop::new()
            .map_err(|e| CadreError::EventLoop(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            session,
            title: self.title,
            inner_size: self.inner_size,
            init_error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| CadreError::EventLoop(e.to_string()))?;

        app.init_error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Window>,
    session: Session,
    title: String,
    inner_size: Option<(u32, u32)>,
    /// Window-creation failure, surfaced after the loop exits.
    init_error: Option<CadreError>,
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut attrs = Window::default_attributes().with_title(&self.title);
        if let Some((w, h)) = self.inner_size {
            attrs = attrs
                .with_inner_size(winit::dpi::LogicalSize::new(w, h));
        }

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.init_error = Some(CadreError::Window(e.to_string()));
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let Some(key) = KeyCode::from_winit(code) else {
                    // Outside the tracked set: refuse at the boundary.
                    log::debug!("dropping untracked key {code:?}");
                    return;
                };
                let translated = match event.state {
                    ElementState::Pressed => InputEvent::KeyDown { key },
                    ElementState::Released => InputEvent::KeyUp { key },
                };
                // OS auto-repeat re-delivers Pressed while held; forwarding
                // it is harmless (mutators are idempotent).
                self.session.handle_event(translated);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = MouseButton::from_winit(button) else {
                    log::debug!("dropping untracked mouse button {button:?}");
                    return;
                };
                self.session.handle_event(InputEvent::MouseButton {
                    button,
                    pressed: state.is_pressed(),
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.session.handle_event(InputEvent::CursorMoved {
                    position: Vec2::new(
                        position.x as f32,
                        position.y as f32,
                    ),
                });
            }

            WindowEvent::RedrawRequested => {
                let _ = self.session.advance_frame();
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}
