// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-synchronized keyboard and mouse input tracking.
//!
//! Cadre records the instantaneous state of every trackable key and mouse
//! button and answers edge-transition queries ("was this key pressed *this
//! frame*?") with frame-accurate semantics, by keeping a double-buffered
//! snapshot of input state: the current frame's state and the previous
//! frame's state, advanced once per frame by [`InputState::commit`].
//!
//! # Key entry points
//!
//! - [`input::InputState`] - the double-buffered key/button state store
//! - [`session::Session`] - top-level owner of input state, scheduler, and
//!   frame clock
//! - [`frame::Updatable`] / [`frame::LateUpdatable`] - per-frame capability
//!   traits dispatched by the [`frame::Scheduler`]
//! - `viewer::Viewer` - winit-backed window that feeds the session
//!   (feature `viewer`)
//!
//! # Frame protocol
//!
//! Within one frame, event mutators ([`InputState::set_key_down`] and
//! friends) may fire any number of times in any order; queries read a
//! consistent view the whole time. [`Session::advance_frame`] then runs
//! every registered update participant, every late-update participant, and
//! finally commits: the previous-frame snapshot catches up to the current
//! state and a new frame begins. Without the commit, edges would never
//! reset.
//!
//! ```
//! use cadre::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.set_key_down(KeyCode::Space);
//! assert!(input.is_key_just_pressed(KeyCode::Space));
//! input.commit();
//! assert!(input.is_key_down(KeyCode::Space));
//! assert!(!input.is_key_just_pressed(KeyCode::Space));
//! ```

pub mod error;
pub mod frame;
pub mod input;
pub mod session;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::CadreError;
pub use frame::{FrameContext, LateUpdatable, Scheduler, Updatable};
pub use input::{InputEvent, InputState, KeyCode, MouseButton};
pub use session::Session;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;

pub use glam::Vec2;
