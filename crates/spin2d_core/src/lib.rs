//! Core types for the spin2d engine
//!
//! This crate provides the backend-independent animation core:
//!
//! - [`Canvas`] - Abstract drawing capability implemented by render backends
//! - [`Color`] - RGBA color as a plain `[f32; 4]`
//! - [`Event`] - Tagged union of render and update ticks
//! - [`EventSource`] - Pull-based stream of timed events
//! - [`Spinner`] - Animation state with its update and render handlers
//! - [`run`] - The dispatch loop delivering events to the matching handler
//!
//! Nothing in this crate touches a window or a GPU; a scripted
//! [`EventSource`] and a recording [`Canvas`] are enough to exercise the
//! whole loop in tests.

mod canvas;
mod event;
mod spinner;

pub use canvas::{Canvas, Color, color};
pub use event::{Event, EventSource, RenderArgs, UpdateArgs};
pub use spinner::{run, Spinner};

// Re-export commonly used types from spin2d_math for convenience
pub use spin2d_math::{mat3, Mat3, Vec2};
