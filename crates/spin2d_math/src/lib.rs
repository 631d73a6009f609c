//! 2D Mathematics Library
//!
//! This crate provides the vector and transform types for the spin2d engine.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components
//! - [`Mat3`] - 3x3 column-major matrix for 2D affine transforms

mod vec2;
pub mod mat3;

pub use vec2::Vec2;
pub use mat3::Mat3;
