//! spin2d - Spinning Square
//!
//! Library surface of the spin2d application: exposes the configuration
//! layer for integration tests and embedders. The animation core lives in
//! `spin2d_core`, the wgpu backend in `spin2d_render`.

pub mod config;
