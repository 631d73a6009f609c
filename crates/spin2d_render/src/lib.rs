//! 2D Rendering Library
//!
//! This crate provides the wgpu-based canvas backend for the spin2d engine.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::QuadPipeline`] - Solid-color 2D triangle pipeline
//! - [`canvas::WgpuCanvas`] - [`spin2d_core::Canvas`] implementation that
//!   buffers per-frame geometry and presents it through the pipeline
//!
//! The backend is one implementation of the core's canvas capability; the
//! animation core never depends on this crate.

pub mod canvas;
pub mod context;
pub mod pipeline;

pub use canvas::WgpuCanvas;
pub use context::RenderContext;
pub use pipeline::{QuadPipeline, Vertex2D, ViewportUniform};

// Re-export core types for convenience
pub use spin2d_core::{Canvas, Color};
