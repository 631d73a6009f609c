//! WGPU canvas backend
//!
//! [`WgpuCanvas`] implements the core's [`Canvas`] capability by buffering
//! CPU-side geometry during the render handler and flushing it to the GPU at
//! presentation. Transforms are applied on the CPU; the shader only maps
//! pixels to NDC.

use spin2d_core::{Canvas, Color};
use spin2d_math::{mat3, Mat3, Vec2};

use crate::context::RenderContext;
use crate::pipeline::{QuadPipeline, Vertex2D};

/// Canvas implementation drawing through the quad pipeline
pub struct WgpuCanvas {
    viewport: [f32; 2],
    clear_color: Color,
    vertices: Vec<Vertex2D>,
}

impl WgpuCanvas {
    pub fn new() -> Self {
        Self {
            viewport: [1.0, 1.0],
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::new(),
        }
    }

    /// Start a new frame for the given viewport size in pixels
    pub fn begin_frame(&mut self, width: f32, height: f32) {
        self.viewport = [width, height];
        self.vertices.clear();
    }

    /// Vertices buffered for the current frame
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    /// Flush the buffered frame to the surface.
    ///
    /// Surface acquisition errors are returned to the caller; the frame's
    /// geometry is kept so a reconfigured surface can retry on the next
    /// redraw.
    pub fn present(
        &mut self,
        ctx: &RenderContext,
        pipeline: &mut QuadPipeline,
    ) -> Result<(), wgpu::SurfaceError> {
        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        pipeline.update_viewport(&ctx.queue, self.viewport[0], self.viewport[1]);
        pipeline.upload_vertices(&ctx.device, &ctx.queue, &self.vertices);

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Canvas Encoder"),
            });

        let [r, g, b, a] = self.clear_color;
        pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
        );

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl Default for WgpuCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for WgpuCanvas {
    fn clear(&mut self, color: Color) {
        // Clearing discards anything drawn earlier in the frame
        self.clear_color = color;
        self.vertices.clear();
    }

    fn fill_rect(&mut self, color: Color, rect: [f32; 4], transform: Mat3) {
        let [x, y, w, h] = rect;

        let corners = [
            mat3::transform_point(transform, Vec2::new(x, y)),
            mat3::transform_point(transform, Vec2::new(x + w, y)),
            mat3::transform_point(transform, Vec2::new(x + w, y + h)),
            mat3::transform_point(transform, Vec2::new(x, y + h)),
        ];

        // Two triangles: 0-1-2 and 0-2-3
        for &i in &[0usize, 1, 2, 0, 2, 3] {
            self.vertices
                .push(Vertex2D::new([corners[i].x, corners[i].y], color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_two_triangles() {
        let mut canvas = WgpuCanvas::new();
        canvas.begin_frame(200.0, 200.0);
        canvas.fill_rect([1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 50.0, 50.0], mat3::IDENTITY);

        assert_eq!(canvas.vertices().len(), 6);
        assert_eq!(canvas.vertices()[0].position, [0.0, 0.0]);
        assert_eq!(canvas.vertices()[1].position, [50.0, 0.0]);
        assert_eq!(canvas.vertices()[2].position, [50.0, 50.0]);
        assert_eq!(canvas.vertices()[5].position, [0.0, 50.0]);
    }

    #[test]
    fn test_fill_rect_applies_transform() {
        let mut canvas = WgpuCanvas::new();
        canvas.begin_frame(200.0, 200.0);

        let transform = mat3::translation(Vec2::new(100.0, 100.0));
        canvas.fill_rect([1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 10.0, 10.0], transform);

        assert_eq!(canvas.vertices()[0].position, [100.0, 100.0]);
        assert_eq!(canvas.vertices()[2].position, [110.0, 110.0]);
    }

    #[test]
    fn test_clear_discards_geometry() {
        let mut canvas = WgpuCanvas::new();
        canvas.begin_frame(200.0, 200.0);
        canvas.fill_rect([1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 10.0, 10.0], mat3::IDENTITY);
        canvas.clear([0.0, 1.0, 0.0, 1.0]);

        assert!(canvas.vertices().is_empty());
    }

    #[test]
    fn test_begin_frame_resets() {
        let mut canvas = WgpuCanvas::new();
        canvas.begin_frame(200.0, 200.0);
        canvas.fill_rect([1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 10.0, 10.0], mat3::IDENTITY);

        canvas.begin_frame(400.0, 300.0);
        assert!(canvas.vertices().is_empty());
    }
}
