//! spin2d - Spinning Square
//!
//! Opens a window and renders a square rotating about its own center. Each
//! redraw synthesizes an update tick followed by a render tick and feeds
//! both through the core dispatch, so the live loop exercises the same path
//! as the test harness.

mod config;

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use spin2d_core::{Event, RenderArgs, Spinner, UpdateArgs};
use spin2d_render::{QuadPipeline, RenderContext, WgpuCanvas};

use config::AppConfig;

/// Stall guard: one long debugger pause or window drag must not spin the
/// square by minutes worth of rotation in a single tick.
const MAX_FRAME_DT: f32 = 0.25;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<QuadPipeline>,
    canvas: WgpuCanvas,
    spinner: Spinner,
    last_frame: Instant,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let spinner = Spinner::new()
            .with_spin_rate(config.animation.spin_rate)
            .with_square_size(config.animation.square_size)
            .with_background(config.rendering.background_color)
            .with_square_color(config.rendering.square_color);

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            canvas: WgpuCanvas::new(),
            spinner,
            last_frame: Instant::now(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context and pipeline
            let render_context = pollster::block_on(RenderContext::new(
                window.clone(),
                self.config.window.vsync,
            ));
            let pipeline =
                QuadPipeline::new(&render_context.device, render_context.config.format);

            log::info!(
                "Opened '{}' at {}x{}",
                self.config.window.title,
                self.config.window.width,
                self.config.window.height
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
            self.last_frame = Instant::now();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        log::info!("Escape pressed, exiting");
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                // Calculate delta time
                let now = Instant::now();
                let raw_dt = (now - self.last_frame).as_secs_f32();
                let dt = raw_dt.min(MAX_FRAME_DT);
                self.last_frame = now;

                let (Some(ctx), Some(pipeline)) =
                    (self.render_context.as_mut(), self.pipeline.as_mut())
                else {
                    return;
                };

                // One update tick, then one render tick, through the same
                // dispatch the tests use
                let render_args =
                    RenderArgs::new(ctx.size.width as f32, ctx.size.height as f32);
                self.canvas.begin_frame(render_args.width, render_args.height);
                self.spinner
                    .event(Event::Update(UpdateArgs { dt }), &mut self.canvas);
                self.spinner.event(Event::Render(render_args), &mut self.canvas);

                match self.canvas.present(ctx, pipeline) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = ctx.size;
                        ctx.resize(size);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory, exiting");
                        event_loop.exit();
                        return;
                    }
                    Err(e) => {
                        log::warn!("Surface error: {:?}", e);
                    }
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting spin2d");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
