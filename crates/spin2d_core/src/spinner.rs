//! Spinning-square animation state and handlers
//!
//! [`Spinner`] is the application state of the animation loop: a single
//! angle advanced at a fixed angular rate by the update handler and read by
//! the render handler, which draws one square rotating about its own center
//! in the middle of the viewport.

use spin2d_math::{mat3, Vec2};

use crate::canvas::{color, Canvas, Color};
use crate::event::{Event, EventSource, RenderArgs, UpdateArgs};

/// Animation state for the spinning square.
///
/// The angle is written only by [`update`](Self::update) and read only by
/// [`render`](Self::render); the cooperative event loop never runs both at
/// once.
#[derive(Clone, Copy, Debug)]
pub struct Spinner {
    /// Rotation in radians, unbounded
    angle: f32,
    /// Angular rate in radians per second
    spin_rate: f32,
    /// Side length of the square in pixels
    square_size: f32,
    background: Color,
    square_color: Color,
}

impl Spinner {
    /// Create a spinner with the stock look: a red 50x50 square on green,
    /// spinning at 2 radians per second.
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            spin_rate: 2.0,
            square_size: 50.0,
            background: color::GREEN,
            square_color: color::RED,
        }
    }

    /// Set the angular rate in radians per second
    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    /// Set the side length of the square in pixels
    pub fn with_square_size(mut self, square_size: f32) -> Self {
        self.square_size = square_size;
        self
    }

    /// Set the clear color
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the fill color of the square
    pub fn with_square_color(mut self, square_color: Color) -> Self {
        self.square_color = square_color;
        self
    }

    /// Current rotation in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Update handler: advance the angle by `spin_rate * dt`.
    pub fn update(&mut self, args: UpdateArgs) {
        self.angle += self.spin_rate * args.dt;
    }

    /// Render handler: clear the frame and draw the square under the
    /// composed transform.
    ///
    /// The transform applies right-to-left: offset the square onto its own
    /// center, rotate, then move the pivot to the viewport center. Reversing
    /// the order would make the square orbit the center instead of spinning
    /// in place.
    pub fn render<C: Canvas>(&self, args: RenderArgs, canvas: &mut C) {
        let square = [0.0, 0.0, self.square_size, self.square_size];
        let half = self.square_size / 2.0;

        let transform = mat3::mul(
            mat3::mul(
                mat3::translation(args.center()),
                mat3::rotation(self.angle),
            ),
            mat3::translation(Vec2::new(-half, -half)),
        );

        canvas.clear(self.background);
        canvas.fill_rect(self.square_color, square, transform);
    }

    /// Deliver one event to the matching handler.
    pub fn event<C: Canvas>(&mut self, event: Event, canvas: &mut C) {
        match event {
            Event::Update(args) => self.update(args),
            Event::Render(args) => self.render(args, canvas),
        }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatch loop: pull events from `source` and deliver each to the
/// matching handler, in order, until the source reports the exit condition.
pub fn run<S, C>(source: &mut S, spinner: &mut Spinner, canvas: &mut C)
where
    S: EventSource,
    C: Canvas,
{
    while let Some(event) = source.next_event() {
        spinner.event(event, canvas);
    }
    log::debug!("event stream ended");
}
