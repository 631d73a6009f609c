//! Timed event model
//!
//! The event loop produces a lazy sequence of ticks, each either a render
//! tick carrying the viewport size or an update tick carrying elapsed time.
//! Sources are pull-based so a test harness can feed deterministic `dt`
//! sequences without any windowing dependency.

use spin2d_math::Vec2;

/// Arguments for an update tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UpdateArgs {
    /// Elapsed seconds since the previous update tick (non-negative)
    pub dt: f32,
}

/// Arguments for a render tick
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderArgs {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl RenderArgs {
    /// Create render arguments for a viewport size
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Midpoint of the viewport
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A timed event, classified as exactly one of render or update
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Render(RenderArgs),
    Update(UpdateArgs),
}

/// Pull-based stream of timed events.
///
/// `None` signals the window-close/exit condition; the stream is not
/// restartable afterwards.
pub trait EventSource {
    fn next_event(&mut self) -> Option<Event>;
}

/// Any iterator of events is a source, so tests can drive the loop from a
/// plain `Vec<Event>`.
impl<I: Iterator<Item = Event>> EventSource for I {
    fn next_event(&mut self) -> Option<Event> {
        self.next()
    }
}
