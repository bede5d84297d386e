//! Notch tick marks along an elliptical arc.

use dial_geometry::point_on_arc;
use kurbo::Rect;

use crate::paint::Paint;
use crate::surface::RenderSurface;

/// Hook called before each tick is drawn; receives the painter, the
/// tick angle in degrees and the tick index, and returns the length
/// to use for that tick. Enables major/minor tick patterns.
pub type BeforeNotchHook = dyn Fn(&Paint, f32, u32) -> f32;

/// A series of radial tick marks following an arc.
///
/// The arc is the ellipse inscribed in the region passed to
/// [`Notches::draw`], swept from 0° over `sweep_degrees`. With a
/// count of `n`, `n + 1` ticks are drawn, inclusive of both arc
/// endpoints.
pub struct Notches {
    count: u32,
    length: f32,
    sweep_degrees: f32,
    paint: Paint,
    on_before_notch: Option<Box<BeforeNotchHook>>,
}

impl Notches {
    pub const DEFAULT_LENGTH: f32 = 5.0;

    pub fn new(paint: Paint) -> Self {
        Self {
            count: 0,
            length: Self::DEFAULT_LENGTH,
            sweep_degrees: 360.0,
            paint,
            on_before_notch: None,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Set the tick count. Negative values clamp to zero.
    pub fn set_count(&mut self, value: i32) {
        self.count = value.max(0) as u32;
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    /// Set the tick length. Negative values clamp to zero.
    pub fn set_length(&mut self, value: f32) {
        self.length = value.max(0.0);
    }

    pub fn sweep_degrees(&self) -> f32 {
        self.sweep_degrees
    }

    pub fn set_sweep_degrees(&mut self, value: f32) {
        self.sweep_degrees = value;
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.paint = paint;
    }

    pub fn set_on_before_notch<F>(&mut self, hook: F)
    where
        F: Fn(&Paint, f32, u32) -> f32 + 'static,
    {
        self.on_before_notch = Some(Box::new(hook));
    }

    /// Draw the ticks onto `surface`, following the arc inscribed in
    /// `region`. Draws nothing when the count or length is zero.
    ///
    /// Both endpoints of every tick derive from the same caller
    /// region, so scaling the host surface cannot skew a tick away
    /// from its angle.
    pub fn draw(&self, surface: &mut dyn RenderSurface, region: Rect) {
        if self.count == 0 || self.length <= 0.0 {
            return;
        }

        let delta = self.sweep_degrees / self.count as f32;
        let half_stroke = f64::from(self.paint.stroke_width) / 2.0;

        for index in 0..=self.count {
            let angle = index as f32 * delta;

            let length = match &self.on_before_notch {
                Some(hook) => hook(&self.paint, angle, index).max(0.0),
                None => self.length,
            };
            if length <= 0.0 {
                continue;
            }

            let degrees = f64::from(angle);
            let start = point_on_arc(degrees, region, -f64::from(length) + half_stroke);
            let end = point_on_arc(degrees, region, half_stroke);

            surface.draw_line(start, end, &self.paint);
        }
    }
}
