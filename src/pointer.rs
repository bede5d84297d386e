//! A pointer glyph drawn at a percentage position along a path.
//!
//! The glyph is either two concentric circles (fill core + stroked
//! halo) or a host-supplied bitmap rotated to the path tangent. The
//! pressed/released status is driven externally by the host's input
//! handling; it only swaps which of the core and halo gets full
//! opacity.

use dial_geometry::PathMeasure;
use glam::Vec2;
use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::paint::{Paint, PaintStyle};
use crate::surface::{Bitmap, RenderSurface};

pub const DEFAULT_HALO_WIDTH: f32 = 10.0;
pub const DEFAULT_HALO_ALPHA: u8 = 128;

/// Externally driven pressed/released state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerStatus {
    #[default]
    Released,
    Pressed,
}

/// Mutable record handed to the before-draw hook. Populating
/// `bitmap` bypasses the default circle glyph; `offset` and `angle`
/// feed the final placement either way.
pub struct PointerInfo {
    pub bitmap: Option<Bitmap>,
    pub halo_paint: Paint,
    pub offset: Vec2,
    /// Path tangent angle in degrees at the sample point.
    pub angle: f32,
}

/// Hook called before the pointer is drawn.
pub type BeforeDrawPointerHook = dyn Fn(&mut PointerInfo);

pub struct Pointer {
    position: f32,
    radius: f32,
    halo_width: f32,
    halo_alpha: u8,
    status: PointerStatus,
    paint: Paint,
    on_before_draw: Option<Box<BeforeDrawPointerHook>>,
}

impl Pointer {
    pub fn new(paint: Paint) -> Self {
        Self {
            position: 0.0,
            radius: 0.0,
            halo_width: DEFAULT_HALO_WIDTH,
            halo_alpha: DEFAULT_HALO_ALPHA,
            status: PointerStatus::Released,
            // The core glyph is filled with a hairline stroke width,
            // whatever style the caller's paint carried.
            paint: paint.with_style(PaintStyle::Fill).with_stroke_width(1.0),
            on_before_draw: None,
        }
    }

    /// Position along the path as a percentage of its length.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Set the position. Values clamp to [0, 100].
    pub fn set_position(&mut self, value: f32) {
        self.position = value.clamp(0.0, 100.0);
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the core glyph radius. Negative values clamp to zero.
    pub fn set_radius(&mut self, value: f32) {
        self.radius = value.max(0.0);
    }

    pub fn halo_width(&self) -> f32 {
        self.halo_width
    }

    /// Set the halo ring stroke width. Negative values clamp to zero.
    pub fn set_halo_width(&mut self, value: f32) {
        self.halo_width = value.max(0.0);
    }

    pub fn halo_alpha(&self) -> u8 {
        self.halo_alpha
    }

    /// Set the halo alpha. Values clamp to [0, 255].
    pub fn set_halo_alpha(&mut self, value: i32) {
        self.halo_alpha = value.clamp(0, 255) as u8;
    }

    pub fn status(&self) -> PointerStatus {
        self.status
    }

    pub fn set_status(&mut self, value: PointerStatus) {
        self.status = value;
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn set_paint(&mut self, paint: Paint) {
        self.paint = paint;
    }

    pub fn set_on_before_draw<F>(&mut self, hook: F)
    where
        F: Fn(&mut PointerInfo) + 'static,
    {
        self.on_before_draw = Some(Box::new(hook));
    }

    /// Draw the pointer onto `surface` at the configured position
    /// along the measured path. A degenerate path suppresses drawing
    /// for this frame.
    pub fn draw(&self, surface: &mut dyn RenderSurface, measure: &PathMeasure) {
        let Some(sample) = measure.sample(self.position) else {
            log::debug!("pointer draw skipped: path has no measurable contour");
            return;
        };

        let is_pressed = self.status == PointerStatus::Pressed;
        let core_paint = self
            .paint
            .with_alpha(if is_pressed { self.halo_alpha } else { 255 });
        let halo_paint = self
            .paint
            .with_alpha(if is_pressed { 255 } else { self.halo_alpha })
            .with_style(PaintStyle::Stroke)
            .with_stroke_width(self.halo_width);

        let mut info = PointerInfo {
            bitmap: None,
            halo_paint,
            offset: Vec2::ZERO,
            angle: sample.angle_degrees,
        };
        if let Some(hook) = &self.on_before_draw {
            hook(&mut info);
        }

        let point = Point::new(f64::from(sample.point.x), f64::from(sample.point.y));

        if let Some(bitmap) = &info.bitmap {
            surface.draw_bitmap(
                bitmap,
                point,
                f64::from(info.angle),
                info.offset,
                &core_paint,
            );
        } else if self.radius > 0.0 {
            // Rotating a circle is a no-op; only the offset rotates.
            let center = rotate_offset(point, info.offset, info.angle);
            surface.draw_circle(center, f64::from(self.radius), &info.halo_paint);
            surface.draw_circle(center, f64::from(self.radius), &core_paint);
        }
    }
}

fn rotate_offset(point: Point, offset: Vec2, angle_degrees: f32) -> Point {
    let rad = f64::from(angle_degrees).to_radians();
    let (sin, cos) = rad.sin_cos();
    let dx = f64::from(offset.x) * cos - f64::from(offset.y) * sin;
    let dy = f64::from(offset.x) * sin + f64::from(offset.y) * cos;
    Point::new(point.x + dx, point.y + dy)
}
