//! Backend-agnostic drawing surface.
//!
//! The widgets never touch a raster backend directly; they emit the
//! three primitives below and the host maps them onto whatever it
//! draws with. [`DisplayList`] records the emitted commands and is
//! what the integration tests assert against.

use glam::Vec2;
use kurbo::Point;

use crate::paint::Paint;

/// An encoded bitmap glyph supplied by the host (PNG/JPG bytes plus
/// identity), drawn in place of the default pointer circles.
#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Option<Vec<u8>>,
    pub id: Option<String>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: None,
            id: None,
        }
    }
}

/// Drawing primitives the widgets require from a host surface.
pub trait RenderSurface {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint);

    /// Draw `bitmap` centered on `center`, rotated about it by
    /// `rotation_degrees`, then translated by `offset`.
    fn draw_bitmap(
        &mut self,
        bitmap: &Bitmap,
        center: Point,
        rotation_degrees: f64,
        offset: Vec2,
        paint: &Paint,
    );
}

/// One recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Bitmap {
        bitmap: Bitmap,
        center: Point,
        rotation_degrees: f64,
        offset: Vec2,
        paint: Paint,
    },
}

/// Recording surface: keeps every command in submission order.
#[derive(Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for DisplayList {
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn draw_bitmap(
        &mut self,
        bitmap: &Bitmap,
        center: Point,
        rotation_degrees: f64,
        offset: Vec2,
        paint: &Paint,
    ) {
        self.commands.push(DrawCommand::Bitmap {
            bitmap: bitmap.clone(),
            center,
            rotation_degrees,
            offset,
            paint: *paint,
        });
    }
}
