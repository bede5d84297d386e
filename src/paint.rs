//! Immutable paint descriptors passed into draw calls.
//!
//! The host's shared mutable brush objects map to plain value types
//! here; a draw pass can derive a variant with `with_*` without
//! aliasing anyone else's style.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Whether a primitive is filled or stroked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Style descriptor for a single draw call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
}

impl Paint {
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
        }
    }

    pub const fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
        }
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
            ..self
        }
    }

    pub const fn with_style(self, style: PaintStyle) -> Self {
        Self { style, ..self }
    }

    pub const fn with_stroke_width(self, width: f32) -> Self {
        Self {
            stroke_width: width,
            ..self
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::fill(Color::BLACK)
    }
}
