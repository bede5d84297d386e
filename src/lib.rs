//! Path-decoration widgets: notch tick marks along an elliptical
//! arc, and a pointer glyph (circles or bitmap, with a pressed-state
//! halo) at a percentage position along an arbitrary path.
//!
//! Drawing goes through the [`surface::RenderSurface`] trait; the
//! geometry lives in the `dial-geometry` crate.

pub mod notches;
pub mod paint;
pub mod pointer;
pub mod state;
pub mod surface;

pub use dial_geometry::{point_on_arc, PathMeasure, PathSample};
pub use notches::Notches;
pub use paint::{Color, Paint, PaintStyle};
pub use pointer::{Pointer, PointerInfo, PointerStatus, DEFAULT_HALO_ALPHA, DEFAULT_HALO_WIDTH};
pub use state::{NotchesState, PointerState, StateError, STATE_VERSION};
pub use surface::{Bitmap, DisplayList, DrawCommand, RenderSurface};
