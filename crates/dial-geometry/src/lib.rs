//! Geometric kernel for the dialkit widgets.
//!
//! Two self-contained utilities:
//! - [`point_on_arc`]: place a point on (or offset from) the ellipse
//!   inscribed in a bounding rectangle, given an angle in degrees.
//! - [`PathMeasure`]: arc-length measurement over a `kurbo::BezPath`,
//!   returning point + tangent at a distance or percentage along the
//!   contour.

pub mod arc;
pub mod measure;

pub use arc::point_on_arc;
pub use measure::{PathMeasure, PathSample};
