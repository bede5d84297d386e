//! Arc-length measurement along a Bezier path.

use glam::Vec2;
use kurbo::{BezPath, ParamCurve, ParamCurveArclen, ParamCurveDeriv, PathSeg};

/// Accuracy for arc-length computation and inversion.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// A point sampled at a contour position, with the tangent angle of
/// the path at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    pub point: Vec2,
    /// Tangent angle in degrees, measured like the arc angles (from
    /// the positive x-axis in y-down space).
    pub angle_degrees: f32,
}

/// Precomputed arc-length table over a path.
///
/// Close elements are measured as their closing line. An empty path,
/// or one whose segments all have zero length, yields no samples.
pub struct PathMeasure {
    segments: Vec<MeasuredSegment>,
    total_length: f64,
}

struct MeasuredSegment {
    seg: PathSeg,
    length: f64,
}

impl PathMeasure {
    pub fn new(path: &BezPath) -> Self {
        let mut segments = Vec::new();
        let mut total_length = 0.0;

        for seg in path.segments() {
            let length = seg.arclen(ARCLEN_ACCURACY);
            total_length += length;
            segments.push(MeasuredSegment { seg, length });
        }

        Self {
            segments,
            total_length,
        }
    }

    /// Total contour length.
    pub fn length(&self) -> f64 {
        self.total_length
    }

    /// Point and unit tangent at an arc-length offset, clamped to the
    /// contour. `None` when the path is empty or degenerate.
    pub fn pos_tan(&self, distance: f64) -> Option<(Vec2, Vec2)> {
        if self.segments.is_empty() || self.total_length <= 0.0 {
            return None;
        }

        let distance = distance.clamp(0.0, self.total_length);
        let mut walked = 0.0;

        for measured in &self.segments {
            if distance <= walked + measured.length && measured.length > 0.0 {
                let t = measured.seg.inv_arclen(distance - walked, ARCLEN_ACCURACY);
                return Some(eval_pos_tan(&measured.seg, t));
            }
            walked += measured.length;
        }

        // Past the last nonzero segment (distance == total length).
        let last = self.segments.iter().rev().find(|m| m.length > 0.0)?;
        Some(eval_pos_tan(&last.seg, 1.0))
    }

    /// Sample at a percentage of the total length, clamped to
    /// [0, 100].
    pub fn sample(&self, percentage: f32) -> Option<PathSample> {
        let pct = f64::from(percentage.clamp(0.0, 100.0));
        let (point, tangent) = self.pos_tan(self.total_length * pct / 100.0)?;
        Some(PathSample {
            point,
            angle_degrees: tangent.y.atan2(tangent.x).to_degrees(),
        })
    }
}

fn eval_pos_tan(seg: &PathSeg, t: f64) -> (Vec2, Vec2) {
    let pos = seg.eval(t);

    let deriv = match seg {
        PathSeg::Line(line) => line.deriv().eval(t),
        PathSeg::Quad(quad) => quad.deriv().eval(t),
        PathSeg::Cubic(cubic) => cubic.deriv().eval(t),
    }
    .to_vec2();

    // Fall back to the chord at cusps where the derivative vanishes.
    let dir = if deriv.hypot2() > 1e-12 {
        deriv
    } else {
        seg.eval(1.0) - seg.eval(0.0)
    };
    let len = dir.hypot();
    let tangent = if len > 0.0 {
        Vec2::new((dir.x / len) as f32, (dir.y / len) as f32)
    } else {
        Vec2::X
    };

    (Vec2::new(pos.x as f32, pos.y as f32), tangent)
}
