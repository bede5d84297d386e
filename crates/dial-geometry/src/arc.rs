//! Angle-to-point conversion on an elliptical arc.

use kurbo::{Point, Rect};

/// Find the point at `degrees` on the ellipse inscribed in `region`,
/// with `radius_adjust` added to both half-axes before evaluation.
///
/// Angles are measured from the positive x-axis, increasing per
/// standard trig orientation in the host's y-down coordinate space.
/// Coordinates are rounded to whole units since the host draws on a
/// pixel grid.
///
/// A negative effective radius is allowed and simply mirrors the
/// point through the center; avoiding nonsensical visuals is the
/// caller's concern.
pub fn point_on_arc(degrees: f64, region: Rect, radius_adjust: f64) -> Point {
    let x_radius = region.width() / 2.0 + radius_adjust;
    let y_radius = region.height() / 2.0 + radius_adjust;

    let rad = degrees.to_radians();
    let center = region.center();

    Point::new(
        (x_radius * rad.cos() + center.x).round(),
        (y_radius * rad.sin() + center.y).round(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_lies_on_inscribed_ellipse() {
        let region = Rect::new(10.0, 20.0, 210.0, 120.0);
        let center = region.center();
        let rx = region.width() / 2.0;
        let ry = region.height() / 2.0;

        for i in 0..36 {
            let degrees = i as f64 * 10.0;
            let p = point_on_arc(degrees, region, 0.0);

            // Rounding moves each coordinate by at most half a unit,
            // so re-check against the unrounded position.
            let exact_x = rx * degrees.to_radians().cos() + center.x;
            let exact_y = ry * degrees.to_radians().sin() + center.y;
            assert!((p.x - exact_x).abs() <= 0.5, "x off at {degrees}°");
            assert!((p.y - exact_y).abs() <= 0.5, "y off at {degrees}°");

            // Normalized ellipse equation within rounding tolerance.
            let nx = (p.x - center.x) / rx;
            let ny = (p.y - center.y) / ry;
            let eq = nx * nx + ny * ny;
            assert!((eq - 1.0).abs() < 0.05, "ellipse eq {eq} at {degrees}°");
        }
    }

    #[test]
    fn radius_adjust_orders_points_radially() {
        // Circular region: adjusted points stay collinear with the
        // center and move strictly outward as the adjustment grows.
        let region = Rect::new(0.0, 0.0, 200.0, 200.0);
        let center = region.center();

        for i in 0..12 {
            let degrees = i as f64 * 30.0 + 7.0;
            let mut last_dist = f64::NEG_INFINITY;

            for adjust in [-30.0, -10.0, 0.0, 15.0, 40.0] {
                let p = point_on_arc(degrees, region, adjust);
                let v = p - center;
                let dist = v.hypot();
                assert!(dist > last_dist, "not monotonic at {degrees}°");
                last_dist = dist;

                // Collinear with the center: cross product with the
                // angle direction vanishes (up to rounding).
                let dir = kurbo::Vec2::new(
                    degrees.to_radians().cos(),
                    degrees.to_radians().sin(),
                );
                assert!(v.cross(dir).abs() <= 1.0, "skewed at {degrees}°");
            }
        }
    }

    #[test]
    fn negative_effective_radius_mirrors_through_center() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = point_on_arc(0.0, region, -80.0);
        // Half-axis 50 - 80 = -30: the point lands on the opposite side.
        assert_eq!(p, Point::new(20.0, 50.0));
    }

    #[test]
    fn zero_degrees_is_positive_x_axis() {
        let region = Rect::new(0.0, 0.0, 100.0, 60.0);
        assert_eq!(point_on_arc(0.0, region, 0.0), Point::new(100.0, 30.0));
        assert_eq!(point_on_arc(90.0, region, 0.0), Point::new(50.0, 60.0));
        assert_eq!(point_on_arc(180.0, region, 0.0), Point::new(0.0, 30.0));
    }
}
