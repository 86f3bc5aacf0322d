//! Curve evaluation used to move the hint marker along an edge.

use crate::point::Point;

/// The point at parameter `t` on the quadratic Bézier curve from `start` to `end` pulled towards `control`.
///
/// Evaluates `(1 - t)² · start + 2(1 - t)t · control + t² · end` componentwise.
/// A straight segment is the degenerate case where `control` equals `start` (or `end`).
pub fn quadratic_point(start: Point, control: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    start * (u * u) + control * (2.0 * u * t) + end * (t * t)
}

/// Quadratic ease-in-out over `t` in `[0, 1]`, accelerating through the first half and decelerating through the second.
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance_to(b) < 1e-9
    }

    #[test]
    fn midpoint_of_arch() {
        let point = quadratic_point(Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0), 0.5);
        assert!(close(point, Point::new(1.0, 1.0)), "{point}");
    }

    #[test]
    fn endpoints_are_exact() {
        let (start, control, end) = (Point::new(0.2, 0.8), Point::new(0.5, 0.4), Point::new(0.8, 0.8));
        assert_eq!(quadratic_point(start, control, end, 0.0), start);
        assert_eq!(quadratic_point(start, control, end, 1.0), end);
    }

    #[test]
    fn control_at_start_stays_on_the_chord() {
        let (start, end) = (Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let point = quadratic_point(start, start, end, 0.5);
        // start carries weight (1 - t)² + 2(1 - t)t = 0.75
        assert!(close(point, Point::new(0.25, 0.25)), "{point}");
    }

    #[test]
    fn easing_is_symmetric() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.25) + ease_in_out_quad(0.75) - 1.0).abs() < 1e-12);
    }
}
