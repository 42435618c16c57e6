//! Geometry aliases shared across the workspace.

use nalgebra::{Matrix3, Point2};

/// Integer pixel coordinate `(x, y)`.
pub type Point2i = Point2<i32>;

/// Double-precision 3x3 matrix.
pub type Matrix3d = Matrix3<f64>;

/// Render a point as a Python-style tuple, e.g. `(100, 200)`.
pub fn format_point(p: &Point2i) -> String {
    format!("({}, {})", p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(&Point2i::new(100, 200)), "(100, 200)");
        assert_eq!(format_point(&Point2i::new(-1, 0)), "(-1, 0)");
    }
}
