//! Collision detection for input processing
//!
//! Hit testing primitives shared by roots and elements.

use crate::foundation::math::{Dimension, Point2};

/// Check if a point is inside a rectangular region
///
/// # Arguments
/// * `point_x` - X coordinate of the point
/// * `point_y` - Y coordinate of the point
/// * `rect_x` - X coordinate of rectangle's top-left corner
/// * `rect_y` - Y coordinate of rectangle's top-left corner
/// * `rect_width` - Width of the rectangle
/// * `rect_height` - Height of the rectangle
///
/// # Returns
/// `true` if the point is inside the rectangle (edges inclusive)
pub fn point_in_rect(
    point_x: f32,
    point_y: f32,
    rect_x: f32,
    rect_y: f32,
    rect_width: f32,
    rect_height: f32,
) -> bool {
    point_x >= rect_x
        && point_x <= rect_x + rect_width
        && point_y >= rect_y
        && point_y <= rect_y + rect_height
}

/// Check if a local point falls within `[0,0]x[width,height]`
pub fn point_in_bounds(point: Point2, size: Dimension) -> bool {
    point_in_rect(point.x, point.y, 0.0, 0.0, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_rect() {
        // Point inside
        assert!(point_in_rect(150.0, 150.0, 100.0, 100.0, 200.0, 100.0));

        // Point on edge
        assert!(point_in_rect(100.0, 100.0, 100.0, 100.0, 200.0, 100.0));
        assert!(point_in_rect(300.0, 200.0, 100.0, 100.0, 200.0, 100.0));

        // Point outside
        assert!(!point_in_rect(50.0, 50.0, 100.0, 100.0, 200.0, 100.0));
        assert!(!point_in_rect(350.0, 250.0, 100.0, 100.0, 200.0, 100.0));
    }

    #[test]
    fn test_point_in_bounds() {
        let size = Dimension::new(40.0, 20.0);

        assert!(point_in_bounds(Point2::new(10.0, 10.0), size));
        assert!(point_in_bounds(Point2::new(40.0, 20.0), size));
        assert!(!point_in_bounds(Point2::new(-1.0, 10.0), size));
        assert!(!point_in_bounds(Point2::new(10.0, 21.0), size));
    }
}
