//! Math utilities and types
//!
//! 2D types for UI coordinate spaces. Everything is in pixels with a top-left
//! origin and y growing downwards.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Width and height of an element or root
///
/// Negative values are representable and never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimension {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Dimension {
    /// Zero-sized dimension
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    /// Create a new dimension
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if a point in local coordinates lies within `[0,0]x[width,height]`
    pub fn contains(&self, point: Point2) -> bool {
        crate::input::collision::point_in_bounds(point, *self)
    }
}

/// Axis-aligned rectangle in some parent coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner
    pub fn origin(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Size of the rectangle
    pub fn size(&self) -> Dimension {
        Dimension::new(self.width, self.height)
    }

    /// Right edge
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Smallest rectangle containing both rectangles
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(x, y, self.max_x().max(other.max_x()) - x, self.max_y().max(other.max_y()) - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_contains_edges() {
        let size = Dimension::new(200.0, 100.0);

        assert!(size.contains(Point2::new(0.0, 0.0)));
        assert!(size.contains(Point2::new(200.0, 100.0)));
        assert!(size.contains(Point2::new(50.0, 50.0)));
        assert!(!size.contains(Point2::new(-0.5, 50.0)));
        assert!(!size.contains(Point2::new(50.0, 100.5)));
    }

    #[test]
    fn test_negative_dimension_contains_nothing() {
        let size = Dimension::new(-10.0, 20.0);
        assert!(!size.contains(Point2::new(0.0, 5.0)));
        assert!(!size.contains(Point2::new(-5.0, 5.0)));
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, -5.0, 20.0, 5.0);
        let union = a.union(&b);

        assert_eq!(union, Rect::new(0.0, -5.0, 25.0, 15.0));
    }
}
