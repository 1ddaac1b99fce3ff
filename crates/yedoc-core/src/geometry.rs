//! Geometric primitives for document coordinates.
//!
//! This module provides the fundamental geometric types used throughout yedoc
//! for node positions, node sizes, anchor offsets and edge waypoints.
//!
//! # Coordinate System
//!
//! yedoc uses the drawing-pane coordinate system of yEd:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Node positions name the upper-left corner of the node's bounding box;
//! edge anchors are offsets from a node's center.

use serde::{Deserialize, Serialize};

/// A 2D point in drawing-pane coordinate space.
///
/// Points use `f64` coordinates and provide operations for basic vector
/// math. Depending on context a `Point` is an absolute position, a
/// relative offset, or an edge waypoint.
///
/// # Examples
///
/// ```
/// # use yedoc_core::geometry::Point;
/// let position = Point::new(10.0, 20.0);
/// let offset = Point::new(5.0, 5.0);
///
/// let moved = position.add_point(offset);
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use yedoc_core::geometry::Point;
    /// let position = Point::new(100.0, 50.0);
    /// let offset = Point::new(10.0, -5.0);
    ///
    /// let moved = position.add_point(offset);
    /// assert_eq!(moved.x(), 110.0);
    /// assert_eq!(moved.y(), 45.0);
    /// ```
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Width and height dimensions of a node's bounding box.
///
/// Both dimensions are non-negative; the entity property layer rejects
/// negative values before a `Size` ever reaches serialization.
///
/// # Examples
///
/// ```
/// # use yedoc_core::geometry::Size;
/// let size = Size::new(30.0, 30.0);
/// assert_eq!(size.width(), 30.0);
/// assert_eq!(size.height(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns the offset from a bounding box's upper-left corner to its
    /// center.
    pub fn center_offset(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Size {
    /// The default node size used by yEd for freshly created nodes.
    fn default() -> Self {
        Self::new(30.0, 30.0)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_add_sub_roundtrip() {
        let a = Point::new(12.5, -3.0);
        let b = Point::new(-2.5, 8.0);

        let sum = a.add_point(b);
        assert_approx_eq!(f64, sum.x(), 10.0);
        assert_approx_eq!(f64, sum.y(), 5.0);

        let back = sum.sub_point(b);
        assert_approx_eq!(f64, back.x(), a.x());
        assert_approx_eq!(f64, back.y(), a.y());
    }

    #[test]
    fn test_point_is_zero() {
        assert!(Point::default().is_zero());
        assert!(!Point::new(0.0, 0.1).is_zero());
    }

    #[test]
    fn test_size_center_offset() {
        let size = Size::new(40.0, 20.0);
        let center = size.center_offset();
        assert_approx_eq!(f64, center.x(), 20.0);
        assert_approx_eq!(f64, center.y(), 10.0);
    }

    #[test]
    fn test_default_size_matches_yed() {
        let size = Size::default();
        assert_approx_eq!(f64, size.width(), 30.0);
        assert_approx_eq!(f64, size.height(), 30.0);
    }

    proptest! {
        /// Adding an offset and subtracting it again restores the original
        /// point.
        #[test]
        fn prop_add_sub_roundtrip(
            x in -1e6f64..1e6, y in -1e6f64..1e6,
            dx in -1e6f64..1e6, dy in -1e6f64..1e6,
        ) {
            let back = Point::new(x, y)
                .add_point(Point::new(dx, dy))
                .sub_point(Point::new(dx, dy));
            prop_assert!((back.x() - x).abs() < 1e-6);
            prop_assert!((back.y() - y).abs() < 1e-6);
        }

        /// The center offset is always half the size, component-wise.
        #[test]
        fn prop_center_offset_halves(w in 0f64..1e6, h in 0f64..1e6) {
            let center = Size::new(w, h).center_offset();
            prop_assert!((center.x() * 2.0 - w).abs() < 1e-9);
            prop_assert!((center.y() * 2.0 - h).abs() < 1e-9);
        }
    }
}
