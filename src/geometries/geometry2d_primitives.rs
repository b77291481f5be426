// 2D primitives module: Contains the point and axis-aligned rectangle value types
// This module provides corner extraction, corner-based construction and union folding

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point in the plane
pub type Point = Vector2<f64>;

/// Shorthand for building a [`Point`] from its coordinates
pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// 2D axis-aligned rectangle
///
/// Described by its dimensions and center rather than by its corners. This is
/// the "frame rectangle" every shape reports: the tightest axis-aligned box
/// enclosing its current geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRect {
    /// Extent along the x axis
    pub width: f64,
    /// Extent along the y axis
    pub height: f64,
    /// Center point
    pub center: Point,
}

impl AxisRect {
    /// Create a rectangle from its dimensions and center
    ///
    /// Dimensions are not validated; negative values give an inverted rectangle.
    pub fn new(width: f64, height: f64, center: Point) -> Self {
        Self {
            width,
            height,
            center,
        }
    }

    /// Get the left-bottom corner
    pub fn left_bottom(&self) -> Point {
        left_bottom(self)
    }

    /// Get the right-top corner
    pub fn right_top(&self) -> Point {
        right_top(self)
    }

    /// Get the area of the rectangle
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Compute the smallest rectangle containing both this rectangle and another
    ///
    /// # Arguments
    /// * `other` - Other rectangle to union with
    pub fn union(&self, other: &AxisRect) -> AxisRect {
        let mut lb = self.left_bottom();
        let mut rt = self.right_top();
        expand_rect(&mut lb, &mut rt, other);
        make_rect(lb, rt)
    }
}

/// Get the left-bottom corner of a rectangle: `center - (width/2, height/2)`
pub fn left_bottom(rect: &AxisRect) -> Point {
    rect.center - Vector2::new(rect.width / 2.0, rect.height / 2.0)
}

/// Get the right-top corner of a rectangle: `center + (width/2, height/2)`
pub fn right_top(rect: &AxisRect) -> Point {
    rect.center + Vector2::new(rect.width / 2.0, rect.height / 2.0)
}

/// Build the rectangle spanned by two opposite corners
///
/// The corners are taken as given: width and height are `p2 - p1` per axis, so
/// passing them in the wrong order yields negative dimensions.
///
/// # Arguments
/// * `left_bottom` - Left-bottom corner
/// * `right_top` - Right-top corner
pub fn make_rect(left_bottom: Point, right_top: Point) -> AxisRect {
    AxisRect {
        width: right_top.x - left_bottom.x,
        height: right_top.y - left_bottom.y,
        center: (left_bottom + right_top) / 2.0,
    }
}

/// Grow a pair of accumulator corners so they also enclose `candidate`
///
/// After the call `acc_left_bottom` is the component-wise minimum and
/// `acc_right_top` the component-wise maximum of the accumulator and the
/// candidate corners. Folding this over a set of rectangles gives the same
/// union box regardless of order.
///
/// # Arguments
/// * `acc_left_bottom` - Accumulated left-bottom corner, updated in place
/// * `acc_right_top` - Accumulated right-top corner, updated in place
/// * `candidate` - Rectangle to fold into the accumulator
pub fn expand_rect(acc_left_bottom: &mut Point, acc_right_top: &mut Point, candidate: &AxisRect) {
    let lb = left_bottom(candidate);
    let rt = right_top(candidate);

    acc_left_bottom.x = acc_left_bottom.x.min(lb.x);
    acc_left_bottom.y = acc_left_bottom.y.min(lb.y);
    acc_right_top.x = acc_right_top.x.max(rt.x);
    acc_right_top.y = acc_right_top.y.max(rt.y);
}

impl Default for AxisRect {
    /// A zero-sized rectangle at the origin
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            center: Vector2::zeros(),
        }
    }
}
