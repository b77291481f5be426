// Shape collection module: Contains the owning shape container and batch operations
// This module provides pivot-relative isotropic scaling and aggregate measurements

use log::debug;

use crate::geometries::geometry2d::{Geometry2D, Shape};
use crate::geometries::geometry2d_primitives::{expand_rect, make_rect, AxisRect, Point};

/// Scale every shape about a shared pivot point
///
/// Each shape ends up where uniformly scaling the whole configuration about
/// `pivot` would put it: its reference center moves to
/// `pivot + factor * (center - pivot)` and its extent grows by `factor`.
/// Only the [`Geometry2D`] capabilities are used. The shape is parked on the
/// pivot, scaled about its own center there, then pushed back out along the
/// offset between its original and parked frame corners, scaled by `factor`.
///
/// Shapes are processed independently, so their order does not matter.
///
/// # Arguments
/// * `shapes` - Shapes to scale in place
/// * `pivot` - Fixed point of the scaling
/// * `factor` - Uniform scale factor
pub fn scale_isotropic<G: Geometry2D>(shapes: &mut [G], pivot: Point, factor: f64) {
    for (index, shape) in shapes.iter_mut().enumerate() {
        let before = shape.frame_rect().left_bottom();
        shape.translate_to(pivot);
        let moved_before = shape.frame_rect().left_bottom();
        shape.scale_from(factor);

        let delta = (before - moved_before) * factor;
        shape.translate_by(delta.x, delta.y);

        debug!(
            "scaled shape {} by {} about ({}, {}), center now ({}, {})",
            index,
            factor,
            pivot.x,
            pivot.y,
            shape.center().x,
            shape.center().y
        );
    }
}

/// Smallest rectangle enclosing the frame rectangles of all given shapes
///
/// # Returns
/// * `Some(AxisRect)` if there is at least one shape
/// * `None` if the iterator is empty
pub fn total_frame_rect<'a, I, G>(shapes: I) -> Option<AxisRect>
where
    I: IntoIterator<Item = &'a G>,
    G: Geometry2D + 'a,
{
    let mut shapes_iter = shapes.into_iter();
    let first = shapes_iter.next()?.frame_rect();

    let mut left_bottom = first.left_bottom();
    let mut right_top = first.right_top();
    for shape in shapes_iter {
        expand_rect(&mut left_bottom, &mut right_top, &shape.frame_rect());
    }

    Some(make_rect(left_bottom, right_top))
}

/// Owning, ordered collection of shapes
///
/// Shapes are released together when the collection is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<Shape>>(&mut self, shape: S) {
        self.shapes.push(shape.into());
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Shape> {
        self.shapes.iter_mut()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    /// Sum of the areas of all shapes
    pub fn total_area(&self) -> f64 {
        self.shapes.iter().fold(0.0, |total, s| total + s.area())
    }

    /// Smallest rectangle enclosing every shape, `None` when empty
    pub fn total_frame_rect(&self) -> Option<AxisRect> {
        total_frame_rect(&self.shapes)
    }

    /// Scale all shapes about a shared pivot, see [`scale_isotropic`]
    pub fn scale_isotropic(&mut self, pivot: Point, factor: f64) {
        scale_isotropic(&mut self.shapes, pivot, factor);
    }
}

impl FromIterator<Shape> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Shape>> for ShapeCollection {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl IntoIterator for ShapeCollection {
    type Item = Shape;
    type IntoIter = std::vec::IntoIter<Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
