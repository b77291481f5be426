use log::trace;
use nalgebra::Vector2;

use crate::geometries::geometry2d_error::GeometryError;
use crate::geometries::geometry2d_polygon_math::{centroid, classify_winding, shoelace};
use crate::geometries::geometry2d_primitives::{make_rect, AxisRect, Point};
use crate::interfaces::{ShapeKind, Winding};

/// Capability set shared by all 2D shapes
pub trait Geometry2D: std::fmt::Debug {
    /// Get the enclosed area (non-negative for non-negative dimensions)
    fn area(&self) -> f64;

    /// Get the tightest axis-aligned rectangle enclosing the current geometry
    fn frame_rect(&self) -> AxisRect;

    /// Get the reference center of the shape
    fn center(&self) -> Point;

    /// Move the shape so its reference center lands on `dest`
    fn translate_to(&mut self, dest: Point);

    /// Move the shape by a relative offset
    fn translate_by(&mut self, dx: f64, dy: f64);

    /// Scale the shape about its own center
    ///
    /// Factors below 1 shrink and above 1 grow the shape. Non-positive factors
    /// are not rejected.
    fn scale_from(&mut self, factor: f64);
}

/// Axis-aligned rectangle geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl Rectangle {
    pub fn new(width: f64, height: f64, center: Point) -> Self {
        Self {
            width,
            height,
            center,
        }
    }

    /// Create a rectangle covering an existing frame rectangle
    pub fn from_rect(rect: AxisRect) -> Self {
        Self::new(rect.width, rect.height, rect.center)
    }

    /// Create a rectangle from its left-bottom and right-top corners
    pub fn from_corners(left_bottom: Point, right_top: Point) -> Self {
        Self::from_rect(make_rect(left_bottom, right_top))
    }
}

impl Geometry2D for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn frame_rect(&self) -> AxisRect {
        AxisRect::new(self.width, self.height, self.center)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn translate_to(&mut self, dest: Point) {
        self.center = dest;
    }

    fn translate_by(&mut self, dx: f64, dy: f64) {
        self.center += Vector2::new(dx, dy);
    }

    fn scale_from(&mut self, factor: f64) {
        self.width *= factor;
        self.height *= factor;
    }
}

/// Axis-aligned square geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub size: f64,
    pub center: Point,
}

impl Square {
    /// Create a square from its left-bottom corner and side length
    pub fn new(left_bottom: Point, size: f64) -> Self {
        Self {
            size,
            center: left_bottom + Vector2::new(size / 2.0, size / 2.0),
        }
    }

    /// Narrow a rectangle to a square sharing its center
    ///
    /// The side length is the lesser of the rectangle's width and height.
    pub fn from_rect(rect: AxisRect) -> Self {
        Self {
            size: rect.width.min(rect.height),
            center: rect.center,
        }
    }
}

impl Geometry2D for Square {
    fn area(&self) -> f64 {
        self.size * self.size
    }

    fn frame_rect(&self) -> AxisRect {
        AxisRect::new(self.size, self.size, self.center)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn translate_to(&mut self, dest: Point) {
        self.center = dest;
    }

    fn translate_by(&mut self, dx: f64, dy: f64) {
        self.center += Vector2::new(dx, dy);
    }

    fn scale_from(&mut self, factor: f64) {
        self.size *= factor;
    }
}

/// Simple polygon geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    center: Point, // Cached centroid
}

impl Polygon {
    /// Create a polygon from its vertex ring
    ///
    /// The ring must not self-intersect and should enclose a non-zero area;
    /// neither is checked. The centroid is computed once here and afterwards
    /// only moved along with the vertices.
    ///
    /// # Errors
    /// `GeometryError::InvalidGeometry` if fewer than three vertices are given
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        let center = centroid(&vertices)?;
        trace!(
            "polygon with {} vertices, centroid ({}, {})",
            vertices.len(),
            center.x,
            center.y
        );
        Ok(Self { vertices, center })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Get the shoelace area; its sign follows the vertex winding
    pub fn signed_area(&self) -> f64 {
        shoelace(&self.vertices)
    }

    pub fn winding(&self) -> Winding {
        classify_winding(self.signed_area())
    }
}

impl Geometry2D for Polygon {
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn frame_rect(&self) -> AxisRect {
        let first = self.vertices[0];
        let (min, max) = self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| {
                (
                    Vector2::new(min.x.min(v.x), min.y.min(v.y)),
                    Vector2::new(max.x.max(v.x), max.y.max(v.y)),
                )
            });

        make_rect(min, max)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn translate_to(&mut self, dest: Point) {
        let delta = dest - self.center;
        self.translate_by(delta.x, delta.y);
    }

    fn translate_by(&mut self, dx: f64, dy: f64) {
        let offset = Vector2::new(dx, dy);
        self.center += offset;
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    fn scale_from(&mut self, factor: f64) {
        let center = self.center;
        for vertex in &mut self.vertices {
            *vertex = center + (*vertex - center) * factor;
        }
    }
}

/// Closed set of shape variants
///
/// Dispatches the [`Geometry2D`] capabilities to the concrete shape it holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    fn as_geometry(&self) -> &dyn Geometry2D {
        match self {
            Shape::Rectangle(rect) => rect,
            Shape::Square(square) => square,
            Shape::Polygon(polygon) => polygon,
        }
    }

    fn as_geometry_mut(&mut self) -> &mut dyn Geometry2D {
        match self {
            Shape::Rectangle(rect) => rect,
            Shape::Square(square) => square,
            Shape::Polygon(polygon) => polygon,
        }
    }
}

impl Geometry2D for Shape {
    fn area(&self) -> f64 {
        self.as_geometry().area()
    }

    fn frame_rect(&self) -> AxisRect {
        self.as_geometry().frame_rect()
    }

    fn center(&self) -> Point {
        self.as_geometry().center()
    }

    fn translate_to(&mut self, dest: Point) {
        self.as_geometry_mut().translate_to(dest)
    }

    fn translate_by(&mut self, dx: f64, dy: f64) {
        self.as_geometry_mut().translate_by(dx, dy)
    }

    fn scale_from(&mut self, factor: f64) {
        self.as_geometry_mut().scale_from(factor)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Shape::Square(square)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
