// Geometries module: Contains the 2D shape definitions and the algorithms backing them
// This module provides rectangles, squares and polygons behind a common capability trait

// ======================== MODULE DECLARATIONS ========================
pub mod geometry2d;
pub mod geometry2d_error;
pub mod geometry2d_polygon_math;
pub mod geometry2d_primitives;
pub mod shape_collection;

// Test modules
mod _tests_geometry2d;

// ======================== PRIMITIVES ========================
pub use geometry2d_primitives::{
    AxisRect, // struct - axis-aligned rectangle (width, height, center)
    Point,    // type   - nalgebra::Vector2<f64>
};
pub use geometry2d_primitives::{expand_rect, left_bottom, make_rect, point, right_top};
// Free functions:
//   point(x: f64, y: f64) -> Point                             - builds a point
//   left_bottom(rect: &AxisRect) -> Point                      - center - half extent
//   right_top(rect: &AxisRect) -> Point                        - center + half extent
//   make_rect(left_bottom: Point, right_top: Point) -> AxisRect - rectangle spanned by two corners
//   expand_rect(&mut Point, &mut Point, &AxisRect)             - folds a rectangle into union corners

// AxisRect impl methods:
//   new(width: f64, height: f64, center: Point) -> Self
//   left_bottom(&self) -> Point / right_top(&self) -> Point
//   area(&self) -> f64
//   union(&self, other: &AxisRect) -> AxisRect                 - smallest rectangle containing both

// ======================== POLYGON MATH ========================
pub use geometry2d_polygon_math::{centroid, signed_area, winding};
//   signed_area(vertices: &[Point]) -> Result<f64, GeometryError>  - shoelace area, sign = winding
//   centroid(vertices: &[Point]) -> Result<Point, GeometryError>   - area centroid (needs non-zero area)
//   winding(vertices: &[Point]) -> Result<Winding, GeometryError>  - ring orientation

// ======================== ERRORS ========================
pub use geometry2d_error::GeometryError; // enum - InvalidGeometry { vertices }

// ======================== SHAPES ========================
pub use geometry2d::{
    Geometry2D, // trait - area, frame_rect, center, translate_to, translate_by, scale_from
    Polygon,    // struct - simple polygon with cached centroid
    Rectangle,  // struct - axis-aligned rectangle
    Shape,      // enum   - closed set of the variants above
    Square,     // struct - axis-aligned square
};

// Rectangle impl methods:
//   new(width: f64, height: f64, center: Point) -> Self
//   from_rect(rect: AxisRect) -> Self
//   from_corners(left_bottom: Point, right_top: Point) -> Self

// Square impl methods:
//   new(left_bottom: Point, size: f64) -> Self
//   from_rect(rect: AxisRect) -> Self                          - side = min(width, height)

// Polygon impl methods:
//   new(vertices: Vec<Point>) -> Result<Self, GeometryError>   - at least 3 vertices
//   vertices(&self) -> &[Point]
//   signed_area(&self) -> f64 / winding(&self) -> Winding

// ======================== COLLECTIONS ========================
pub use shape_collection::{scale_isotropic, total_frame_rect, ShapeCollection};
//   scale_isotropic(shapes: &mut [G], pivot: Point, factor: f64)    - scale about a shared pivot
//   total_frame_rect(shapes) -> Option<AxisRect>                    - union of frame rectangles
// ShapeCollection impl methods:
//   push, len, is_empty, get, iter, iter_mut, as_slice
//   total_area(&self) -> f64
//   total_frame_rect(&self) -> Option<AxisRect>
//   scale_isotropic(&mut self, pivot: Point, factor: f64)
