// 2D polygon math module: Contains shoelace-based area, centroid and orientation
// This module works on plain vertex slices so the shapes can share it

use crate::config::GEOMETRY_TOLERANCE;
use crate::geometries::geometry2d_error::GeometryError;
use crate::geometries::geometry2d_primitives::Point;
use crate::interfaces::Winding;

/// Cross term of the edge `a -> b`: `a.x * b.y - b.x * a.y`
fn edge_cross(a: &Point, b: &Point) -> f64 {
    a.x * b.y - b.x * a.y
}

/// Iterate over the edges of a closed vertex ring, wrapping the last vertex to the first
fn ring_edges(vertices: &[Point]) -> impl Iterator<Item = (&Point, &Point)> {
    vertices.iter().zip(vertices.iter().cycle().skip(1))
}

/// Signed area of a polygon (shoelace formula)
///
/// Positive for counter-clockwise rings in a y-up frame, negative for clockwise
/// ones. The magnitude is the enclosed area.
///
/// # Arguments
/// * `vertices` - Vertex ring; the closing edge back to the first vertex is implicit
///
/// # Errors
/// `GeometryError::InvalidGeometry` if fewer than three vertices are given
pub fn signed_area(vertices: &[Point]) -> Result<f64, GeometryError> {
    GeometryError::check_vertex_count(vertices.len())?;
    Ok(shoelace(vertices))
}

/// Shoelace sum without the vertex-count check; callers guarantee a valid ring
pub(crate) fn shoelace(vertices: &[Point]) -> f64 {
    ring_edges(vertices)
        .map(|(a, b)| edge_cross(a, b))
        .sum::<f64>()
        / 2.0
}

/// Centroid of a polygon's enclosed area
///
/// Each edge contributes the triangle it forms with the origin, weighted by
/// that triangle's signed area; the sum is divided by three times the total
/// signed area.
///
/// The polygon must have a non-zero signed area. For collinear or otherwise
/// degenerate rings the division yields non-finite coordinates.
///
/// # Errors
/// `GeometryError::InvalidGeometry` if fewer than three vertices are given
pub fn centroid(vertices: &[Point]) -> Result<Point, GeometryError> {
    GeometryError::check_vertex_count(vertices.len())?;

    let weighted: Point = ring_edges(vertices)
        .map(|(a, b)| (a + b) * (edge_cross(a, b) / 2.0))
        .sum();

    Ok(weighted / (3.0 * shoelace(vertices)))
}

/// Orientation of a vertex ring
///
/// Rings whose signed area is within `GEOMETRY_TOLERANCE` of zero are
/// reported as `Winding::Degenerate`.
///
/// # Errors
/// `GeometryError::InvalidGeometry` if fewer than three vertices are given
pub fn winding(vertices: &[Point]) -> Result<Winding, GeometryError> {
    Ok(classify_winding(signed_area(vertices)?))
}

pub(crate) fn classify_winding(area: f64) -> Winding {
    if area > GEOMETRY_TOLERANCE {
        Winding::CounterClockwise
    } else if area < -GEOMETRY_TOLERANCE {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}
