// 2D geometry error module: Contains the error raised by fallible shape construction

use thiserror::Error;

use crate::config::MIN_POLYGON_VERTICES;

/// Errors raised while building or measuring 2D geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A vertex ring is too short to enclose an area
    #[error("invalid polygon: expected at least 3 vertices, got {vertices}")]
    InvalidGeometry { vertices: usize },
}

impl GeometryError {
    /// Check a vertex count against the polygon minimum
    pub(crate) fn check_vertex_count(vertices: usize) -> Result<(), GeometryError> {
        if vertices < MIN_POLYGON_VERTICES {
            return Err(GeometryError::InvalidGeometry { vertices });
        }
        Ok(())
    }
}
