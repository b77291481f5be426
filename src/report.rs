//! Textual report over a shape collection.
//!
//! Lists every shape's area and frame rectangle followed by the totals. Only the
//! read-only queries of [`Geometry2D`] are used.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometries::{AxisRect, Geometry2D, ShapeCollection};
use crate::interfaces::ShapeKind;

/// Measurements of a single shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub index: usize,
    pub kind: ShapeKind,
    pub area: f64,
    pub frame_rect: AxisRect,
}

/// Per-shape measurements plus collection totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeReport {
    pub entries: Vec<ShapeEntry>,
    pub total_area: f64,
    /// `None` for an empty collection
    pub total_frame_rect: Option<AxisRect>,
}

impl ShapeReport {
    pub fn new(shapes: &ShapeCollection) -> Self {
        let entries = shapes
            .iter()
            .enumerate()
            .map(|(index, shape)| ShapeEntry {
                index,
                kind: shape.kind(),
                area: shape.area(),
                frame_rect: shape.frame_rect(),
            })
            .collect();

        Self {
            entries,
            total_area: shapes.total_area(),
            total_frame_rect: shapes.total_frame_rect(),
        }
    }
}

fn write_rect(f: &mut fmt::Formatter<'_>, rect: &AxisRect) -> fmt::Result {
    writeln!(f, "  width: {}; height: {}", rect.width, rect.height)?;
    writeln!(f, "  center: {} {}", rect.center.x, rect.center.y)
}

impl fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "area {} ({}): {}", entry.index, entry.kind.name(), entry.area)?;
        }
        writeln!(f, "total area: {}", self.total_area)?;

        for entry in &self.entries {
            writeln!(f, "frame rectangle {}:", entry.index)?;
            write_rect(f, &entry.frame_rect)?;
        }

        if let Some(total) = &self.total_frame_rect {
            writeln!(f, "total frame rectangle:")?;
            write_rect(f, total)?;
        }
        Ok(())
    }
}
