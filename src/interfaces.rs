// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Orientation of a vertex ring, derived from the sign of its signed area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    Degenerate,
}

// Enumeration of the supported shape variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Polygon,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Polygon => "polygon",
        }
    }
}
