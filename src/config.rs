// Constants

// Polygons
pub const MIN_POLYGON_VERTICES: usize = 3; // Fewer vertices cannot enclose an area

// Tolerances
pub const GEOMETRY_TOLERANCE: f64 = 1e-10; // For orientation and degeneracy checks
