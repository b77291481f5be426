//! Planar shape library
//!
//! This library models axis-aligned rectangles, squares and simple polygons behind a
//! common capability trait, with area, frame rectangle, translation and scaling about
//! either a shape's own center or a shared pivot.

pub mod config;
pub mod geometries;
pub mod interfaces;
pub mod report;

pub use geometries::GeometryError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
