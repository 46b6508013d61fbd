//! Region geometry.
//!
//! Claims are described in integer block space with inclusive bounds: a cuboid
//! from `(0, 0, 0)` to `(10, 10, 10)` covers eleven blocks along each axis.
//! Query points arrive as `f64` world coordinates and are floored to the block
//! they fall in before testing.
//!
//! Two shapes are supported:
//!
//! - [`Cuboid`] - an axis-aligned box
//! - [`Polygonal`] - a 2D polygon on the x/z plane extruded between two heights
//!
//! Both are wrapped by [`Geometry`], which provides the two predicates the
//! region index needs (`contains` and `overlaps`) and the coarse [`Aabb`] used
//! to select spatial cells.

mod aabb;
mod error;
mod geometry;
mod pos;
mod shape;

pub use aabb::Aabb;
pub use error::GeometryError;
pub use geometry::Geometry;
pub use pos::{BlockPos, Column, Point};
pub use shape::{Cuboid, Polygonal};
