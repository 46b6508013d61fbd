//! The geometry carried by every region.

use crate::shape::{edges, segments_intersect};
use crate::{Aabb, BlockPos, Column, Cuboid, Point, Polygonal};

/// The volume a region claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Geometry {
    Cuboid(Cuboid),
    Polygonal(Polygonal),
}

impl Geometry {
    /// Coarse bounds, always a superset of the shape.
    #[must_use]
    pub const fn bounds(&self) -> Aabb {
        match self {
            Self::Cuboid(c) => c.bounds(),
            Self::Polygonal(p) => p.bounds(),
        }
    }

    /// Whether the block containing `point` lies inside this volume.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.contains_block(BlockPos::from_point(point))
    }

    #[must_use]
    pub fn contains_block(&self, pos: BlockPos) -> bool {
        match self {
            Self::Cuboid(c) => c.bounds().contains(pos),
            Self::Polygonal(p) => {
                pos.y >= p.min_y() && pos.y <= p.max_y() && p.contains_column(pos.column())
            }
        }
    }

    /// Whether the two volumes share at least one point.
    ///
    /// Symmetric, and true for identical geometry.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if !self.bounds().intersects(&other.bounds()) {
            return false;
        }

        match (self, other) {
            // Bounds of a cuboid are the cuboid itself.
            (Self::Cuboid(_), Self::Cuboid(_)) => true,
            _ => {
                self.outline().iter().any(|&v| other.contains_column(v))
                    || other.outline().iter().any(|&v| self.contains_column(v))
                    || edges(&self.outline())
                        .any(|a| edges(&other.outline()).any(|b| segments_intersect(a, b)))
            }
        }
    }

    /// Claimed blocks; polygons report area times height.
    #[must_use]
    pub fn volume(&self) -> f64 {
        match self {
            Self::Cuboid(c) => c.bounds().volume() as f64,
            Self::Polygonal(p) => {
                let height = i64::from(p.max_y()) - i64::from(p.min_y()) + 1;
                p.area() * height as f64
            }
        }
    }

    fn contains_column(&self, column: Column) -> bool {
        match self {
            Self::Cuboid(c) => c.bounds().contains_column(column),
            Self::Polygonal(p) => p.contains_column(column),
        }
    }

    fn outline(&self) -> Vec<Column> {
        match self {
            Self::Cuboid(c) => c.bounds().corners().to_vec(),
            Self::Polygonal(p) => p.points().to_vec(),
        }
    }
}

impl From<Cuboid> for Geometry {
    fn from(cuboid: Cuboid) -> Self {
        Self::Cuboid(cuboid)
    }
}

impl From<Polygonal> for Geometry {
    fn from(polygon: Polygonal) -> Self {
        Self::Polygonal(polygon)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn cuboid(a: (i32, i32, i32), b: (i32, i32, i32)) -> Geometry {
        Cuboid::new(BlockPos::new(a.0, a.1, a.2), BlockPos::new(b.0, b.1, b.2)).into()
    }

    fn diamond(cx: i32, cz: i32, r: i32, min_y: i32, max_y: i32) -> Geometry {
        Polygonal::new(
            vec![
                Column::new(cx, cz - r),
                Column::new(cx + r, cz),
                Column::new(cx, cz + r),
                Column::new(cx - r, cz),
            ],
            min_y,
            max_y,
        )
        .unwrap()
        .into()
    }

    #[test]
    fn cuboid_contains_floored_point() {
        let g = cuboid((0, 0, 0), (10, 10, 10));
        assert!(g.contains(Point::new(10.99, 0.0, 5.5)));
        assert!(!g.contains(Point::new(11.0, 0.0, 5.5)));
        assert!(!g.contains(Point::new(-0.01, 5.0, 5.0)));
    }

    #[test]
    fn polygon_respects_height() {
        let g = diamond(0, 0, 5, 10, 20);
        assert!(g.contains(Point::new(0.5, 15.0, 0.5)));
        assert!(!g.contains(Point::new(0.5, 21.0, 0.5)));
        assert!(!g.contains(Point::new(0.5, 9.9, 0.5)));
        // Bounding box corner, outside the diamond
        assert!(!g.contains(Point::new(4.5, 15.0, 4.5)));
    }

    #[test]
    fn overlap_is_reflexive() {
        let c = cuboid((0, 0, 0), (3, 3, 3));
        let d = diamond(0, 0, 4, 0, 5);
        assert!(c.overlaps(&c));
        assert!(d.overlaps(&d));
    }

    #[test]
    fn polygon_and_cuboid_overlap_symmetrically() {
        let d = diamond(0, 0, 4, 0, 5);
        let inside_corner = cuboid((1, 0, 1), (2, 1, 2));
        let bbox_only = cuboid((3, 0, 3), (4, 5, 4));
        let above = cuboid((-1, 6, -1), (1, 8, 1));

        assert!(d.overlaps(&inside_corner));
        assert!(inside_corner.overlaps(&d));

        // Inside the diamond's bounds but past its edge
        assert!(!d.overlaps(&bbox_only));
        assert!(!bbox_only.overlaps(&d));

        assert!(!d.overlaps(&above));
        assert!(!above.overlaps(&d));
    }

    #[test]
    fn crossing_shapes_without_contained_vertices_overlap() {
        // A plus sign: a long thin bar crossing a diamond, no vertex of either inside the other
        let d = diamond(0, 0, 4, 0, 5);
        let bar = cuboid((-10, 0, 1), (10, 0, 2));
        assert!(d.overlaps(&bar));
        assert!(bar.overlaps(&d));
    }

    #[test]
    fn disjoint_cuboids_do_not_overlap() {
        let a = cuboid((0, 0, 0), (4, 4, 4));
        let b = cuboid((5, 0, 0), (9, 4, 4));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn volumes() {
        assert_eq!(cuboid((0, 0, 0), (9, 9, 9)).volume(), 1000.0);
        // Diamond with r = 2 has area 8, height 3
        assert_eq!(diamond(0, 0, 2, 0, 2).volume(), 24.0);
    }
}
