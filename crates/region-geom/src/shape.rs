//! Concrete claim shapes.

use crate::{Aabb, BlockPos, Column, GeometryError};

/// An axis-aligned box of blocks.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Cuboid {
    bounds: Aabb,
}

impl Cuboid {
    /// Cuboid spanned by two opposite corners, in any order.
    #[must_use]
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            bounds: Aabb::new(a, b),
        }
    }

    #[must_use]
    pub const fn min(&self) -> BlockPos {
        self.bounds.min
    }

    #[must_use]
    pub const fn max(&self) -> BlockPos {
        self.bounds.max
    }

    #[must_use]
    pub const fn bounds(&self) -> Aabb {
        self.bounds
    }
}

/// A polygon on the x/z plane, extruded from `min_y` to `max_y` inclusive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygonal {
    points: Vec<Column>,
    bounds: Aabb,
}

impl Polygonal {
    /// Build a polygon from its vertices in either winding order.
    ///
    /// The heights may be given in any order. Fails if there are fewer than
    /// three vertices or the outline encloses no area.
    pub fn new(points: Vec<Column>, min_y: i32, max_y: i32) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }
        if twice_area(&points) == 0 {
            return Err(GeometryError::ZeroArea);
        }

        let (lo_y, hi_y) = (min_y.min(max_y), min_y.max(max_y));
        let mut min = BlockPos::new(points[0].x, lo_y, points[0].z);
        let mut max = BlockPos::new(points[0].x, hi_y, points[0].z);
        for p in &points[1..] {
            min = min.min(BlockPos::new(p.x, lo_y, p.z));
            max = max.max(BlockPos::new(p.x, hi_y, p.z));
        }

        Ok(Self {
            points,
            bounds: Aabb { min, max },
        })
    }

    #[must_use]
    pub fn points(&self) -> &[Column] {
        &self.points
    }

    #[must_use]
    pub const fn min_y(&self) -> i32 {
        self.bounds.min.y
    }

    #[must_use]
    pub const fn max_y(&self) -> i32 {
        self.bounds.max.y
    }

    #[must_use]
    pub const fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Enclosed area on the x/z plane, in square blocks.
    #[must_use]
    pub fn area(&self) -> f64 {
        twice_area(&self.points).unsigned_abs() as f64 / 2.0
    }

    /// Whether a column is inside the outline. Edges and vertices count as inside.
    #[must_use]
    pub fn contains_column(&self, column: Column) -> bool {
        if !self.bounds.contains_column(column) {
            return false;
        }

        let p = column.wide();
        let mut inside = false;
        for (a, b) in edges(&self.points) {
            let (a, b) = (a.wide(), b.wide());
            if on_segment(a, b, p) {
                return true;
            }
            // Crossing test against the horizontal ray towards +x.
            if (a.1 > p.1) != (b.1 > p.1) {
                let den = b.1 - a.1;
                let lhs = (p.0 - a.0) * den;
                let rhs = (b.0 - a.0) * (p.1 - a.1);
                let crosses = if den > 0 { lhs < rhs } else { lhs > rhs };
                if crosses {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// Consecutive vertex pairs, closing back to the first vertex.
pub(crate) fn edges(points: &[Column]) -> impl Iterator<Item = (Column, Column)> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

/// Shoelace sum; twice the signed area.
fn twice_area(points: &[Column]) -> i128 {
    edges(points)
        .map(|(a, b)| {
            let (a, b) = (a.wide(), b.wide());
            a.0 * b.1 - b.0 * a.1
        })
        .sum()
}

fn cross(o: (i128, i128), a: (i128, i128), b: (i128, i128)) -> i128 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

fn within(a: (i128, i128), b: (i128, i128), p: (i128, i128)) -> bool {
    p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0) && p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
}

fn on_segment(a: (i128, i128), b: (i128, i128), p: (i128, i128)) -> bool {
    cross(a, b, p) == 0 && within(a, b, p)
}

/// Closed segment intersection, including touching and collinear overlap.
pub(crate) fn segments_intersect(a: (Column, Column), b: (Column, Column)) -> bool {
    let (p1, p2) = (a.0.wide(), a.1.wide());
    let (q1, q2) = (b.0.wide(), b.1.wide());

    let d1 = cross(q1, q2, p1).signum();
    let d2 = cross(q1, q2, p2).signum();
    let d3 = cross(p1, p2, q1).signum();
    let d4 = cross(p1, p2, q2).signum();

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && within(q1, q2, p1))
        || (d2 == 0 && within(q1, q2, p2))
        || (d3 == 0 && within(p1, p2, q1))
        || (d4 == 0 && within(p1, p2, q2))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn triangle() -> Polygonal {
        Polygonal::new(
            vec![Column::new(0, 0), Column::new(10, 0), Column::new(0, 10)],
            0,
            5,
        )
        .unwrap()
    }

    #[test]
    fn rejects_degenerate_outlines() {
        assert_eq!(
            Polygonal::new(vec![Column::new(0, 0), Column::new(1, 1)], 0, 1),
            Err(GeometryError::TooFewPoints(2))
        );
        assert_eq!(
            Polygonal::new(
                vec![Column::new(0, 0), Column::new(5, 5), Column::new(10, 10)],
                0,
                1
            ),
            Err(GeometryError::ZeroArea)
        );
    }

    #[test]
    fn heights_are_normalized() {
        let poly = Polygonal::new(
            vec![Column::new(0, 0), Column::new(4, 0), Column::new(4, 4)],
            20,
            -3,
        )
        .unwrap();
        assert_eq!(poly.min_y(), -3);
        assert_eq!(poly.max_y(), 20);
        assert_eq!(poly.bounds().min, BlockPos::new(0, -3, 0));
        assert_eq!(poly.bounds().max, BlockPos::new(4, 20, 4));
    }

    #[test]
    fn triangle_contains_interior_and_edges() {
        let tri = triangle();
        assert!(tri.contains_column(Column::new(1, 1)));
        assert!(tri.contains_column(Column::new(0, 0)));
        assert!(tri.contains_column(Column::new(5, 5))); // hypotenuse
        assert!(tri.contains_column(Column::new(10, 0)));
        assert!(!tri.contains_column(Column::new(6, 6)));
        assert!(!tri.contains_column(Column::new(-1, 0)));
        assert_eq!(tri.area(), 50.0);
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape opening towards +z
        let u = Polygonal::new(
            vec![
                Column::new(0, 0),
                Column::new(9, 0),
                Column::new(9, 9),
                Column::new(6, 9),
                Column::new(6, 3),
                Column::new(3, 3),
                Column::new(3, 9),
                Column::new(0, 9),
            ],
            0,
            0,
        )
        .unwrap();
        assert!(u.contains_column(Column::new(1, 8)));
        assert!(u.contains_column(Column::new(8, 8)));
        assert!(u.contains_column(Column::new(4, 3)));
        assert!(!u.contains_column(Column::new(4, 6)));
        assert!(!u.contains_column(Column::new(5, 8)));
    }

    #[test]
    fn extreme_vertices_do_not_overflow() {
        let (lo, hi) = (i32::MIN, i32::MAX);
        let points = vec![Column::new(lo, lo), Column::new(hi, lo), Column::new(hi, hi)];
        let tri = Polygonal::new(points.clone(), 0, 10).unwrap();

        let span = i128::from(hi) - i128::from(lo);
        assert_eq!(twice_area(&points).abs(), span * span);
        assert!(tri.area() > 0.0);

        assert!(tri.contains_column(Column::new(0, 0))); // diagonal edge
        assert!(tri.contains_column(Column::new(1, 0)));
        assert!(tri.contains_column(Column::new(hi, lo)));
        assert!(!tri.contains_column(Column::new(0, 1)));
        assert!(!tri.contains_column(Column::new(lo, hi)));

        let seg = |ax, az, bx, bz| (Column::new(ax, az), Column::new(bx, bz));
        assert!(segments_intersect(seg(lo, lo, hi, hi), seg(lo, hi, hi, lo)));
        assert!(!segments_intersect(seg(lo, lo, hi, lo), seg(lo, hi, hi, hi)));
    }

    #[test]
    fn segment_intersection_cases() {
        let seg = |ax, az, bx, bz| (Column::new(ax, az), Column::new(bx, bz));
        assert!(segments_intersect(seg(0, 0, 4, 4), seg(0, 4, 4, 0)));
        assert!(segments_intersect(seg(0, 0, 4, 0), seg(4, 0, 8, 0)));
        assert!(segments_intersect(seg(0, 0, 4, 0), seg(2, 0, 2, 5)));
        assert!(!segments_intersect(seg(0, 0, 4, 0), seg(0, 1, 4, 1)));
        assert!(!segments_intersect(seg(0, 0, 4, 0), seg(5, 0, 8, 0)));
    }
}
