//! Positions in world and block space.

/// A position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Integer block coordinates.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The block a world-space point falls in.
    #[must_use]
    pub fn from_point(point: Point) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// Component-wise minimum.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    /// Drop the vertical component.
    #[must_use]
    pub const fn column(self) -> Column {
        Column {
            x: self.x,
            z: self.z,
        }
    }
}

impl From<Point> for BlockPos {
    fn from(point: Point) -> Self {
        Self::from_point(point)
    }
}

/// A block column on the x/z plane. Polygon vertices are columns.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Default)]
pub struct Column {
    pub x: i32,
    pub z: i32,
}

impl Column {
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Coordinates widened so products of differences cannot overflow.
    pub(crate) fn wide(self) -> (i128, i128) {
        (i128::from(self.x), i128::from(self.z))
    }
}
