//! Geometry primitives: [`Point`] and [`Dir`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// The four cardinal directions, numbered in wall-mask bit order:
/// 0 = East, 1 = North, 2 = West, 3 = South.
///
/// Bit `d` of a cell's wall mask being set means the edge toward direction
/// `d` is open. Opposite directions differ by 2, so the matching bit on the
/// far side of an edge is `(d + 2) % 4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Dir {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Dir {
    /// All four directions, in bit order.
    pub const ALL: [Dir; 4] = [Dir::East, Dir::North, Dir::West, Dir::South];

    /// The wall-mask bit for this direction.
    #[inline]
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Direction for an index, wrapping modulo 4.
    #[inline]
    pub const fn from_index(i: u8) -> Dir {
        match i % 4 {
            0 => Dir::East,
            1 => Dir::North,
            2 => Dir::West,
            _ => Dir::South,
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn opposite(self) -> Dir {
        Self::from_index(self as u8 + 2)
    }

    /// Unit step toward this direction, in screen coordinates
    /// (north is y - 1).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Dir::East => Point::new(1, 0),
            Dir::North => Point::new(0, -1),
            Dir::West => Point::new(-1, 0),
            Dir::South => Point::new(0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn dir_bits_and_indices() {
        assert_eq!(Dir::East.bit(), 1);
        assert_eq!(Dir::North.bit(), 2);
        assert_eq!(Dir::West.bit(), 4);
        assert_eq!(Dir::South.bit(), 8);
        for i in 0..8u8 {
            assert_eq!(Dir::from_index(i), Dir::ALL[(i % 4) as usize]);
        }
    }

    #[test]
    fn dir_opposites() {
        assert_eq!(Dir::East.opposite(), Dir::West);
        assert_eq!(Dir::North.opposite(), Dir::South);
        assert_eq!(Dir::West.opposite(), Dir::East);
        assert_eq!(Dir::South.opposite(), Dir::North);
    }

    #[test]
    fn dir_deltas_cancel() {
        for d in Dir::ALL {
            assert_eq!(d.delta() + d.opposite().delta(), Point::ZERO);
        }
    }
}
