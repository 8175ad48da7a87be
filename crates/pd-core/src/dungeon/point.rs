//! Integer 2D points and cardinal directions.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::room::WallSet;

/// A position or direction vector on the map grid. Screen coordinates:
/// y grows downward, so north is (0, -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// The four cardinal directions a corridor can grow in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Unit vector for one step in this direction.
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
        }
    }

    /// The wall-set bit for the room wall facing this direction.
    pub const fn wall(self) -> WallSet {
        match self {
            Direction::North => WallSet::NORTH,
            Direction::East => WallSet::EAST,
            Direction::South => WallSet::SOUTH,
            Direction::West => WallSet::WEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_add() {
        let p = Point::new(3, 4) + Point::new(-1, 2);
        assert_eq!(p, Point::new(2, 6));
    }

    #[test]
    fn test_add_assign() {
        let mut p = Point::new(0, 0);
        p += Direction::North.delta();
        p += Direction::North.delta();
        assert_eq!(p, Point::new(0, -2));
    }

    #[test]
    fn test_deltas_are_unit_vectors() {
        for dir in Direction::iter() {
            let d = dir.delta();
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }

    #[test]
    fn test_wall_bits_distinct() {
        let mut all = WallSet::empty();
        for dir in Direction::iter() {
            assert!(!all.intersects(dir.wall()));
            all |= dir.wall();
        }
        assert_eq!(all, WallSet::all());
    }
}
