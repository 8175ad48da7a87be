//! Graph nodes: a placed rectangle plus its remaining growth potential.

use bitflags::bitflags;

use super::rect::Rect;

bitflags! {
    /// The cardinal walls of a room still available for spawning a
    /// corridor. Each wall is consumed exactly once, whether or not the
    /// corridor attempt succeeds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WallSet: u8 {
        const NORTH = 0b0001;
        const EAST = 0b0010;
        const SOUTH = 0b0100;
        const WEST = 0b1000;
    }
}

/// A node in the dungeon graph. Lives for the generator's lifetime; only
/// corridor-growth attempts mutate it, by consuming walls.
#[derive(Debug, Clone)]
pub struct RoomNode {
    /// Placed geometry.
    pub rect: Rect,
    /// Walls not yet used for a corridor attempt.
    pub ready_walls: WallSet,
    /// False for placeholder nodes that occupy space without being a real
    /// room.
    pub is_room: bool,
}

impl RoomNode {
    /// Wrap a placed rectangle with all four walls available.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ready_walls: WallSet::all(),
            is_room: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Direction;

    #[test]
    fn test_new_room_has_four_walls() {
        let node = RoomNode::new(Rect::new(0, 0, 4, 4));
        assert_eq!(node.ready_walls.bits().count_ones(), 4);
        assert!(node.is_room);
    }

    #[test]
    fn test_walls_shrink_one_at_a_time() {
        let mut node = RoomNode::new(Rect::new(0, 0, 4, 4));
        for (i, dir) in [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
        .into_iter()
        .enumerate()
        {
            node.ready_walls.remove(dir.wall());
            assert_eq!(node.ready_walls.bits().count_ones() as usize, 3 - i);
        }
        assert!(node.ready_walls.is_empty());
    }
}
