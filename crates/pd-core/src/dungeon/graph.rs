//! The dungeon growth graph.
//!
//! Owns the sparse spatial occupancy index, the room list, and the corridor
//! cells. Rooms are placed whole or not at all; corridors grow cell by cell
//! and commit only when their outcome allows it.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::point::{Direction, Point};
use super::rect::Rect;
use super::room::RoomNode;
use crate::rng::GameRng;

/// What occupies a cell in the spatial index. A coordinate holds at most
/// one occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    /// Footprint cell of the room at this index in the room list.
    Room(usize),
    /// A committed corridor cell.
    Corridor,
}

/// Result of one corridor-growth attempt. The five outcomes are mutually
/// exclusive and cover every path through [`Dungeon::grow_corridor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorOutcome {
    /// The room had no unused walls left; nothing was attempted.
    NoUnusedWalls,
    /// Growth would have left the padded map interior. Nothing committed;
    /// the chosen wall is still consumed.
    OutOfBounds,
    /// The corridor ran its full length without touching anything and was
    /// committed. The tip is eligible to seed a new room.
    DeadEnd(Point),
    /// The corridor touched existing geometry and was committed up to (not
    /// including) the colliding cell. No new room should be seeded.
    Junction,
    /// A connection was required but the corridor dead-ended; nothing
    /// committed.
    NotConnected,
}

impl CorridorOutcome {
    /// The seed point for a new room, present only on a clean dead end.
    pub fn dead_end(self) -> Option<Point> {
        match self {
            CorridorOutcome::DeadEnd(p) => Some(p),
            _ => None,
        }
    }
}

/// Growth state for one floor. Transient: built once per floor request,
/// rasterized, then discarded.
#[derive(Debug, Clone)]
pub struct Dungeon {
    /// Sparse coordinate-to-occupant index used for collision checks.
    data: HashMap<Point, Occupant>,
    /// Placed rooms in creation order. Append-only.
    rooms: Vec<RoomNode>,
    /// Committed corridor cells in commit order. Append-only.
    corridors: Vec<Point>,
    /// Margin corridors must keep from the map edge.
    padding: i32,
    /// Map interior minus padding; all placement is rejected outside it.
    borders: Rect,
}

impl Dungeon {
    /// Create an empty graph for a map of the given size.
    pub fn new(map_width: i32, map_height: i32, padding: i32) -> Self {
        Self {
            data: HashMap::new(),
            rooms: Vec::new(),
            corridors: Vec::new(),
            padding,
            borders: Rect::new(
                padding,
                padding,
                map_width - padding * 2,
                map_height - padding * 2,
            ),
        }
    }

    /// Placed rooms in creation order.
    pub fn rooms(&self) -> &[RoomNode] {
        &self.rooms
    }

    /// Committed corridor cells in commit order.
    pub fn corridors(&self) -> &[Point] {
        &self.corridors
    }

    /// The placement limits (map minus padding).
    pub fn borders(&self) -> &Rect {
        &self.borders
    }

    /// Look up the occupant of a cell.
    pub fn occupant_at(&self, x: i32, y: i32) -> Option<Occupant> {
        self.data.get(&Point::new(x, y)).copied()
    }

    /// Number of occupied cells in the spatial index.
    pub fn occupied_cells(&self) -> usize {
        self.data.len()
    }

    /// Add a room to the graph.
    ///
    /// Rejected (returns false, nothing recorded) unless the rectangle is
    /// fully enclosed by the borders. On success the room's footprint is
    /// marked in the spatial index; footprint cells outside the borders are
    /// skipped during marking, which cannot happen for a rectangle that
    /// just passed the enclosure check.
    pub fn add_room(&mut self, rect: Rect) -> bool {
        if !self.in_limits(&rect) {
            return false;
        }

        let idx = self.rooms.len();
        self.rooms.push(RoomNode::new(rect));

        let (xs, ys) = rect.inner();
        for x in xs {
            for y in ys.clone() {
                self.set_data(Point::new(x, y), Occupant::Room(idx));
            }
        }
        true
    }

    /// Attempt to grow a corridor from a random unused wall of the room at
    /// `room_idx`.
    ///
    /// The chosen wall is removed from the room's available set no matter
    /// how the attempt ends; a room only ever gets four attempts. The
    /// corridor starts at the midpoint of the chosen edge and walks up to
    /// `length` steps outward. Each step is checked against the borders
    /// (grown by the padding, keeping corridors off the map edge) and
    /// against the spatial index.
    ///
    /// Cells are committed only if the corridor touched existing geometry
    /// (a junction) or the caller allowed a dead end (`connecting` false).
    /// See [`CorridorOutcome`] for the full contract.
    pub fn grow_corridor(
        &mut self,
        room_idx: usize,
        length: i32,
        connecting: bool,
        rng: &mut GameRng,
    ) -> CorridorOutcome {
        let room = &mut self.rooms[room_idx];

        let available: Vec<Direction> = Direction::iter()
            .filter(|d| room.ready_walls.contains(d.wall()))
            .collect();
        let Some(&dir) = rng.choose(&available) else {
            return CorridorOutcome::NoUnusedWalls;
        };
        room.ready_walls.remove(dir.wall());

        let start = room.rect.position();
        let size = room.rect.size();

        // Corridor mouth: midpoint of the chosen edge, on the room's own
        // footprint.
        let mut pos = match dir {
            Direction::North => Point::new(start.x + size.x / 2, start.y),
            Direction::South => Point::new(start.x + size.x / 2, start.y + size.y - 1),
            Direction::East => Point::new(start.x + size.x - 1, start.y + size.y / 2),
            Direction::West => Point::new(start.x, start.y + size.y / 2),
        };
        let step = dir.delta();

        let mut queued: Vec<Point> = Vec::new();
        let mut touched_another_room = false;

        for _ in 0..length {
            pos += step;

            // The padded 1x1 cell must stay inside the borders, so the
            // corridor itself keeps `padding` cells clear of the edge.
            let probe = Rect::new(pos.x, pos.y, 1, 1).grow(self.padding);
            if !self.in_limits(&probe) {
                return CorridorOutcome::OutOfBounds;
            }

            if self.data.contains_key(&pos) {
                // The colliding cell is not queued; the corridor stops at
                // its doorstep.
                touched_another_room = true;
                break;
            }

            queued.push(pos);
        }

        if touched_another_room || !connecting {
            for cell in &queued {
                self.data.insert(*cell, Occupant::Corridor);
                self.corridors.push(*cell);
            }
            if touched_another_room {
                CorridorOutcome::Junction
            } else {
                CorridorOutcome::DeadEnd(pos)
            }
        } else {
            CorridorOutcome::NotConnected
        }
    }

    /// Index of a uniformly random room. The graph must be seeded first.
    pub fn random_room(&self, rng: &mut GameRng) -> usize {
        assert!(
            !self.rooms.is_empty(),
            "random_room on an unseeded dungeon graph"
        );
        rng.rn2(self.rooms.len() as u32) as usize
    }

    fn in_limits(&self, rect: &Rect) -> bool {
        self.borders.encloses(rect)
    }

    fn set_data(&mut self, p: Point, occupant: Occupant) {
        if self.borders.has_point(p.x, p.y) {
            self.data.insert(p, occupant);
        }
    }
}
