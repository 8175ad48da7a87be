//! The generated map: a tile grid plus the entities placed on it.

mod tile;

pub use tile::TileType;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};

/// A width x height tile grid with an entity collection. Indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
    /// Tile grid, column major. Defaults to all wall.
    pub tiles: Vec<Vec<TileType>>,
    /// Every entity on the map, the player included.
    pub entities: Vec<Entity>,
    /// Where the down staircase was placed.
    pub downstairs_location: (i32, i32),
}

impl GameMap {
    /// Create an all-wall map with no entities.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![TileType::Wall; height as usize]; width as usize],
            entities: Vec::new(),
            downstairs_location: (0, 0),
        }
    }

    /// Check if a position is inside the map bounds.
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        0 <= x && x < self.width && 0 <= y && y < self.height
    }

    /// Tile at a position. Panics out of bounds.
    pub fn tile(&self, x: i32, y: i32) -> TileType {
        self.tiles[x as usize][y as usize]
    }

    /// Overwrite the tile at a position. Panics out of bounds.
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileType) {
        self.tiles[x as usize][y as usize] = tile;
    }

    /// First entity at a position, if any.
    pub fn entity_at(&self, x: i32, y: i32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.x == x && e.y == y)
    }

    /// First movement-blocking entity at a position, if any.
    pub fn blocking_entity_at(&self, x: i32, y: i32) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.kind.blocks_movement() && e.x == x && e.y == y)
    }

    /// All actors on the map.
    pub fn actors(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.kind.is_actor())
    }

    /// All items on the map.
    pub fn items(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.kind.is_item())
    }

    /// The player entity, if placed.
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind == EntityKind::Player)
    }
}
