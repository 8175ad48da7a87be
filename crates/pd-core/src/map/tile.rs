//! Map tile types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Tile/terrain type. Generation writes exactly three kinds: everything
/// starts as wall, carved cells become floor, and one cell becomes the
/// down staircase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Wall = 0,
    Floor = 1,
    DownStairs = 2,
}

impl TileType {
    /// Check if this tile can be walked over.
    pub const fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor | TileType::DownStairs)
    }

    /// Check if this tile blocks field of view.
    pub const fn is_transparent(&self) -> bool {
        matches!(self, TileType::Floor | TileType::DownStairs)
    }

    /// Display glyph.
    pub const fn glyph(&self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
            TileType::DownStairs => '>',
        }
    }
}
