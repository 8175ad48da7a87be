//! Entity templates and instances.
//!
//! The generator only needs enough of an entity model to populate a floor:
//! a template kind, a position, and blocking/actor queries. Everything else
//! (AI, inventory, combat stats) lives outside this crate.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Entity templates. Spawning clones template data into a fresh instance;
/// the template itself is static and never mutated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EntityKind {
    Player,
    Orc,
    Troll,
    HealthPotion,
    ConfusionScroll,
    LightningScroll,
    FireballScroll,
    Sword,
    ChainMail,
}

impl EntityKind {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Player => "Player",
            EntityKind::Orc => "Orc",
            EntityKind::Troll => "Troll",
            EntityKind::HealthPotion => "Health Potion",
            EntityKind::ConfusionScroll => "Confusion Scroll",
            EntityKind::LightningScroll => "Lightning Scroll",
            EntityKind::FireballScroll => "Fireball Scroll",
            EntityKind::Sword => "Sword",
            EntityKind::ChainMail => "Chain Mail",
        }
    }

    /// Map glyph.
    pub const fn glyph(self) -> char {
        match self {
            EntityKind::Player => '@',
            EntityKind::Orc => 'o',
            EntityKind::Troll => 'T',
            EntityKind::HealthPotion => '!',
            EntityKind::ConfusionScroll | EntityKind::LightningScroll | EntityKind::FireballScroll => {
                '?'
            }
            EntityKind::Sword => '/',
            EntityKind::ChainMail => '[',
        }
    }

    /// Actors block movement; items do not.
    pub const fn is_actor(self) -> bool {
        matches!(self, EntityKind::Player | EntityKind::Orc | EntityKind::Troll)
    }

    /// Check if this template is an item.
    pub const fn is_item(self) -> bool {
        !self.is_actor()
    }

    /// Check if an instance of this template blocks movement.
    pub const fn blocks_movement(self) -> bool {
        self.is_actor()
    }
}

/// A placed entity instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
}

impl Entity {
    /// Spawn a fresh instance of a template at a position.
    pub const fn spawn(kind: EntityKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// Move this entity to a position.
    pub fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}
