//! Floor progression and per-floor difficulty scaling.

use crate::consts::BASE_COMPLEXITY;
use crate::dungeon::{generate_paper_dungeon, PaperConfig, SpawnTable, StepTable};
use crate::entity::{Entity, EntityKind};
use crate::errors::GenerationError;
use crate::map::GameMap;
use crate::rng::GameRng;

/// Per-room item cap by floor.
pub fn max_items_by_floor() -> StepTable {
    StepTable::new(vec![(1, 1), (4, 2)])
}

/// Per-room monster cap by floor.
pub fn max_monsters_by_floor() -> StepTable {
    StepTable::new(vec![(1, 2), (4, 3), (6, 5)])
}

/// Extra structural complexity by floor, added to [`BASE_COMPLEXITY`].
pub fn complexity_by_floor() -> StepTable {
    StepTable::new(vec![(2, 1), (5, 2), (10, 3), (20, 4)])
}

/// Weighted monster spawns by floor.
pub fn monster_chances() -> SpawnTable {
    SpawnTable::new(vec![
        (0, vec![(EntityKind::Orc, 80)]),
        (3, vec![(EntityKind::Troll, 15)]),
        (5, vec![(EntityKind::Troll, 30)]),
        (7, vec![(EntityKind::Troll, 60)]),
    ])
}

/// Weighted item spawns by floor.
pub fn item_chances() -> SpawnTable {
    SpawnTable::new(vec![
        (0, vec![(EntityKind::HealthPotion, 35)]),
        (2, vec![(EntityKind::ConfusionScroll, 10)]),
        (4, vec![(EntityKind::LightningScroll, 25), (EntityKind::Sword, 5)]),
        (6, vec![(EntityKind::FireballScroll, 25), (EntityKind::ChainMail, 15)]),
    ])
}

/// Holds map settings and generates a new floor on each descent.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub map_width: i32,
    pub map_height: i32,
    pub current_floor: u32,
}

impl GameWorld {
    /// Create a world before the first descent.
    pub fn new(map_width: i32, map_height: i32) -> Self {
        Self {
            map_width,
            map_height,
            current_floor: 0,
        }
    }

    /// Advance one floor down and generate it.
    ///
    /// Complexity and spawn tables scale with the new floor number. The
    /// player entity is carried onto the new map and repositioned at the
    /// start room.
    pub fn generate_floor(
        &mut self,
        player: Entity,
        rng: &mut GameRng,
    ) -> Result<GameMap, GenerationError> {
        self.current_floor += 1;

        let config = PaperConfig {
            complexity: BASE_COMPLEXITY + complexity_by_floor().value_for(self.current_floor),
            ..PaperConfig::default()
        };

        generate_paper_dungeon(
            &config,
            self.map_width,
            self.map_height,
            max_monsters_by_floor().value_for(self.current_floor),
            &monster_chances(),
            max_items_by_floor().value_for(self.current_floor),
            &item_chances(),
            self.current_floor,
            player,
            rng,
        )
    }
}
