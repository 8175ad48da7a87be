//! Paper-dungeon orchestration.
//!
//! Drives the growth loop over a [`Dungeon`] graph, rasterizes the result
//! into a [`GameMap`], and populates it: player start, monsters, items,
//! and the down staircase.

use super::graph::Dungeon;
use super::rect::Rect;
use super::spawn::SpawnTable;
use crate::consts::{
    BASE_COMPLEXITY, DEFAULT_PADDING, GROWTH_ATTEMPTS_PER_COMPLEXITY, STAIRS_PLACEMENT_ATTEMPTS,
};
use crate::entity::Entity;
use crate::errors::GenerationError;
use crate::map::{GameMap, TileType};
use crate::rng::GameRng;

/// Tuning knobs for one generation run.
///
/// Size and length bounds are half-open, matching how they are rolled: a
/// `room_max_size` of 7 yields rooms up to 6 cells wide.
#[derive(Debug, Clone)]
pub struct PaperConfig {
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub min_corridor_length: i32,
    pub max_corridor_length: i32,
    /// Side length of the square room generation starts from.
    pub seed_room_size: i32,
    /// Scales the growth loop; each point buys eight corridor attempts.
    pub complexity: u32,
    pub padding: i32,
}

impl Default for PaperConfig {
    fn default() -> Self {
        let room_min_size = 4;
        let room_max_size = 7;
        Self {
            room_min_size,
            room_max_size,
            min_corridor_length: room_min_size + 1,
            max_corridor_length: room_max_size * 3,
            seed_room_size: 8,
            complexity: BASE_COMPLEXITY,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Generate a complete floor.
///
/// Grows a dungeon graph from a seed room at the map center, rasterizes it
/// over an all-wall grid, places the player at the center of a random room,
/// spawns monsters and items per room, and puts the down staircase in a
/// room distinct from the start.
///
/// Failed room placements and rejected corridors during growth are silent
/// attrition; the iteration budget absorbs them. The only failures are
/// degenerate results that would leave the floor unplayable.
#[allow(clippy::too_many_arguments)]
pub fn generate_paper_dungeon(
    config: &PaperConfig,
    map_width: i32,
    map_height: i32,
    max_monsters_per_room: u32,
    monster_chances: &SpawnTable,
    max_items_per_room: u32,
    item_chances: &SpawnTable,
    floor_number: u32,
    mut player: Entity,
    rng: &mut GameRng,
) -> Result<GameMap, GenerationError> {
    let mut map = GameMap::new(map_width, map_height);
    let mut dungeon = Dungeon::new(map_width, map_height, config.padding);

    // Seed room, centered on the map. On a map too small to enclose it
    // there is nothing to grow from, so bail out before the growth loop.
    let seeded = dungeon.add_room(Rect::new(
        map_width / 2 - config.seed_room_size / 2,
        map_height / 2 - config.seed_room_size / 2,
        config.seed_room_size,
        config.seed_room_size,
    ));
    if !seeded {
        return Err(GenerationError::TooFewRooms { rooms: 0 });
    }

    // Growth loop. Corridors are allowed to dead-end; each clean dead end
    // tries to seed a new room overlapping the corridor mouth. Attempts
    // that produce nothing are expected and simply spend an iteration.
    for _ in 0..config.complexity * GROWTH_ATTEMPTS_PER_COMPLEXITY {
        let room_idx = dungeon.random_room(rng);
        let length = rng.range(config.min_corridor_length, config.max_corridor_length);

        if let Some(tip) = dungeon.grow_corridor(room_idx, length, false, rng).dead_end() {
            let w = rng.range(config.room_min_size, config.room_max_size);
            let h = rng.range(config.room_min_size, config.room_max_size);
            dungeon.add_room(Rect::new(tip.x - 1, tip.y - 1, w, h));
        }
    }

    let room_count = dungeon.rooms().len();
    if room_count < 2 {
        return Err(GenerationError::TooFewRooms { rooms: room_count });
    }

    // Rasterize the graph.
    for cell in dungeon.corridors() {
        map.set_tile(cell.x, cell.y, TileType::Floor);
    }
    for room in dungeon.rooms() {
        let (xs, ys) = room.rect.inner();
        for x in xs {
            for y in ys.clone() {
                map.set_tile(x, y, TileType::Floor);
            }
        }
    }

    // Player starts at the center of a random room.
    let start_idx = dungeon.random_room(rng);
    let start_center = dungeon.rooms()[start_idx].rect.center();
    player.place(start_center.x, start_center.y);
    map.entities.push(player);

    // Populate rooms. The start room gets no monsters.
    for (idx, room) in dungeon.rooms().iter().enumerate() {
        let max_monsters = if idx == start_idx {
            0
        } else {
            max_monsters_per_room
        };
        place_entities(
            &room.rect,
            &mut map,
            max_monsters,
            monster_chances,
            max_items_per_room,
            item_chances,
            floor_number,
            rng,
        );
    }

    // Down stairs in a room distinct from the start. Retry-capped so a
    // degenerate graph fails instead of hanging.
    let mut exit_idx = start_idx;
    let mut attempts = 0;
    while exit_idx == start_idx {
        if attempts >= STAIRS_PLACEMENT_ATTEMPTS {
            return Err(GenerationError::StairsExhausted { attempts });
        }
        exit_idx = dungeon.random_room(rng);
        attempts += 1;
    }

    let exit_center = dungeon.rooms()[exit_idx].rect.center();
    map.set_tile(exit_center.x, exit_center.y, TileType::DownStairs);
    map.downstairs_location = (exit_center.x, exit_center.y);

    Ok(map)
}

/// Place monsters and items in one room.
///
/// Counts roll uniformly in `0..=cap`. Spawn positions roll over the room
/// interior (footprint minus its boundary ring); a cell already holding
/// any entity is skipped, dropping that spawn.
#[allow(clippy::too_many_arguments)]
fn place_entities(
    room: &Rect,
    map: &mut GameMap,
    max_monsters: u32,
    monster_chances: &SpawnTable,
    max_items: u32,
    item_chances: &SpawnTable,
    floor_number: u32,
    rng: &mut GameRng,
) {
    let number_of_monsters = rng.rn2(max_monsters + 1) as usize;
    let number_of_items = rng.rn2(max_items + 1) as usize;

    let monsters = monster_chances.pick(number_of_monsters, floor_number, rng);
    let items = item_chances.pick(number_of_items, floor_number, rng);

    for kind in monsters.into_iter().chain(items) {
        let x = rng.range(room.x1 + 1, room.x2);
        let y = rng.range(room.y1 + 1, room.y2);

        if map.entity_at(x, y).is_none() {
            map.entities.push(Entity::spawn(kind, x, y));
        }
    }
}
