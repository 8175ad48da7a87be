//! End-to-end generation tests.
//!
//! Exercises the full pipeline: seeded growth, rasterization, entity
//! placement, and floor progression, across many seeds.

use pd_core::dungeon::{CorridorOutcome, Dungeon, PaperConfig, Rect};
use pd_core::entity::{Entity, EntityKind};
use pd_core::map::{GameMap, TileType};
use pd_core::world::GameWorld;
use pd_core::{GameRng, GenerationError, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};

// ============================================================================
// Helpers
// ============================================================================

fn count_tiles(map: &GameMap, tile: TileType) -> usize {
    map.tiles
        .iter()
        .flat_map(|col| col.iter())
        .filter(|&&t| t == tile)
        .count()
}

fn generate(seed: u64, floor: u32) -> Result<GameMap, GenerationError> {
    let mut world = GameWorld::new(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT);
    world.current_floor = floor - 1;
    let mut rng = GameRng::new(seed);
    world.generate_floor(Entity::spawn(EntityKind::Player, 0, 0), &mut rng)
}

// ============================================================================
// Full-pipeline structure
// ============================================================================

#[test]
fn test_generated_floor_has_carved_space() {
    let map = generate(42, 1).expect("floor should generate");
    let floor_cells = count_tiles(&map, TileType::Floor);
    assert!(
        floor_cells > 100,
        "expected a substantial carved area, found {floor_cells}"
    );
}

#[test]
fn test_exactly_one_down_staircase() {
    for seed in [1u64, 7, 42, 1234] {
        let map = generate(seed, 1).expect("floor should generate");
        assert_eq!(count_tiles(&map, TileType::DownStairs), 1, "seed {seed}");
        let (x, y) = map.downstairs_location;
        assert_eq!(map.tile(x, y), TileType::DownStairs, "seed {seed}");
    }
}

#[test]
fn test_player_starts_on_walkable_tile() {
    for seed in [1u64, 7, 42, 1234] {
        let map = generate(seed, 1).expect("floor should generate");
        let player = map.player().expect("player placed");
        assert!(map.tile(player.x, player.y).is_walkable(), "seed {seed}");
    }
}

#[test]
fn test_all_entities_inside_bounds() {
    for seed in [3u64, 17, 99] {
        let map = generate(seed, 5).expect("floor should generate");
        for entity in &map.entities {
            assert!(map.in_bounds(entity.x, entity.y));
        }
    }
}

#[test]
fn test_padding_margin_stays_solid_wall() {
    let map = generate(42, 1).expect("floor should generate");
    // Rooms are enclosed by the padded borders and corridors keep a full
    // padding of clearance, so the outermost 4-cell margin is never carved.
    for x in 0..map.width {
        for y in 0..map.height {
            let in_margin =
                x < 4 || y < 4 || x >= map.width - 4 || y >= map.height - 4;
            if in_margin {
                assert_eq!(map.tile(x, y), TileType::Wall, "carved ({x}, {y})");
            }
        }
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_identical_seed_and_inputs_reproduce_the_floor() {
    let a = generate(0xC0FFEE, 3).expect("floor should generate");
    let b = generate(0xC0FFEE, 3).expect("floor should generate");
    assert_eq!(a.tiles, b.tiles);
    assert_eq!(a.entities, b.entities);
    assert_eq!(a.downstairs_location, b.downstairs_location);
}

#[test]
fn test_floor_number_changes_the_outcome() {
    let a = generate(0xC0FFEE, 1).expect("floor should generate");
    let b = generate(0xC0FFEE, 9).expect("floor should generate");
    // Same seed, different depth: complexity and spawn tables differ.
    assert!(a.tiles != b.tiles || a.entities != b.entities);
}

// ============================================================================
// Spawn scaling
// ============================================================================

#[test]
fn test_early_floors_spawn_only_orcs() {
    for seed in 0..10u64 {
        let map = generate(seed, 1).expect("floor should generate");
        for actor in map.actors() {
            assert!(
                matches!(actor.kind, EntityKind::Player | EntityKind::Orc),
                "floor 1 spawned {:?} (seed {seed})",
                actor.kind
            );
        }
    }
}

#[test]
fn test_deep_floors_eventually_spawn_trolls() {
    let mut found = false;
    for seed in 0..30u64 {
        let map = generate(seed, 10).expect("floor should generate");
        if map.actors().any(|e| e.kind == EntityKind::Troll) {
            found = true;
            break;
        }
    }
    assert!(found, "no troll across 30 deep floors");
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_degenerate_complexity_fails_instead_of_hanging() {
    let config = PaperConfig {
        complexity: 0,
        ..PaperConfig::default()
    };
    let mut rng = GameRng::new(1);
    let result = pd_core::dungeon::generate_paper_dungeon(
        &config,
        DEFAULT_MAP_WIDTH,
        DEFAULT_MAP_HEIGHT,
        2,
        &pd_core::world::monster_chances(),
        1,
        &pd_core::world::item_chances(),
        1,
        Entity::spawn(EntityKind::Player, 0, 0),
        &mut rng,
    );
    assert_eq!(result, Err(GenerationError::TooFewRooms { rooms: 1 }));
}

// ============================================================================
// Graph-level invariants across seeds
// ============================================================================

#[test]
fn test_growth_outcomes_keep_graph_invariants() {
    for seed in 0..25u64 {
        let mut rng = GameRng::new(seed);
        let mut dungeon = Dungeon::new(DEFAULT_MAP_WIDTH, DEFAULT_MAP_HEIGHT, 4);
        assert!(dungeon.add_room(Rect::new(76, 46, 8, 8)));

        for _ in 0..40 {
            let idx = dungeon.random_room(&mut rng);
            let walls_before = dungeon.rooms()[idx].ready_walls.bits().count_ones();
            let corridors_before = dungeon.corridors().len();

            let outcome = dungeon.grow_corridor(idx, rng.range(5, 21), false, &mut rng);
            let walls_after = dungeon.rooms()[idx].ready_walls.bits().count_ones();

            match outcome {
                CorridorOutcome::NoUnusedWalls => {
                    assert_eq!(walls_before, 0);
                    assert_eq!(walls_after, 0);
                }
                CorridorOutcome::OutOfBounds => {
                    assert_eq!(walls_after, walls_before - 1);
                    assert_eq!(dungeon.corridors().len(), corridors_before);
                }
                CorridorOutcome::DeadEnd(tip) => {
                    assert_eq!(walls_after, walls_before - 1);
                    assert!(dungeon.corridors().len() > corridors_before);
                    let w = rng.range(4, 7);
                    let h = rng.range(4, 7);
                    dungeon.add_room(Rect::new(tip.x - 1, tip.y - 1, w, h));
                }
                CorridorOutcome::Junction => {
                    assert_eq!(walls_after, walls_before - 1);
                }
                CorridorOutcome::NotConnected => {
                    unreachable!("connecting=false never discards a corridor")
                }
            }
        }

        for room in dungeon.rooms() {
            assert!(dungeon.borders().encloses(&room.rect), "seed {seed}");
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_map_survives_a_serde_round_trip() {
    let map = generate(42, 2).expect("floor should generate");
    let json = serde_json::to_string(&map).expect("serialize");
    let back: GameMap = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(map, back);
}
