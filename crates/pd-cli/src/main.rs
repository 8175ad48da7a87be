//! Paper-dungeon floor viewer.
//!
//! Generates one floor and dumps it as ASCII: tiles underneath, entities
//! on top. Useful for eyeballing generator tuning and for reproducing a
//! floor from a seed.

use std::process::ExitCode;

use clap::Parser;

use pd_core::entity::{Entity, EntityKind};
use pd_core::map::GameMap;
use pd_core::world::GameWorld;
use pd_core::{GameRng, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};

/// Generate a paper dungeon and print it.
#[derive(Parser, Debug)]
#[command(name = "paperdungeon")]
#[command(author, version, about = "Generate a paper-dungeon floor", long_about = None)]
struct Args {
    /// Generation seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Map width in tiles
    #[arg(long, default_value_t = DEFAULT_MAP_WIDTH)]
    width: i32,

    /// Map height in tiles
    #[arg(long, default_value_t = DEFAULT_MAP_HEIGHT)]
    height: i32,

    /// Floor number to generate (scales difficulty and layout)
    #[arg(short, long, default_value_t = 1)]
    floor: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let mut world = GameWorld::new(args.width, args.height);
    world.current_floor = args.floor.saturating_sub(1);

    let player = Entity::spawn(EntityKind::Player, 0, 0);
    let map = match world.generate_floor(player, &mut rng) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("could not generate floor {}: {err}", args.floor);
            return ExitCode::FAILURE;
        }
    };

    print_map(&map);

    println!(
        "seed {} floor {}: {} monsters, {} items, stairs at {:?}",
        rng.seed(),
        world.current_floor,
        map.actors().filter(|e| e.kind != EntityKind::Player).count(),
        map.items().count(),
        map.downstairs_location,
    );

    ExitCode::SUCCESS
}

/// Print the tile grid with entities overlaid, actors over items.
fn print_map(map: &GameMap) {
    let mut rows = vec![vec![' '; map.width as usize]; map.height as usize];

    for x in 0..map.width {
        for y in 0..map.height {
            rows[y as usize][x as usize] = map.tile(x, y).glyph();
        }
    }
    for item in map.items() {
        rows[item.y as usize][item.x as usize] = item.kind.glyph();
    }
    for actor in map.actors() {
        rows[actor.y as usize][actor.x as usize] = actor.kind.glyph();
    }

    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
