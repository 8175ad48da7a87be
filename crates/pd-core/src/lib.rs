//! pd-core: procedural level generation for a turn-based dungeon crawler.
//!
//! The centerpiece is the "paper dungeon" generator: a corridor-first
//! algorithm that grows a graph of rooms and corridors outward from a seed
//! room, tracking occupancy in a sparse spatial index, then rasterizes the
//! graph into a tile grid and populates it with entities.
//!
//! This crate contains no I/O. Randomness comes from an explicitly threaded
//! [`GameRng`] handle, so generation is reproducible from a seed.

pub mod dungeon;
pub mod entity;
pub mod map;
pub mod world;

mod consts;
mod errors;
mod rng;

pub use consts::*;
pub use errors::GenerationError;
pub use rng::GameRng;
