//! Generation constants.

/// Default map width in tiles.
pub const DEFAULT_MAP_WIDTH: i32 = 160;

/// Default map height in tiles.
pub const DEFAULT_MAP_HEIGHT: i32 = 100;

/// Margin kept clear around the map edge; rooms and corridors are rejected
/// if any part of them (corridors grown by this margin) leaves the padded
/// interior.
pub const DEFAULT_PADDING: i32 = 4;

/// Growth-loop iterations per point of complexity.
pub const GROWTH_ATTEMPTS_PER_COMPLEXITY: u32 = 8;

/// Complexity every floor gets before depth scaling.
pub const BASE_COMPLEXITY: u32 = 3;

/// Upper bound on resampling an exit room distinct from the start room.
pub const STAIRS_PLACEMENT_ATTEMPTS: u32 = 100;
