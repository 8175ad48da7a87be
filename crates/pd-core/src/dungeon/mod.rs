//! Dungeon generation.
//!
//! Geometry primitives, the room/corridor growth graph, floor-scaling
//! tables, and the top-level paper-dungeon orchestration.

mod graph;
mod paper;
mod point;
mod rect;
mod room;
mod spawn;

pub use graph::{CorridorOutcome, Dungeon, Occupant};
pub use paper::{generate_paper_dungeon, PaperConfig};
pub use point::{Direction, Point};
pub use rect::Rect;
pub use room::{RoomNode, WallSet};
pub use spawn::{SpawnTable, StepTable};
