//! Generation failures.
//!
//! Rejected placements during growth are not errors; the growth loop absorbs
//! them statistically. The only failures surfaced to the caller are the
//! degenerate results that would otherwise leave an unplayable floor.

use thiserror::Error;

/// A floor could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Growth terminated with too few rooms to place both a start room and
    /// a distinct exit room.
    #[error("generation produced {rooms} room(s); at least 2 are required")]
    TooFewRooms { rooms: usize },

    /// Resampling an exit room distinct from the start room hit the retry
    /// cap. Unreachable with a sane room count; the cap exists so a
    /// degenerate graph fails instead of hanging.
    #[error("no exit room distinct from the start room after {attempts} attempts")]
    StairsExhausted { attempts: u32 },
}
