//! Floor-threshold tables.
//!
//! Difficulty and content scale with depth through step-function tables:
//! ordered (minimum floor, value) pairs where the largest threshold at or
//! below the queried floor wins. One plain-value form covers the
//! complexity factor and the per-room monster/item caps; a weighted form
//! covers spawn selection.

use crate::entity::EntityKind;
use crate::rng::GameRng;

/// Step-function lookup over (minimum floor, value) pairs.
#[derive(Debug, Clone)]
pub struct StepTable {
    /// Ascending by threshold.
    entries: Vec<(u32, u32)>,
}

impl StepTable {
    /// Build a table. Entries are sorted by threshold.
    pub fn new(mut entries: Vec<(u32, u32)>) -> Self {
        entries.sort_by_key(|&(threshold, _)| threshold);
        Self { entries }
    }

    /// Value for the largest threshold at or below `floor`; 0 if the floor
    /// is below every threshold.
    pub fn value_for(&self, floor: u32) -> u32 {
        self.entries
            .iter()
            .rev()
            .find(|&&(threshold, _)| floor >= threshold)
            .map(|&(_, value)| value)
            .unwrap_or(0)
    }
}

/// Weighted spawn selection scaled by floor.
///
/// Each threshold introduces or re-weights entries; for a given floor, all
/// thresholds at or below it apply in ascending order, the latest weight
/// per entity winning. Deeper floors can therefore make an existing monster
/// more common without retiring the rest of the table.
#[derive(Debug, Clone)]
pub struct SpawnTable {
    /// Ascending by threshold.
    entries: Vec<(u32, Vec<(EntityKind, u32)>)>,
}

impl SpawnTable {
    /// Build a table. Entries are sorted by threshold.
    pub fn new(mut entries: Vec<(u32, Vec<(EntityKind, u32)>)>) -> Self {
        entries.sort_by_key(|&(threshold, _)| threshold);
        Self { entries }
    }

    /// Effective (entity, weight) list for a floor, in first-introduction
    /// order.
    pub fn weights_for(&self, floor: u32) -> Vec<(EntityKind, u32)> {
        let mut weights: Vec<(EntityKind, u32)> = Vec::new();
        for (threshold, overrides) in &self.entries {
            if *threshold > floor {
                break;
            }
            for &(kind, weight) in overrides {
                match weights.iter_mut().find(|(k, _)| *k == kind) {
                    Some(entry) => entry.1 = weight,
                    None => weights.push((kind, weight)),
                }
            }
        }
        weights
    }

    /// Pick `count` entities (with replacement) weighted for the floor.
    /// Yields nothing if the floor is below every threshold or all weights
    /// are zero.
    pub fn pick(&self, count: usize, floor: u32, rng: &mut GameRng) -> Vec<EntityKind> {
        let weights = self.weights_for(floor);
        let total: u32 = weights.iter().map(|&(_, w)| w).sum();
        if total == 0 {
            return Vec::new();
        }

        let mut chosen = Vec::with_capacity(count);
        for _ in 0..count {
            let mut roll = rng.rn2(total);
            let mut picked = weights[weights.len() - 1].0;
            for &(kind, weight) in &weights {
                if roll < weight {
                    picked = kind;
                    break;
                }
                roll -= weight;
            }
            chosen.push(picked);
        }
        chosen
    }
}
