//! Deduplication of CLIP reactions across a batch and their repeat-well layout.

use crate::config::PlanConfig;
use crate::consts::PLATE_WELLS;
use crate::design::Construct;
use crate::error::{CapacityKind, ClipForgeError, ClipResult};
use crate::plate::{WellAddress, WellAllocator};
use crate::reducer::{reduce_batch, ReactionTriple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueReaction {
    pub triple: ReactionTriple,
    /// Number of times the triple occurs across the batch.
    pub demand: usize,
    pub repeat_count: usize,
    /// One well per repeat, in allocation order.
    pub wells: Vec<WellAddress>,
}

impl UniqueReaction {
    /// Well serving the `use_index`-th (0-based) consumption of this reaction.
    pub fn well_for_use(&self, use_index: usize, assemblies_per_clip: usize) -> Option<WellAddress> {
        self.wells.get(use_index / assemblies_per_clip).copied()
    }
}

/// `demand / K + 1`: at least one repeat, and a new one each time demand reaches a multiple of K.
pub fn repeat_count(demand: usize, assemblies_per_clip: usize) -> usize {
    demand / assemblies_per_clip + 1
}

/// Unique reactions in first-occurrence order, with a lookup by triple.
#[derive(Debug, Clone)]
pub struct ClipTable {
    reactions: Vec<UniqueReaction>,
    index: HashMap<ReactionTriple, usize>,
    assemblies_per_clip: usize,
}

impl ClipTable {
    pub fn build(constructs: &[Construct], config: &PlanConfig) -> ClipResult<Self> {
        Self::from_reduced(&reduce_batch(constructs), config)
    }

    /// `reduced` holds each construct's triples, in batch order.
    pub fn from_reduced(reduced: &[Vec<ReactionTriple>], config: &PlanConfig) -> ClipResult<Self> {
        config.validate()?;

        let mut reactions: Vec<UniqueReaction> = Vec::new();
        let mut index: HashMap<ReactionTriple, usize> = HashMap::new();

        for triple in reduced.iter().flatten() {
            match index.get(triple) {
                Some(&pos) => reactions[pos].demand += 1,
                None => {
                    index.insert(triple.clone(), reactions.len());
                    reactions.push(UniqueReaction {
                        triple: triple.clone(),
                        demand: 1,
                        repeat_count: 0,
                        wells: Vec::new(),
                    });
                }
            }
        }

        let limit = config.limit(CapacityKind::Clip);
        if reactions.len() > limit {
            return Err(ClipForgeError::CapacityExceeded {
                kind: CapacityKind::Clip,
                count: reactions.len(),
                limit,
            });
        }

        for r in &mut reactions {
            r.repeat_count = repeat_count(r.demand, config.assemblies_per_clip);
        }

        let mut allocator = WellAllocator::new(config.clip_well_offset);
        let total: usize = reactions.iter().map(|r| r.repeat_count).sum();
        if total > allocator.remaining() {
            return Err(ClipForgeError::PlateOverflow {
                ordinal: config.clip_well_offset + total,
                capacity: PLATE_WELLS,
            });
        }

        for r in &mut reactions {
            r.wells = allocator.allocate_many(r.repeat_count)?;
            debug!(
                "CLIP {} demand={} repeats={} wells={:?}",
                r.triple,
                r.demand,
                r.repeat_count,
                r.wells.iter().map(|w| w.to_string()).collect::<Vec<_>>()
            );
        }

        info!(
            "Clip table: {} unique reactions over {} wells",
            reactions.len(),
            total
        );

        Ok(Self {
            reactions,
            index,
            assemblies_per_clip: config.assemblies_per_clip,
        })
    }

    pub fn get(&self, triple: &ReactionTriple) -> Option<&UniqueReaction> {
        self.index.get(triple).map(|&i| &self.reactions[i])
    }

    pub fn position(&self, triple: &ReactionTriple) -> Option<usize> {
        self.index.get(triple).copied()
    }

    pub fn reactions(&self) -> &[UniqueReaction] {
        &self.reactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UniqueReaction> {
        self.reactions.iter()
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn assemblies_per_clip(&self) -> usize {
        self.assemblies_per_clip
    }

    /// Physical CLIP wells, i.e. samples that go on to purification.
    pub fn total_wells(&self) -> usize {
        self.reactions.iter().map(|r| r.repeat_count).sum()
    }

    pub fn into_reactions(self) -> Vec<UniqueReaction> {
        self.reactions
    }
}
