use crate::assembly::FinalAssembly;
use crate::consts::PLATE_ROWS;
use crate::plate::WellAddress;
use serde::{Deserialize, Serialize};

/// One column-sized batch of transformations. Each assembly is spotted at the
/// same position it occupies on the final assembly plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpottingGroup {
    pub wells: Vec<WellAddress>,
    /// Parts pooled into each well, in `wells` order. Spotting volume is keyed on it.
    pub part_counts: Vec<usize>,
}

/// Splits the final assemblies, in batch order, into groups of up to one plate column.
pub fn spotting_groups(assemblies: &[FinalAssembly]) -> Vec<SpottingGroup> {
    assemblies
        .chunks(PLATE_ROWS)
        .map(|chunk| SpottingGroup {
            wells: chunk.iter().map(|a| a.target_well).collect(),
            part_counts: chunk.iter().map(|a| a.sources.len()).collect(),
        })
        .collect()
}
