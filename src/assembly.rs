use crate::clips::ClipTable;
use crate::consts::TIPS_PER_RACK;
use crate::design::Construct;
use crate::error::{ClipForgeError, ClipResult};
use crate::plate::{nth_well, WellAddress};
use crate::reducer::{reduce_batch, ReactionTriple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Pooling instruction for one construct: which CLIP wells go into its target well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalAssembly {
    pub construct_index: usize,
    pub name: String,
    pub target_well: WellAddress,
    /// One CLIP well per triple, in construct order.
    pub sources: Vec<WellAddress>,
}

pub fn map_assemblies(constructs: &[Construct], table: &ClipTable) -> ClipResult<Vec<FinalAssembly>> {
    map_reduced(constructs, &reduce_batch(constructs), table)
}

/// Serves each reaction's consumptions in order: the n-th use (0-based) of a
/// reaction comes from its repeat well `n / K`.
pub fn map_reduced(
    constructs: &[Construct],
    reduced: &[Vec<ReactionTriple>],
    table: &ClipTable,
) -> ClipResult<Vec<FinalAssembly>> {
    let per_clip = table.assemblies_per_clip();
    let mut uses = vec![0usize; table.len()];
    let mut assemblies = Vec::with_capacity(constructs.len());

    for (construct, triples) in constructs.iter().zip(reduced) {
        let not_found = |triple: &ReactionTriple| ClipForgeError::ReactionNotFound {
            construct: construct.order_index(),
            triple: triple.clone(),
        };

        let mut sources = Vec::with_capacity(triples.len());
        for triple in triples {
            let pos = table.position(triple).ok_or_else(|| not_found(triple))?;
            let well = table.reactions()[pos]
                .well_for_use(uses[pos], per_clip)
                .ok_or_else(|| not_found(triple))?;
            uses[pos] += 1;
            sources.push(well);
        }

        let target_well = nth_well(construct.order_index() + 1)?;
        debug!(
            "Assembly {} '{}' <- {} CLIP wells",
            target_well,
            construct.name(),
            sources.len()
        );

        assemblies.push(FinalAssembly {
            construct_index: construct.order_index(),
            name: construct.name().to_string(),
            target_well,
            sources,
        });
    }

    Ok(assemblies)
}

/// Tipracks needed to pool the final assemblies: one tip per CLIP transfer plus
/// one master-mix tip per distinct assembly size.
pub fn final_assembly_tipracks<I: IntoIterator<Item = usize>>(assembly_sizes: I) -> usize {
    let mut total = 0;
    let mut sizes = BTreeSet::new();
    for n in assembly_sizes {
        total += n;
        sizes.insert(n);
    }
    (total + sizes.len()).div_ceil(TIPS_PER_RACK)
}
