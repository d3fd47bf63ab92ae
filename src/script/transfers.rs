use super::inventory::{SourceInventory, StockLocation};
use crate::clips::UniqueReaction;
use crate::error::{ClipForgeError, ClipResult};
use crate::plate::WellAddress;
use crate::reducer::ReactionTriple;
use serde::{Deserialize, Serialize};

/// The three source draws that set up one physical CLIP well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipTransfer {
    pub destination: WellAddress,
    pub triple: ReactionTriple,
    pub prefix: StockLocation,
    pub part: StockLocation,
    pub suffix: StockLocation,
}

/// One transfer per reaction repeat, in allocation order.
pub fn clip_transfers<I: SourceInventory + ?Sized>(
    reactions: &[UniqueReaction],
    inventory: &I,
) -> ClipResult<Vec<ClipTransfer>> {
    let find = |name: &str| {
        inventory
            .locate(name)
            .cloned()
            .ok_or_else(|| ClipForgeError::MissingSource(name.to_string()))
    };

    let mut out = Vec::new();
    for r in reactions {
        let prefix = find(&r.triple.prefix)?;
        let part = find(&r.triple.part)?;
        let suffix = find(&r.triple.suffix)?;
        for &destination in &r.wells {
            out.push(ClipTransfer {
                destination,
                triple: r.triple.clone(),
                prefix: prefix.clone(),
                part: part.clone(),
                suffix: suffix.clone(),
            });
        }
    }
    Ok(out)
}
