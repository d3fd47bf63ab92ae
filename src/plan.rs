//! Pipeline driver: constructs → triples → clip table → assemblies.

use crate::assembly::{final_assembly_tipracks, map_reduced, FinalAssembly};
use crate::clips::{ClipTable, UniqueReaction};
use crate::config::PlanConfig;
use crate::design::{batch_from_raw, Construct, RawConstruct};
use crate::error::{CapacityKind, ClipForgeError, ClipResult};
use crate::reducer::reduce_batch;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub constructs: usize,
    pub unique_clips: usize,
    pub clip_wells: usize,
    pub final_assembly_tipracks: usize,
}

impl PlanSummary {
    /// The figure checked against `kind`'s ceiling.
    pub fn count(&self, kind: CapacityKind) -> usize {
        match kind {
            CapacityKind::Clip => self.unique_clips,
            CapacityKind::Constructs => self.constructs,
            CapacityKind::Tipracks => self.final_assembly_tipracks,
        }
    }
}

/// Everything the script-generation stages consume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssemblyPlan {
    pub unique_reactions: Vec<UniqueReaction>,
    pub final_assemblies: Vec<FinalAssembly>,
    pub summary: PlanSummary,
}

pub struct Planner {
    config: PlanConfig,
}

impl Planner {
    pub fn new(config: PlanConfig) -> ClipResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    pub fn plan_raw(&self, rows: &[RawConstruct]) -> ClipResult<AssemblyPlan> {
        let constructs = batch_from_raw(rows)?;
        self.plan(&constructs)
    }

    /// Runs the whole batch. Any failure aborts with no partial plan.
    pub fn plan(&self, constructs: &[Construct]) -> ClipResult<AssemblyPlan> {
        let cfg = &self.config;

        for (pos, c) in constructs.iter().enumerate() {
            if c.order_index() != pos {
                return Err(ClipForgeError::malformed(
                    c.order_index(),
                    format!("order index {} found at batch position {}", c.order_index(), pos),
                ));
            }
        }

        check_ceiling(cfg, CapacityKind::Constructs, constructs.len())?;

        let reduced = reduce_batch(constructs);
        info!(
            "Reduced {} constructs to {} CLIP triples",
            constructs.len(),
            reduced.iter().map(Vec::len).sum::<usize>()
        );

        let tipracks = final_assembly_tipracks(reduced.iter().map(Vec::len));
        check_ceiling(cfg, CapacityKind::Tipracks, tipracks)?;

        let table = ClipTable::from_reduced(&reduced, cfg)?;
        let final_assemblies = map_reduced(constructs, &reduced, &table)?;

        let summary = PlanSummary {
            constructs: constructs.len(),
            unique_clips: table.len(),
            clip_wells: table.total_wells(),
            final_assembly_tipracks: tipracks,
        };
        info!(
            "Plan ready: {} assemblies from {} unique CLIPs in {} wells, {} tiprack(s)",
            summary.constructs, summary.unique_clips, summary.clip_wells, summary.final_assembly_tipracks
        );

        Ok(AssemblyPlan {
            unique_reactions: table.into_reactions(),
            final_assemblies,
            summary,
        })
    }
}

fn check_ceiling(cfg: &PlanConfig, kind: CapacityKind, count: usize) -> ClipResult<()> {
    let limit = cfg.limit(kind);
    if count > limit {
        return Err(ClipForgeError::CapacityExceeded { kind, count, limit });
    }
    Ok(())
}

impl AssemblyPlan {
    pub fn to_json(&self) -> ClipResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
