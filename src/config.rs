use crate::consts::*;
use crate::error::{CapacityKind, ClipForgeError, ClipResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub plan: PlanConfig,
    #[command(flatten)]
    pub sources: SourceDefinitions,
}

/// Hardware ceilings and layout offsets for one planning run.
#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanConfig {
    /// Distinct CLIP reactions that fit on the reaction plate.
    #[arg(long, default_value_t = DEFAULT_MAX_CLIPS)]
    pub max_clips: usize,

    /// Final assemblies a single CLIP well may feed (K).
    #[arg(long, default_value_t = DEFAULT_ASSEMBLIES_PER_CLIP)]
    pub assemblies_per_clip: usize,

    /// Wells reserved at the head of the reaction plate.
    #[arg(long, default_value_t = DEFAULT_CLIP_WELL_OFFSET)]
    pub clip_well_offset: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_CONSTRUCTS)]
    pub max_constructs: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_FINAL_ASSEMBLY_TIPRACKS)]
    pub max_final_assembly_tipracks: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            max_clips: DEFAULT_MAX_CLIPS,
            assemblies_per_clip: DEFAULT_ASSEMBLIES_PER_CLIP,
            clip_well_offset: DEFAULT_CLIP_WELL_OFFSET,
            max_constructs: DEFAULT_MAX_CONSTRUCTS,
            max_final_assembly_tipracks: DEFAULT_MAX_FINAL_ASSEMBLY_TIPRACKS,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceDefinitions {
    /// Deck slot for each source plate file, in the order the files are given.
    #[arg(long, default_value = DEFAULT_SOURCE_DECK_POSITIONS)]
    pub source_deck_positions: String,
}

impl Default for SourceDefinitions {
    fn default() -> Self {
        Self {
            source_deck_positions: DEFAULT_SOURCE_DECK_POSITIONS.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ClipResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays values the user typed on the command line onto a file-loaded config.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(plan.max_clips);
        update_if_present!(plan.assemblies_per_clip);
        update_if_present!(plan.clip_well_offset);
        update_if_present!(plan.max_constructs);
        update_if_present!(plan.max_final_assembly_tipracks);
        update_if_present!(sources.source_deck_positions);
    }
}

impl PlanConfig {
    pub fn limit(&self, kind: CapacityKind) -> usize {
        match kind {
            CapacityKind::Clip => self.max_clips,
            CapacityKind::Constructs => self.max_constructs,
            CapacityKind::Tipracks => self.max_final_assembly_tipracks,
        }
    }

    pub fn validate(&self) -> ClipResult<()> {
        if self.assemblies_per_clip == 0 {
            return Err(ClipForgeError::Config(
                "assemblies_per_clip must be at least 1".to_string(),
            ));
        }
        if self.max_clips == 0 {
            return Err(ClipForgeError::Config(
                "max_clips must be at least 1".to_string(),
            ));
        }
        if self.max_constructs > PLATE_WELLS {
            return Err(ClipForgeError::Config(format!(
                "max_constructs {} exceeds the {}-well final assembly plate",
                self.max_constructs, PLATE_WELLS
            )));
        }
        if self.clip_well_offset >= PLATE_WELLS {
            return Err(ClipForgeError::Config(format!(
                "clip_well_offset {} leaves no room on a {}-well plate",
                self.clip_well_offset, PLATE_WELLS
            )));
        }
        Ok(())
    }
}

impl SourceDefinitions {
    pub fn deck_positions(&self) -> Vec<String> {
        self.source_deck_positions
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
