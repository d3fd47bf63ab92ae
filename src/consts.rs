// Plate geometry (SBS 96-well)
pub const PLATE_ROWS: usize = 8;
pub const PLATE_COLUMNS: usize = 12;
pub const PLATE_WELLS: usize = PLATE_ROWS * PLATE_COLUMNS;

// Tips per rack on the final assembly stage
pub const TIPS_PER_RACK: usize = 96;

// Reference defaults
pub const DEFAULT_MAX_CLIPS: usize = 48;
pub const DEFAULT_ASSEMBLIES_PER_CLIP: usize = 15;
pub const DEFAULT_CLIP_WELL_OFFSET: usize = 48;
pub const DEFAULT_MAX_CONSTRUCTS: usize = 96;
pub const DEFAULT_MAX_FINAL_ASSEMBLY_TIPRACKS: usize = 7;
pub const DEFAULT_SOURCE_DECK_POSITIONS: &str = "2,5,8,7,10,11";

// Linker overhang naming
pub const PREFIX_TAG: &str = "-P";
pub const SUFFIX_TAG: &str = "-S";
pub const UTR_LINKER_MARK: &str = "UTR";
pub const UTR_ALIAS_LEN: usize = 4;
