use crate::reducer::ReactionTriple;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Hardware ceiling that a batch ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CapacityKind {
    Clip,
    Constructs,
    Tipracks,
}

#[derive(Error, Debug)]
pub enum ClipForgeError {
    #[error("Malformed construct #{index}: {reason}")]
    MalformedConstruct { index: usize, reason: String },

    #[error("Capacity exceeded ({kind}): {count} requested, limit is {limit}")]
    CapacityExceeded {
        kind: CapacityKind,
        count: usize,
        limit: usize,
    },

    #[error("Plate overflow: well ordinal {ordinal} is outside a {capacity}-well plate")]
    PlateOverflow { ordinal: usize, capacity: usize },

    #[error("Construct #{construct} needs reaction {triple}, which is missing from the clip table")]
    ReactionNotFound {
        construct: usize,
        triple: ReactionTriple,
    },

    #[error("Invalid well address '{0}'")]
    InvalidWell(String),

    #[error("No source stock listed for '{0}'")]
    MissingSource(String),

    #[error("{count} source plates supplied, only {limit} deck positions available")]
    TooManySourcePlates { count: usize, limit: usize },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl ClipForgeError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedConstruct {
            index,
            reason: reason.into(),
        }
    }
}

pub type ClipResult<T> = Result<T, ClipForgeError>;
