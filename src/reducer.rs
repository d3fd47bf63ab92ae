use crate::consts::{PREFIX_TAG, SUFFIX_TAG, UTR_ALIAS_LEN, UTR_LINKER_MARK};
use crate::design::Construct;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The (prefix linker, part, suffix linker) combination ligated in one CLIP reaction.
/// Two triples with the same names are the same physical reaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReactionTriple {
    pub prefix: String,
    pub part: String,
    pub suffix: String,
}

impl ReactionTriple {
    pub fn new(
        prefix: impl Into<String>,
        part: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            part: part.into(),
            suffix: suffix.into(),
        }
    }
}

impl fmt::Display for ReactionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.prefix, self.part, self.suffix)
    }
}

/// Prefix overhang name of a linker.
pub fn prefix_name(linker: &str) -> String {
    format!("{}{}", linker, PREFIX_TAG)
}

/// Suffix overhang name of a linker. UTR linkers use a fixed four-character alias.
pub fn interrogate_suffix(linker: &str) -> String {
    if linker.starts_with(UTR_LINKER_MARK) && linker.chars().count() >= UTR_ALIAS_LEN {
        let alias: String = linker.chars().take(UTR_ALIAS_LEN).collect();
        format!("{}{}", alias, SUFFIX_TAG)
    } else {
        format!("{}{}", linker, SUFFIX_TAG)
    }
}

/// One triple per part, in part order. The last part closes the circle onto the
/// construct's first linker.
pub fn reduce(construct: &Construct) -> Vec<ReactionTriple> {
    let elements = construct.flatten();
    let last_part = construct.parts().last().map(|(pos, _)| pos);

    construct
        .parts()
        .map(|(pos, part)| {
            let prefix = &elements[pos - 1];
            let suffix = if Some(pos) == last_part {
                &elements[0]
            } else {
                &elements[pos + 1]
            };
            ReactionTriple::new(
                prefix_name(prefix.name()),
                part.name(),
                interrogate_suffix(suffix.name()),
            )
        })
        .collect()
}

/// Reduces a whole batch. Runs in parallel; output order matches input order.
pub fn reduce_batch(constructs: &[Construct]) -> Vec<Vec<ReactionTriple>> {
    constructs.par_iter().map(reduce).collect()
}
