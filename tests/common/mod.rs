#![allow(dead_code)]

use clipforge::config::PlanConfig;
use clipforge::design::Construct;

/// Construct from bare names; even positions are linkers.
pub fn construct(index: usize, names: &[&str]) -> Construct {
    Construct::from_names(index, format!("c{}", index), names).unwrap()
}

/// Batch with order indices matching positions.
pub fn batch(rows: &[&[&str]]) -> Vec<Construct> {
    rows.iter()
        .enumerate()
        .map(|(i, names)| construct(i, names))
        .collect()
}

/// `n` copies of the same construct.
pub fn repeated(names: &[&str], n: usize) -> Vec<Construct> {
    (0..n).map(|i| construct(i, names)).collect()
}

/// One single-part construct per distinct part name, `n` in total.
pub fn distinct_parts(n: usize) -> Vec<Construct> {
    (0..n)
        .map(|i| {
            let part = format!("P{}", i);
            construct(i, &["L1", part.as_str(), "L2"])
        })
        .collect()
}

pub fn config_with(assemblies_per_clip: usize) -> PlanConfig {
    PlanConfig {
        assemblies_per_clip,
        ..Default::default()
    }
}
