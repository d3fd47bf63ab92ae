//! Hierarchy model: role-tagged elements and the linear constructs built from them.

pub mod combinatorial;

use crate::error::{ClipForgeError, ClipResult};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Linker,
    Part,
}

/// A named unit of a construct. The role is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    role: Role,
    #[serde(default)]
    sequence: Vec<u8>,
}

impl Element {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            sequence: Vec::new(),
        }
    }

    pub fn linker(name: impl Into<String>) -> Self {
        Self::new(name, Role::Linker)
    }

    pub fn part(name: impl Into<String>) -> Self {
        Self::new(name, Role::Part)
    }

    /// Attaches already-resolved sequence content. Never inspected by the planner.
    pub fn with_sequence(mut self, sequence: impl Into<Vec<u8>>) -> Self {
        self.sequence = sequence.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn is_linker(&self) -> bool {
        self.role == Role::Linker
    }
}

/// One row of raw input: an identifier and its element names in assembly order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConstruct {
    pub id: String,
    pub elements: Vec<String>,
}

/// One target plasmid: linker, part, linker, ... , part, linker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construct {
    order_index: usize,
    name: String,
    elements: Vec<Element>,
}

impl Construct {
    pub fn new(
        order_index: usize,
        name: impl Into<String>,
        elements: Vec<Element>,
    ) -> ClipResult<Self> {
        validate_alternation(order_index, &elements)?;
        Ok(Self {
            order_index,
            name: name.into(),
            elements,
        })
    }

    /// Builds a construct from bare names; even positions are linkers, odd positions parts.
    pub fn from_names<S: AsRef<str>>(
        order_index: usize,
        name: impl Into<String>,
        names: &[S],
    ) -> ClipResult<Self> {
        let elements = names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let n = n.as_ref().trim();
                if i % 2 == 0 {
                    Element::linker(n)
                } else {
                    Element::part(n)
                }
            })
            .collect();
        Self::new(order_index, name, elements)
    }

    pub fn order_index(&self) -> usize {
        self.order_index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elements in assembly order.
    pub fn flatten(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Parts with their 0-based position in the construct.
    pub fn parts(&self) -> impl Iterator<Item = (usize, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.role() == Role::Part)
    }

    pub fn part_count(&self) -> usize {
        self.parts().count()
    }
}

fn validate_alternation(index: usize, elements: &[Element]) -> ClipResult<()> {
    if elements.is_empty() {
        return Err(ClipForgeError::malformed(index, "construct is empty"));
    }

    if let Some(pos) = elements.iter().position(|e| e.name().trim().is_empty()) {
        return Err(ClipForgeError::malformed(
            index,
            format!("blank element name at position {}", pos + 1),
        ));
    }

    if elements.len() % 2 == 0 {
        return Err(ClipForgeError::malformed(
            index,
            format!(
                "even length {}; a construct alternates linker/part and is bounded by linkers",
                elements.len()
            ),
        ));
    }

    for pair in elements.windows(2) {
        if pair[0].role() == pair[1].role() {
            return Err(ClipForgeError::malformed(
                index,
                format!(
                    "adjacent elements '{}' and '{}' are both {}",
                    pair[0].name(),
                    pair[1].name(),
                    pair[0].role()
                ),
            ));
        }
    }

    let first = &elements[0];
    let last = &elements[elements.len() - 1];
    if !first.is_linker() {
        return Err(ClipForgeError::malformed(
            index,
            format!("starts on part '{}' instead of a linker", first.name()),
        ));
    }
    if !last.is_linker() {
        return Err(ClipForgeError::malformed(
            index,
            format!("ends on part '{}' instead of a linker", last.name()),
        ));
    }

    if elements.len() < 3 {
        return Err(ClipForgeError::malformed(index, "construct contains no part"));
    }

    Ok(())
}

/// Builds an ordered batch; each construct's order index is its row position.
/// The first malformed row aborts the whole batch.
pub fn batch_from_raw(rows: &[RawConstruct]) -> ClipResult<Vec<Construct>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| Construct::from_names(i, row.id.clone(), &row.elements))
        .collect()
}
