//! Combinatorial designs: each module position offers alternative parts, each part
//! may carry several sequence variants. Expansion yields every concrete construct.

use super::{Construct, Element, Role};
use crate::error::{ClipForgeError, ClipResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub sequence: Vec<u8>,
}

impl Variant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub name: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Part {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = variants;
        self
    }
}

/// One position of the design. Every option at this position shares its role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    role: Role,
    pub parts: Vec<Part>,
}

impl Module {
    pub fn new(name: impl Into<String>, role: Role, parts: Vec<Part>) -> Self {
        Self {
            name: name.into(),
            role,
            parts,
        }
    }

    /// A linker position holding a single linker.
    pub fn linker(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), Role::Linker, vec![Part::new(name)])
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Concrete elements this position can contribute, in declaration order.
    /// A part without variants stands for itself.
    fn leaves(&self) -> Vec<Element> {
        let mut out = Vec::new();
        for part in &self.parts {
            if part.variants.is_empty() {
                out.push(Element::new(part.name.clone(), self.role));
            } else {
                for v in &part.variants {
                    out.push(Element::new(v.name.clone(), self.role).with_sequence(v.sequence.clone()));
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    pub name: String,
    pub modules: Vec<Module>,
}

impl Design {
    pub fn new(name: impl Into<String>, modules: Vec<Module>) -> Self {
        Self {
            name: name.into(),
            modules,
        }
    }

    /// Number of concrete constructs `expand` would produce.
    pub fn variant_count(&self) -> usize {
        if self.modules.is_empty() {
            return 0;
        }
        self.modules
            .iter()
            .map(|m| m.leaves().len())
            .fold(1usize, |acc, n| acc.saturating_mul(n))
    }

    /// Flattens the tree into linear constructs, the first module varying slowest.
    /// Order indices start at `first_index` and follow expansion order.
    pub fn expand(&self, first_index: usize) -> ClipResult<Vec<Construct>> {
        if self.modules.is_empty() {
            return Err(ClipForgeError::malformed(
                first_index,
                format!("design '{}' has no modules", self.name),
            ));
        }

        let mut options = Vec::with_capacity(self.modules.len());
        for module in &self.modules {
            let leaves = module.leaves();
            if leaves.is_empty() {
                return Err(ClipForgeError::malformed(
                    first_index,
                    format!("module '{}' of design '{}' offers no parts", module.name, self.name),
                ));
            }
            options.push(leaves);
        }

        options
            .iter()
            .map(|leaves| leaves.iter().cloned())
            .multi_cartesian_product()
            .enumerate()
            .map(|(n, elements)| {
                Construct::new(first_index + n, format!("{}-{}", self.name, n + 1), elements)
            })
            .collect()
    }
}
