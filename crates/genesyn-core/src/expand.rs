//! Set expansion through the synonym index.
//!
//! Expansion only follows canonical symbol → synonyms. A gene that appears
//! in the index solely as someone else's synonym contributes itself and
//! nothing more; its canonical symbol and sibling synonyms are not pulled in.

use crate::index::SynonymIndex;
use crate::types::{GeneName, GeneSet};

/// A gene set unioned with the synonyms of its canonical members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    genes: GeneSet,
}

impl ExpandedSet {
    pub fn contains(&self, gene: &GeneName) -> bool {
        self.genes.contains(gene)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn as_set(&self) -> &GeneSet {
        &self.genes
    }

    pub fn into_set(self) -> GeneSet {
        self.genes
    }
}

/// Expand `set` with the synonyms of every member that is a canonical key in
/// `index`. Input members come first, in their original order.
pub fn expand(set: &GeneSet, index: &SynonymIndex) -> ExpandedSet {
    let mut genes = set.clone();
    for gene in set {
        if let Some(synonyms) = index.get(gene) {
            genes.extend(synonyms.iter().cloned());
        }
    }
    tracing::debug!(input = set.len(), expanded = genes.len(), "expanded gene set");
    ExpandedSet { genes }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
