//! Core types for genesyn-core.
//!
//! [`GeneName`] is the only way a gene identifier enters the pipeline, so
//! every name held by an index, set or record is already normalized.
//! [`GeneSet`] is a deduplicated, insertion-ordered collection of them.

use indexmap::IndexSet;
use std::fmt;

/// A normalized, case-insensitive gene identifier.
///
/// Construction trims surrounding whitespace and lowercases the input, so
/// two `GeneName`s compare equal exactly when their normalized forms do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneName(String);

impl GeneName {
    pub fn new(raw: &str) -> Self {
        GeneName(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GeneName {
    fn from(raw: &str) -> Self {
        GeneName::new(raw)
    }
}

/// Deduplicated set of gene names. Iteration follows first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneSet {
    genes: IndexSet<GeneName>,
}

impl GeneSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a gene, returning `false` if it was already present.
    pub fn insert(&mut self, gene: GeneName) -> bool {
        self.genes.insert(gene)
    }

    pub fn contains(&self, gene: &GeneName) -> bool {
        self.genes.contains(gene)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneName> {
        self.genes.iter()
    }
}

impl FromIterator<GeneName> for GeneSet {
    fn from_iter<I: IntoIterator<Item = GeneName>>(iter: I) -> Self {
        GeneSet {
            genes: iter.into_iter().collect(),
        }
    }
}

impl Extend<GeneName> for GeneSet {
    fn extend<I: IntoIterator<Item = GeneName>>(&mut self, iter: I) {
        self.genes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a GeneSet {
    type Item = &'a GeneName;
    type IntoIter = indexmap::set::Iter<'a, GeneName>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
