//! Comparator — resolves each list-B gene to its equivalence class and tests
//! the class against the expanded list A.
//!
//! A gene's equivalence class is the first index entry (in reference-table
//! order) that mentions it, key and synonyms together. Genes mentioned by
//! several entries are resolved by that first entry only; classes are never
//! merged. A gene the index does not know is its own class.

use tracing::{debug, info};

use crate::expand::ExpandedSet;
use crate::index::SynonymIndex;
use crate::report::ResultRecord;
use crate::types::{GeneName, GeneSet};

/// Comparator output: one record per list-B gene, plus tallies for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub records: Vec<ResultRecord>,
    /// List-B genes found in the index as a key or a synonym.
    pub matched: usize,
    /// Records with `present_in_a` set.
    pub present: usize,
}

impl Comparison {
    pub fn total(&self) -> usize {
        self.records.len()
    }
}

/// Compare every gene of `set_b` against `expanded_a`, in `set_b` order.
pub fn compare(index: &SynonymIndex, expanded_a: &ExpandedSet, set_b: &GeneSet) -> Comparison {
    let mut comparison = Comparison {
        records: Vec::with_capacity(set_b.len()),
        ..Comparison::default()
    };

    for gene in set_b {
        let (record, matched) = resolve(index, expanded_a, gene);
        comparison.matched += usize::from(matched);
        comparison.present += usize::from(record.present_in_a);
        comparison.records.push(record);
    }

    info!(
        total = comparison.total(),
        matched = comparison.matched,
        present = comparison.present,
        "comparison finished"
    );
    comparison
}

/// The record for `gene`, and whether the index knew it.
fn resolve(index: &SynonymIndex, expanded_a: &ExpandedSet, gene: &GeneName) -> (ResultRecord, bool) {
    let Some((canon, synonyms)) = index.find(gene) else {
        debug!(gene = %gene, "not in reference table");
        let record = ResultRecord {
            gene: gene.clone(),
            synonyms: Vec::new(),
            present_in_a: expanded_a.contains(gene),
        };
        return (record, false);
    };

    let present_in_a = expanded_a.contains(canon) || synonyms.iter().any(|s| expanded_a.contains(s));

    let mut class: Vec<GeneName> = std::iter::once(canon)
        .chain(synonyms.iter())
        .filter(|name| *name != gene)
        .cloned()
        .collect();
    class.sort();
    class.dedup();

    let record = ResultRecord {
        gene: gene.clone(),
        synonyms: class,
        present_in_a,
    };
    (record, true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
