//! One end-to-end run: load the index, read both lists, compare, write.

use std::path::PathBuf;
use tracing::info;

use crate::compare::compare;
use crate::config::Config;
use crate::error::Result;
use crate::expand::expand;
use crate::gene_list::read_gene_list;
use crate::index::SynonymIndex;
use crate::report::write_report;

/// Input and output locations for a run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub gene_info: PathBuf,
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub output: PathBuf,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub index_entries: usize,
    pub genes_a: usize,
    pub expanded_a: usize,
    pub genes_b: usize,
    pub matched_b: usize,
    pub present_b: usize,
}

/// Run the comparison. Nothing is written unless every input loads.
pub fn run(paths: &RunPaths, config: &Config) -> Result<RunSummary> {
    let index = SynonymIndex::load(&paths.gene_info, &config.reference)?;

    info!("reading gene lists");
    let set_a = read_gene_list(&paths.file_a)?;
    let set_b = read_gene_list(&paths.file_b)?;

    let expanded_a = expand(&set_a, &index);
    let comparison = compare(&index, &expanded_a, &set_b);

    write_report(&paths.output, &comparison.records, &config.output)?;

    Ok(RunSummary {
        index_entries: index.len(),
        genes_a: set_a.len(),
        expanded_a: expanded_a.len(),
        genes_b: set_b.len(),
        matched_b: comparison.matched,
        present_b: comparison.present,
    })
}
