//! Plain gene lists: one identifier per line, blank lines ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{GeneName, GeneSet};

/// Read the gene list at `path`.
pub fn read_gene_list(path: &Path) -> Result<GeneSet> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let genes = parse_gene_list(BufReader::new(file)).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), genes = genes.len(), "read gene list");
    Ok(genes)
}

/// Parse a gene list from any buffered reader.
pub fn parse_gene_list<R: BufRead>(reader: R) -> std::io::Result<GeneSet> {
    let mut genes = GeneSet::new();
    for line in reader.lines() {
        let gene = GeneName::new(&line?);
        if !gene.is_empty() {
            genes.insert(gene);
        }
    }
    Ok(genes)
}
