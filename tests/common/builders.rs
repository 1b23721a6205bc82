//! Test builders — ergonomic constructors for reference tables, gene lists
//! and on-disk run inputs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use genesyn_core::pipeline::RunPaths;
use genesyn_core::{compare, expand, Comparison, GeneName, GeneSet, SynonymIndex};
use std::fs;
use std::path::Path;

/// Build a [`GeneSet`] from string literals.
pub fn gene_set(names: &[&str]) -> GeneSet {
    names.iter().copied().map(GeneName::new).collect()
}

// ---------------------------------------------------------------------------
// ScenarioBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one comparison scenario.
///
/// # Example
///
/// ```rust
/// let out = ScenarioBuilder::new()
///     .row("tp53", "p53|trp53")
///     .list_a(&["p53"])
///     .list_b(&["tp53"])
///     .compare();
/// ```
#[derive(Default)]
pub struct ScenarioBuilder {
    rows: Vec<(String, String)>,
    list_a: Vec<String>,
    list_b: Vec<String>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(mut self, symbol: &str, synonyms: &str) -> Self {
        self.rows.push((symbol.to_string(), synonyms.to_string()));
        self
    }

    pub fn list_a(mut self, genes: &[&str]) -> Self {
        self.list_a = genes.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn list_b(mut self, genes: &[&str]) -> Self {
        self.list_b = genes.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn index(&self) -> SynonymIndex {
        SynonymIndex::from_rows(self.rows.iter().map(|(s, y)| (s.as_str(), y.as_str())))
    }

    /// Run expansion and comparison in memory.
    pub fn compare(&self) -> Comparison {
        let index = self.index();
        let set_a: GeneSet = self.list_a.iter().map(|g| GeneName::new(g)).collect();
        let set_b: GeneSet = self.list_b.iter().map(|g| GeneName::new(g)).collect();
        compare(&index, &expand(&set_a, &index), &set_b)
    }

    /// Write the scenario into `dir` as a tab-delimited table and two lists.
    pub fn write(&self, dir: &Path) -> RunPaths {
        let mut table = String::from("Symbol\tSynonyms\n");
        for (symbol, synonyms) in &self.rows {
            table.push_str(&format!("{symbol}\t{synonyms}\n"));
        }
        write_inputs(dir, &table, &self.list_a.join("\n"), &self.list_b.join("\n"))
    }
}

/// Write raw input files into `dir` and return the paths for a run.
pub fn write_inputs(dir: &Path, gene_info: &str, list_a: &str, list_b: &str) -> RunPaths {
    let paths = RunPaths {
        gene_info: dir.join("gene_info.tsv"),
        file_a: dir.join("file_a.txt"),
        file_b: dir.join("file_b.txt"),
        output: dir.join("output.csv"),
    };
    fs::write(&paths.gene_info, gene_info).expect("write gene_info");
    fs::write(&paths.file_a, list_a).expect("write file A");
    fs::write(&paths.file_b, list_b).expect("write file B");
    paths
}
