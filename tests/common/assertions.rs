//! Domain-specific assertion macros for genesyn harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! gene whose verdict was wrong.

/// Assert the rendered verdict for `gene` in a [`genesyn_core::Comparison`].
///
/// ```rust
/// assert_verdict!(comparison, "tp53", "p53|trp53", true);
/// ```
#[macro_export]
macro_rules! assert_verdict {
    ($comparison:expr, $gene:expr, $synonyms:expr, $present:expr) => {{
        let comparison: &genesyn_core::Comparison = &$comparison;
        let gene = genesyn_core::GeneName::new($gene);
        match comparison.records.iter().find(|r| r.gene == gene) {
            Some(record) => pretty_assertions::assert_eq!(
                (record.synonyms_joined('|'), record.present_in_a),
                ($synonyms.to_string(), $present),
                "verdict for {:?}",
                gene.as_str()
            ),
            None => panic!(
                "assert_verdict! failed: no record for {:?}.\n  Records: {:?}",
                gene.as_str(),
                comparison
                    .records
                    .iter()
                    .map(|r| r.gene.as_str())
                    .collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a comparison produced exactly one record per list-B gene.
#[macro_export]
macro_rules! assert_one_record_per_gene {
    ($comparison:expr, $set_b:expr) => {{
        let comparison: &genesyn_core::Comparison = &$comparison;
        let set_b: &genesyn_core::GeneSet = &$set_b;
        let genes: Vec<&genesyn_core::GeneName> =
            comparison.records.iter().map(|r| &r.gene).collect();
        let expected: Vec<&genesyn_core::GeneName> = set_b.iter().collect();
        assert_eq!(
            genes, expected,
            "assert_one_record_per_gene! failed: records do not mirror list B"
        );
    }};
}
