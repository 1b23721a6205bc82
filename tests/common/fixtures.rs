//! Static reference tables and gene lists used across harnesses.

/// An NCBI-shaped `gene_info` excerpt (human), with the extra columns real
/// files carry and a `-` placeholder in one synonym cell.
pub const GENE_INFO_HUMAN: &str = "\
#tax_id\tGeneID\tSymbol\tLocusTag\tSynonyms\tdbXrefs\tchromosome\tdescription
9606\t7157\tTP53\t-\tBCC7|BMFS5|LFS1|P53|TRP53\tMIM:191170\t17\ttumor protein p53
9606\t672\tBRCA1\t-\tBRCAI|BRCC1|FANCS|IRIS|PNCA4|PPP1R53|PSCP|RNF53\tMIM:113705\t17\tBRCA1 DNA repair associated
9606\t675\tBRCA2\t-\tBRCC2|FACD|FAD|FAD1|FANCD|FANCD1|XRCC11\tMIM:600185\t13\tBRCA2 DNA repair associated
9606\t3845\tKRAS\t-\tC-K-RAS|K-RAS2A|K-RAS2B|KI-RAS|KRAS1|KRAS2|NS|NS3|RASK2\tMIM:190070\t12\tKRAS proto-oncogene, GTPase
9606\t4609\tMYC\t-\t-\tMIM:190080\t8\tMYC proto-oncogene, bHLH transcription factor
9606\t1956\tEGFR\t-\tERBB|ERBB1|HER1|NISBD2|PIG61|mENA\tMIM:131550\t7\tepidermal growth factor receptor
";

/// Minimal two-column table from the worked examples.
pub const GENE_INFO_MINIMAL: &str = "\
Symbol\tSynonyms
tp53\tp53|trp53
brca1\t
foo\tbar|baz
";

/// A table whose required columns are spelled differently.
pub const GENE_INFO_WRONG_COLUMNS: &str = "\
symbol\taliases
TP53\tP53
";

pub const LIST_A: &str = "p53\nBRCA2\n\nERBB1\n";
pub const LIST_B: &str = "TP53\n  brca1 \nKRAS\nher1\nnotagene\ntp53\n";
