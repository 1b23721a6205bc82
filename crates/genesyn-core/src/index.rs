//! Synonym index — canonical gene symbol to synonym set, loaded from a
//! delimited reference table such as NCBI `gene_info`.
//!
//! Entries keep reference-table order. When a symbol appears on several
//! rows the last row's synonyms win but the entry keeps the position of the
//! first row. [`SynonymIndex::find`] resolves a name to the first entry, in
//! that order, that mentions it as a key or a synonym.

use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::ReferenceConfig;
use crate::error::{Error, Result};
use crate::types::GeneName;

/// Synonyms listed under one canonical symbol.
pub type Synonyms = BTreeSet<GeneName>;

#[derive(Debug, Clone, Default)]
pub struct SynonymIndex {
    entries: IndexMap<GeneName, Synonyms>,
    /// Every name (key or synonym) mapped to the position of the first entry
    /// that mentions it.
    owners: HashMap<GeneName, usize>,
    duplicates: usize,
}

impl SynonymIndex {
    /// Open `path` and build the index from it.
    pub fn load(path: &Path, settings: &ReferenceConfig) -> Result<Self> {
        info!(path = %path.display(), "loading reference table");
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let index = Self::from_reader(file, path, settings)?;

        info!(
            entries = index.len(),
            names = index.owners.len(),
            "synonym index ready"
        );
        if index.duplicates > 0 {
            warn!(
                duplicates = index.duplicates,
                "reference table repeats canonical symbols; the last row for each wins"
            );
        }
        Ok(index)
    }

    /// Build the index from any reader. `origin` is only used in errors.
    pub fn from_reader<R: Read>(reader: R, origin: &Path, settings: &ReferenceConfig) -> Result<Self> {
        let table_err = |source| Error::Table {
            path: origin.to_path_buf(),
            source,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(settings.delimiter_byte()?)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(table_err)?.clone();
        let col_idx = |name: &str| headers.iter().position(|h| h.trim() == name);

        let symbol_idx = col_idx(&settings.symbol_column);
        let synonyms_idx = col_idx(&settings.synonyms_column);
        let (symbol_idx, synonyms_idx) = match (symbol_idx, synonyms_idx) {
            (Some(sym), Some(syn)) => (sym, syn),
            (sym, syn) => {
                let missing = [
                    (sym, &settings.symbol_column),
                    (syn, &settings.synonyms_column),
                ]
                .into_iter()
                .filter(|(idx, _)| idx.is_none())
                .map(|(_, name)| name.clone())
                .collect();
                return Err(Error::MissingColumns {
                    path: origin.to_path_buf(),
                    missing,
                });
            }
        };

        let mut builder = IndexBuilder::new(settings.synonym_separator, settings.placeholder.clone());
        for record in rdr.records() {
            let record = record.map_err(table_err)?;
            builder.push_row(
                record.get(symbol_idx).unwrap_or(""),
                record.get(synonyms_idx).unwrap_or(""),
            );
        }

        if builder.skipped > 0 {
            warn!(rows = builder.skipped, "skipped reference rows with an empty symbol");
        }
        Ok(builder.finish())
    }

    /// Build an index from `(symbol, synonym cell)` pairs using the default
    /// `|` separator.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let settings = ReferenceConfig::default();
        let mut builder = IndexBuilder::new(settings.synonym_separator, settings.placeholder);
        for (symbol, synonyms) in rows {
            builder.push_row(symbol, synonyms);
        }
        builder.finish()
    }

    /// Synonyms of `gene` when it is a canonical symbol.
    pub fn get(&self, gene: &GeneName) -> Option<&Synonyms> {
        self.entries.get(gene)
    }

    /// First entry in table order whose key equals `gene` or whose synonyms
    /// contain it.
    pub fn find(&self, gene: &GeneName) -> Option<(&GeneName, &Synonyms)> {
        self.owners
            .get(gene)
            .and_then(|&pos| self.entries.get_index(pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows that replaced an earlier row with the same symbol.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GeneName, &Synonyms)> {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

struct IndexBuilder {
    entries: IndexMap<GeneName, Synonyms>,
    separator: char,
    placeholder: Option<GeneName>,
    duplicates: usize,
    skipped: usize,
}

impl IndexBuilder {
    fn new(separator: char, placeholder: Option<String>) -> Self {
        Self {
            entries: IndexMap::new(),
            separator,
            placeholder: placeholder.as_deref().map(GeneName::new),
            duplicates: 0,
            skipped: 0,
        }
    }

    fn push_row(&mut self, symbol: &str, synonyms: &str) {
        let key = GeneName::new(symbol);
        if key.is_empty() {
            debug!(synonyms, "reference row has no symbol");
            self.skipped += 1;
            return;
        }

        let synonyms: Synonyms = synonyms
            .split(self.separator)
            .map(GeneName::new)
            .filter(|syn| !syn.is_empty() && Some(syn) != self.placeholder.as_ref())
            .collect();

        if self.entries.insert(key, synonyms).is_some() {
            self.duplicates += 1;
        }
    }

    fn finish(self) -> SynonymIndex {
        let mut owners = HashMap::new();
        for (pos, (key, synonyms)) in self.entries.iter().enumerate() {
            owners.entry(key.clone()).or_insert(pos);
            for syn in synonyms {
                owners.entry(syn.clone()).or_insert(pos);
            }
        }
        SynonymIndex {
            entries: self.entries,
            owners,
            duplicates: self.duplicates,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
