//! Configuration types for genesyn.
//!
//! [`Config::load`] layers `~/.config/genesyn/config.toml` (when present) and
//! an optional explicit file over the built-in defaults. Unlike an
//! interactive tool, a batch run never creates the file. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in
//! tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

// Matches the column layout of NCBI `gene_info` files.
const DEFAULT_CONFIG: &str = r#"
[reference]
symbol_column     = "Symbol"
synonyms_column   = "Synonyms"
delimiter         = "\t"
synonym_separator = "|"

[output]
delimiter         = ","
synonym_separator = "|"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[reference]` section: how the synonym table is laid out.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    #[serde(default = "default_symbol_column")]
    pub symbol_column: String,
    #[serde(default = "default_synonyms_column")]
    pub synonyms_column: String,
    /// Field delimiter. Must be ASCII; [`ReferenceConfig::delimiter_byte`]
    /// rejects anything else.
    #[serde(default = "default_table_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_synonym_separator")]
    pub synonym_separator: char,
    /// Synonym cell value meaning "no synonyms" (NCBI uses `-`). Pieces equal
    /// to it are dropped. Unset by default.
    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_symbol_column() -> String { "Symbol".to_string() }
fn default_synonyms_column() -> String { "Synonyms".to_string() }
fn default_table_delimiter() -> char { '\t' }
fn default_synonym_separator() -> char { '|' }

impl ReferenceConfig {
    /// The delimiter as the single byte the csv reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        ascii_delimiter("reference.delimiter", self.delimiter)
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            symbol_column: default_symbol_column(),
            synonyms_column: default_synonyms_column(),
            delimiter: default_table_delimiter(),
            synonym_separator: default_synonym_separator(),
            placeholder: None,
        }
    }
}

/// `[output]` section: shape of the comparison report.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Field delimiter. Must be ASCII; [`OutputConfig::delimiter_byte`]
    /// rejects anything else.
    #[serde(default = "default_output_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_synonym_separator")]
    pub synonym_separator: char,
}

fn default_output_delimiter() -> char { ',' }

impl OutputConfig {
    /// The delimiter as the single byte the csv writer expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        ascii_delimiter("output.delimiter", self.delimiter)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_output_delimiter(),
            synonym_separator: default_synonym_separator(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then the user config file if it exists,
    /// then `explicit` if given. An explicit file that is missing is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(config_path().as_path()).required(false));

        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "using explicit config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let cfg: Config = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        self.reference.delimiter_byte()?;
        self.output.delimiter_byte()?;
        Ok(())
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

/// Delimiters are written and parsed as single bytes.
fn ascii_delimiter(key: &str, c: char) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| {
            config::ConfigError::Message(format!(
                "{key} must be a single ASCII character, got {c:?}"
            ))
            .into()
        })
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("genesyn")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
