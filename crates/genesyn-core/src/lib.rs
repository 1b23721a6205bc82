//! genesyn-core — synonym-aware gene list comparison.
//!
//! This crate exposes each pipeline stage as a public module, plus the
//! shared types used across all stages.
//!
//! # Architecture
//!
//! ```text
//! gene_info ──► SynonymIndex ─┬──► expand(list A) ──┐
//!                             │                     ▼
//!                 list B ─────┴──────────────► compare ──► report
//! ```
//!
//! Everything runs synchronously on the calling thread. Each stage produces
//! an immutable value that the next stage borrows.

pub mod compare;
pub mod config;
pub mod error;
pub mod expand;
pub mod gene_list;
pub mod index;
pub mod pipeline;
pub mod report;
pub mod types;

pub use compare::{compare, Comparison};
pub use error::{Error, Result};
pub use expand::{expand, ExpandedSet};
pub use index::SynonymIndex;
pub use report::ResultRecord;
pub use types::{GeneName, GeneSet};
