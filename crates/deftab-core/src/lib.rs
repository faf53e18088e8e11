#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Generation of `.def` macro-expansion tables over a fixed catalog of
//! primitive numeric types.
//!
//! - `catalog` - the ordered, immutable set of type entries
//! - `table` - row enumeration and line rendering for each table kind
//! - `output` - writing tables to disk and checking them for staleness

pub mod catalog;
pub mod output;
pub mod table;

#[cfg(test)]
mod catalog_tests;

use std::path::PathBuf;

pub use catalog::{TypeCatalog, TypeEntry};
pub use output::{Stale, StaleReason, Written, check, generate};
pub use table::{MACRO_NAME, TableKind, render_table, write_table};

/// Errors produced while building a catalog or writing tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two catalog entries share the same identifier.
    #[error("duplicate type identifier `{0}` in catalog")]
    DuplicateIdentifier(String),

    /// Opening, writing, flushing or reading a table file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
