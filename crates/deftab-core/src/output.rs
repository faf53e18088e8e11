//! Writing tables to disk and comparing existing files against a fresh render.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::catalog::TypeCatalog;
use crate::table::{TableKind, render_table, write_table};
use crate::{Error, Result};

/// A table file produced by [`generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Written {
    pub kind: TableKind,
    pub path: PathBuf,
    /// Lines written, trailer included.
    pub lines: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaleReason {
    Missing,
    Outdated,
}

impl StaleReason {
    pub fn as_str(self) -> &'static str {
        match self {
            StaleReason::Missing => "missing",
            StaleReason::Outdated => "outdated",
        }
    }
}

/// A table file whose contents do not match what [`generate`] would write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stale {
    pub kind: TableKind,
    pub path: PathBuf,
    pub reason: StaleReason,
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Write every enabled table into `dir`, overwriting existing files.
///
/// Each file is flushed and closed before the next one is opened. A failure
/// aborts the run and may leave the current file truncated.
pub fn generate(catalog: &TypeCatalog, dir: &Path) -> Result<Vec<Written>> {
    let mut written = Vec::with_capacity(TableKind::enabled().len());

    for &kind in TableKind::enabled() {
        let path = dir.join(kind.file_name());
        let file = File::create(&path).map_err(io_error(&path))?;
        let mut out = BufWriter::new(file);
        let lines = write_table(&mut out, catalog, kind).map_err(io_error(&path))?;
        out.flush().map_err(io_error(&path))?;
        drop(out);

        tracing::debug!(path = %path.display(), lines, "wrote table");
        written.push(Written { kind, path, lines });
    }

    tracing::info!(files = written.len(), entries = catalog.len(), "tables generated");
    Ok(written)
}

/// Report every enabled table in `dir` that is missing or differs from a
/// fresh render. Nothing is written.
pub fn check(catalog: &TypeCatalog, dir: &Path) -> Result<Vec<Stale>> {
    let mut stale = Vec::new();

    for &kind in TableKind::enabled() {
        let path = dir.join(kind.file_name());
        let reason = match fs::read(&path) {
            Ok(existing) if existing == render_table(catalog, kind).as_bytes() => continue,
            Ok(_) => StaleReason::Outdated,
            Err(e) if e.kind() == io::ErrorKind::NotFound => StaleReason::Missing,
            Err(e) => return Err(io_error(&path)(e)),
        };
        tracing::debug!(path = %path.display(), reason = reason.as_str(), "stale table");
        stale.push(Stale { kind, path, reason });
    }

    Ok(stale)
}
