//! Macro-expansion tables: one macro invocation per row, then an `#undef`.
//!
//! A table of arity k over a catalog of N entries has N^k rows: every k-tuple
//! of entries in catalog order, with the last position varying fastest.

use std::convert::Infallible;
use std::io::{self, Write};

use crate::catalog::{TypeCatalog, TypeEntry};

/// Macro invoked by every row and undefined by the trailer.
pub const MACRO_NAME: &str = "DATATYPE_EXPAND";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// `DATATYPE_EXPAND(id,spelling)` per entry.
    Unary,
    /// `DATATYPE_EXPAND(id1,spelling1,id2,spelling2)` per ordered pair.
    Binary,
    /// Three-way cross product, six arguments per row.
    #[cfg(feature = "ternary")]
    Ternary,
}

#[cfg(not(feature = "ternary"))]
const ENABLED: &[TableKind] = &[TableKind::Unary, TableKind::Binary];

#[cfg(feature = "ternary")]
const ENABLED: &[TableKind] = &[TableKind::Unary, TableKind::Binary, TableKind::Ternary];

impl TableKind {
    /// Kinds compiled into this build, in generation order.
    pub fn enabled() -> &'static [TableKind] {
        ENABLED
    }

    pub fn arity(self) -> usize {
        match self {
            TableKind::Unary => 1,
            TableKind::Binary => 2,
            #[cfg(feature = "ternary")]
            TableKind::Ternary => 3,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::Unary => "DataType.def",
            TableKind::Binary => "DataType2.def",
            #[cfg(feature = "ternary")]
            TableKind::Ternary => "DataType3.def",
        }
    }

    /// Number of data rows for a catalog of `len` entries (trailer excluded),
    /// or `None` if it does not fit in `usize`.
    pub fn row_count(self, len: usize) -> Option<usize> {
        len.checked_pow(self.arity() as u32)
    }
}

/// Entry tuples of one table, in row order.
#[derive(Clone, Debug)]
pub(crate) struct Rows<'a> {
    entries: Vec<TypeEntry<'a>>,
    /// Catalog index per position; always below `entries.len()`.
    digits: Vec<usize>,
    done: bool,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(catalog: &'a TypeCatalog, kind: TableKind) -> Self {
        let entries: Vec<_> = catalog.iter().collect();
        Self {
            done: entries.is_empty(),
            digits: vec![0; kind.arity()],
            entries,
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = Vec<TypeEntry<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let row = self.digits.iter().map(|&d| self.entries[d]).collect();

        // Odometer step, last position fastest. Wrapping every digit ends the table.
        self.done = true;
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.entries.len() {
                self.done = false;
                break;
            }
            *digit = 0;
        }

        Some(row)
    }
}

fn push_row(line: &mut String, row: &[TypeEntry<'_>]) {
    line.push_str(MACRO_NAME);
    line.push('(');
    for (i, entry) in row.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(entry.ident);
        line.push(',');
        line.push_str(entry.spelling);
    }
    line.push_str(")\n");
}

fn push_trailer(line: &mut String) {
    line.push_str("#undef ");
    line.push_str(MACRO_NAME);
    line.push('\n');
}

/// Feed every line of a table, trailer last, to `emit`. Returns the line count.
fn emit_lines<E>(
    catalog: &TypeCatalog,
    kind: TableKind,
    mut emit: impl FnMut(&str) -> Result<(), E>,
) -> Result<usize, E> {
    let mut line = String::new();
    let mut count = 0;
    for row in Rows::new(catalog, kind) {
        line.clear();
        push_row(&mut line, &row);
        emit(&line)?;
        count += 1;
    }
    line.clear();
    push_trailer(&mut line);
    emit(&line)?;
    Ok(count + 1)
}

/// Stream a table into `out`, one line at a time. Returns the number of
/// lines written, trailer included.
pub fn write_table<W: Write>(
    mut out: W,
    catalog: &TypeCatalog,
    kind: TableKind,
) -> io::Result<usize> {
    emit_lines(catalog, kind, |line| out.write_all(line.as_bytes()))
}

/// Render a whole table in memory.
pub fn render_table(catalog: &TypeCatalog, kind: TableKind) -> String {
    let mut out = String::new();
    let Ok(_) = emit_lines::<Infallible>(catalog, kind, |line| {
        out.push_str(line);
        Ok(())
    });
    out
}
