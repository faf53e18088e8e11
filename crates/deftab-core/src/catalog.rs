//! The ordered catalog of primitive types driving table generation.
//!
//! Catalog order is the row and column order of every generated table, so it
//! is fixed at construction and never changes afterwards.

use indexmap::IndexMap;

use crate::{Error, Result};

/// One primitive type: its symbolic identifier and its literal spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeEntry<'a> {
    pub ident: &'a str,
    pub spelling: &'a str,
}

/// Insertion-ordered set of type entries, unique by identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    entries: IndexMap<String, String>,
}

const REFERENCE: [(&str, &str); 14] = [
    ("DataType::CHAR", "char"),
    ("DataType::SHORT", "short"),
    ("DataType::INT", "int"),
    ("DataType::LONG", "long"),
    ("DataType::LONGLONG", "long long"),
    ("DataType::FLOAT", "float"),
    ("DataType::DOUBLE", "double"),
    ("DataType::LONGDOUBLE", "long double"),
    ("DataType::UCHAR", "unsigned char"),
    ("DataType::USHORT", "unsigned short"),
    ("DataType::UINT", "unsigned int"),
    ("DataType::ULONG", "unsigned long"),
    ("DataType::ULONGLONG", "unsigned long long"),
    ("DataType::SCHAR", "signed char"),
];

impl TypeCatalog {
    /// Build a catalog from `(ident, spelling)` pairs, keeping their order.
    ///
    /// Fails on the first identifier that appears twice.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (ident, spelling) in pairs {
            let ident = ident.into();
            if entries.contains_key(&ident) {
                return Err(Error::DuplicateIdentifier(ident));
            }
            entries.insert(ident, spelling.into());
        }
        Ok(Self { entries })
    }

    /// The fourteen C numeric types, in generation order.
    pub fn reference() -> Self {
        let entries = REFERENCE
            .iter()
            .map(|&(ident, spelling)| (ident.to_owned(), spelling.to_owned()))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in catalog order.
    pub fn entry(&self, index: usize) -> Option<TypeEntry<'_>> {
        self.entries
            .get_index(index)
            .map(|(ident, spelling)| TypeEntry { ident, spelling })
    }

    pub fn get(&self, ident: &str) -> Option<TypeEntry<'_>> {
        self.entries
            .get_key_value(ident)
            .map(|(ident, spelling)| TypeEntry { ident, spelling })
    }

    pub fn position(&self, ident: &str) -> Option<usize> {
        self.entries.get_index_of(ident)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = TypeEntry<'_>> + '_ {
        self.entries
            .iter()
            .map(|(ident, spelling)| TypeEntry { ident, spelling })
    }
}
