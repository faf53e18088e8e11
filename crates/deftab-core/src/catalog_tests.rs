use crate::Error;
use crate::catalog::{TypeCatalog, TypeEntry};

#[test]
fn reference_has_fourteen_entries() {
    let catalog = TypeCatalog::reference();

    assert_eq!(catalog.len(), 14);
    assert!(!catalog.is_empty());
}

#[test]
fn reference_order() {
    let catalog = TypeCatalog::reference();
    let idents: Vec<_> = catalog.iter().map(|e| e.ident).collect();

    assert_eq!(
        idents,
        [
            "DataType::CHAR",
            "DataType::SHORT",
            "DataType::INT",
            "DataType::LONG",
            "DataType::LONGLONG",
            "DataType::FLOAT",
            "DataType::DOUBLE",
            "DataType::LONGDOUBLE",
            "DataType::UCHAR",
            "DataType::USHORT",
            "DataType::UINT",
            "DataType::ULONG",
            "DataType::ULONGLONG",
            "DataType::SCHAR",
        ]
    );
}

#[test]
fn reference_spellings_keep_spaces() {
    let catalog = TypeCatalog::reference();

    assert_eq!(
        catalog.get("DataType::ULONGLONG").map(|e| e.spelling),
        Some("unsigned long long")
    );
    assert_eq!(
        catalog.get("DataType::SCHAR").map(|e| e.spelling),
        Some("signed char")
    );
}

#[test]
fn reference_matches_from_pairs() {
    let rebuilt = TypeCatalog::from_pairs(
        TypeCatalog::reference()
            .iter()
            .map(|e| (e.ident.to_owned(), e.spelling.to_owned()))
            .collect::<Vec<_>>(),
    )
    .unwrap();

    assert_eq!(rebuilt, TypeCatalog::reference());
}

#[test]
fn from_pairs_keeps_order() {
    let catalog = TypeCatalog::from_pairs([("B", "b"), ("A", "a"), ("C", "c")]).unwrap();

    assert_eq!(catalog.position("B"), Some(0));
    assert_eq!(catalog.position("A"), Some(1));
    assert_eq!(catalog.position("C"), Some(2));
    assert_eq!(
        catalog.entry(1),
        Some(TypeEntry {
            ident: "A",
            spelling: "a"
        })
    );
}

#[test]
fn from_pairs_rejects_duplicate_ident() {
    let err = TypeCatalog::from_pairs([("A", "a"), ("B", "b"), ("A", "other")]).unwrap_err();

    assert!(matches!(err, Error::DuplicateIdentifier(ref id) if id == "A"));
    assert_eq!(err.to_string(), "duplicate type identifier `A` in catalog");
}

#[test]
fn same_spelling_different_ident_is_allowed() {
    let catalog = TypeCatalog::from_pairs([("A", "int"), ("B", "int")]).unwrap();

    assert_eq!(catalog.len(), 2);
}

#[test]
fn lookups_miss_on_unknown_ident() {
    let catalog = TypeCatalog::reference();

    assert_eq!(catalog.get("DataType::BOOL"), None);
    assert_eq!(catalog.position("DataType::BOOL"), None);
    assert_eq!(catalog.entry(14), None);
}

#[test]
fn empty_catalog() {
    let catalog = TypeCatalog::from_pairs(Vec::<(String, String)>::new()).unwrap();

    assert!(catalog.is_empty());
    assert_eq!(catalog.iter().count(), 0);
}
