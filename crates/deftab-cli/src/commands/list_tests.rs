use deftab_core::TypeCatalog;

use super::list::render;

#[test]
fn render_reference_catalog() {
    insta::assert_snapshot!(render(&TypeCatalog::reference()), @r"
    DataType::CHAR	char
    DataType::SHORT	short
    DataType::INT	int
    DataType::LONG	long
    DataType::LONGLONG	long long
    DataType::FLOAT	float
    DataType::DOUBLE	double
    DataType::LONGDOUBLE	long double
    DataType::UCHAR	unsigned char
    DataType::USHORT	unsigned short
    DataType::UINT	unsigned int
    DataType::ULONG	unsigned long
    DataType::ULONGLONG	unsigned long long
    DataType::SCHAR	signed char
    ");
}

#[test]
fn render_empty_catalog() {
    assert_eq!(render(&TypeCatalog::default()), "");
}
