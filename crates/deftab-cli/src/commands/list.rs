use deftab_core::TypeCatalog;

pub fn run() {
    print!("{}", render(&TypeCatalog::reference()));
}

/// One `ident<TAB>spelling` line per entry, in catalog order.
pub fn render(catalog: &TypeCatalog) -> String {
    let mut out = String::new();
    for entry in catalog.iter() {
        out.push_str(entry.ident);
        out.push('\t');
        out.push_str(entry.spelling);
        out.push('\n');
    }
    out
}
