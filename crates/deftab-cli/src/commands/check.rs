use deftab_core::{Stale, TypeCatalog, check};

use super::output_dir;

pub fn run() {
    let catalog = TypeCatalog::reference();

    let stale = check(&catalog, output_dir()).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    // Silent on success (like cargo check)
    if stale.is_empty() {
        return;
    }

    eprint!("{}", render_stale(&stale));
    eprintln!();
    eprintln!("Run 'deftab' to regenerate.");
    std::process::exit(1);
}

pub fn render_stale(stale: &[Stale]) -> String {
    let mut out = String::new();
    for s in stale {
        out.push_str(&format!(
            "stale: {} ({})\n",
            s.path.display(),
            s.reason.as_str()
        ));
    }
    out
}
