use deftab_core::{TypeCatalog, generate};

use super::output_dir;

pub fn run() {
    let catalog = TypeCatalog::reference();

    match generate(&catalog, output_dir()) {
        Ok(written) => {
            for w in &written {
                tracing::info!(path = %w.path.display(), lines = w.lines, "generated");
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
