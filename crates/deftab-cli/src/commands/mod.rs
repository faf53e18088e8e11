pub mod check;
pub mod generate;
pub mod list;

#[cfg(test)]
mod list_tests;

use std::path::Path;

/// Tables always land in the working directory.
pub(crate) fn output_dir() -> &'static Path {
    Path::new(".")
}
