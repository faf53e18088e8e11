use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "deftab", bin_name = "deftab", version)]
#[command(about = "Generate DATATYPE_EXPAND macro tables over the primitive C types")]
#[command(after_help = r#"OUTPUT:
  DataType.def    one DATATYPE_EXPAND(id,type) line per type
  DataType2.def   one DATATYPE_EXPAND(id1,type1,id2,type2) line per ordered pair

Files are written to the current directory.

EXAMPLES:
  deftab              # (re)generate the tables
  deftab --check      # fail if the tables on disk are stale
  deftab --list       # print the type catalog"#)]
pub struct Cli {
    /// Check existing tables instead of writing them
    #[arg(long, conflicts_with = "list")]
    pub check: bool,

    /// Print the type catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Generate,
    Check,
    List,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if self.check {
            Mode::Check
        } else {
            Mode::Generate
        }
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
