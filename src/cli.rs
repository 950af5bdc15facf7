use clap::Parser;
use std::path::PathBuf;

use crate::tree::{AccessPolicy, TreeConfig};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treeline",
    version,
    about = "Print a directory hierarchy as a tree diagram",
    after_help = "Examples:\n  treeline\n  treeline -a src tests\n  treeline --on-access-denied fail /var/log"
)]
pub struct Args {
    /// Paths to render (default: current directory)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// What to do with directories that cannot be listed
    #[arg(long = "on-access-denied", value_enum, default_value_t = AccessPolicy::Mark)]
    pub on_access_denied: AccessPolicy,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Tree-building options selected on the command line.
    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            show_hidden: self.show_hidden,
            on_access_denied: self.on_access_denied,
        }
    }
}
