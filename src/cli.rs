use crate::format::DEFAULT_SEPARATOR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "topo")]
#[command(about = "Dependency ordering for edge lists")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a topological order of the edge list
    Sort {
        /// Edge list file (reads stdin when omitted or `-`)
        file: Option<PathBuf>,
        /// Emit a JSON document instead of a single line
        #[arg(long)]
        json: bool,
        /// Separator between nodes in text output
        #[arg(long, default_value = DEFAULT_SEPARATOR)]
        separator: String,
    },

    /// Check that the edge list has no cycle
    Check {
        /// Edge list file (reads stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
}
