use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shprint", version, about = "Render shell syntax trees as source text")]
pub struct Cli {
    /// Config file (defaults to ./shprint.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a tree document
    #[command(visible_alias = "r")]
    Render {
        file: PathBuf,

        /// Break and indent and-or lists and compound commands
        #[arg(short = 'm', long = "multi-line", conflicts_with = "single_line")]
        multi_line: bool,

        /// Keep everything on one line
        #[arg(short = 's', long = "single-line")]
        single_line: bool,

        /// Skip structural checks before rendering
        #[arg(long = "no-validate")]
        no_validate: bool,
    },

    /// Check a tree document for structurally empty nodes
    #[command(visible_alias = "c")]
    Check { file: PathBuf },

    /// Render a tree document in both line modes
    Modes { file: PathBuf },
}
