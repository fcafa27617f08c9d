mod cli;
mod handlers;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use handlers::{check, render};
use shprint::printer::LineMode;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, multi_line, single_line, no_validate } => {
            let mode = if multi_line {
                Some(LineMode::MultiLine)
            } else if single_line {
                Some(LineMode::SingleLine)
            } else {
                None
            };
            render::handle_render(file, mode, no_validate, cli.config.as_deref())
        }
        Commands::Check { file } => check::handle_check(file),
        Commands::Modes { file } => render::handle_modes(file),
    }
}
