//! Evalgate CLI: the `evalgate` command.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            repo_root,
            require_tool,
        } => commands::check::run(repo_root, require_tool),
    }
}
