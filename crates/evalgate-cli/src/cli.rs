use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "evalgate",
    about = "Evalgate: fail checkouts whose eval reports predate the latest skills/instructions change",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify required-model eval reports are fresh for this checkout
    Check {
        /// Directory from which repository discovery starts
        #[arg(long, default_value = ".")]
        repo_root: String,

        /// Tool that must be on PATH for gating to apply (repeatable)
        #[arg(long = "require-tool")]
        require_tool: Vec<String>,
    },
}
