//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: merge translation files and emit per-language dictionaries
//! - `init`: initialize a lingot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Directory with one subdirectory per language (overrides config file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output path template containing %lang (overrides config file)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path for the generated type declarations (overrides config file)
    #[arg(long)]
    pub declarations: Option<PathBuf>,

    /// Source language whose keys define the canonical set (overrides config file)
    #[arg(short, long)]
    pub source: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge each language's translation files and write the flattened dictionaries
    Generate(GenerateArgs),
    /// Initialize a new .lingotrc.json configuration file
    Init,
}
