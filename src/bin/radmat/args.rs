use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a material library to Radiance definitions
    Render {
        /// Path to material library (JSON or JSON5)
        library: PathBuf,
        /// Write every definition on a single line
        #[arg(short, long)]
        minimal: bool,
        /// Path to save definitions to, printed when not set
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the white glow preset
    WhiteGlow {
        #[arg(short, long)]
        name: Option<String>,
        /// Print the JSON record instead of the Radiance definition
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        minimal: bool,
    },
}
