use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{ContentKind, ListArgs, LogoArgs, ServeArgs};

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio site served from flat JSON files", version)]
pub struct Cli {
    /// TOML config file. Defaults to `./folio.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding `projects/`, `certificates/` and `profile.json`.
    #[arg(long, global = true)]
    pub data_root: Option<PathBuf>,

    /// Directory holding `images/`.
    #[arg(long, global = true)]
    pub static_root: Option<PathBuf>,

    /// Increase log output (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the content and image directories.
    Init,
    /// Serve the site over HTTP.
    Serve(ServeArgs),
    /// Print projects or certificates as JSON, newest first.
    List(ListArgs),
    /// Print the profile as JSON.
    Profile,
    /// Print the logo URL for each technology name.
    Logo(LogoArgs),
}
