use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[command(name="pakit",version=env!("CARGO_PKG_VERSION"),about,long_about=None,propagate_version=true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "h", name = "hash", about = "Hash a file, and optionally its msix signature")]
    Hash(HashArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HashArgs {
    /// File to hash.
    pub file: PathBuf,

    /// Treat the file as an msix package and hash its signature part too.
    #[arg(short, long)]
    pub msix: bool,
}
