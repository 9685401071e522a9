use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use keel_store::ObjectKind;

#[derive(Parser)]
#[command(
    name = "keel",
    about = "keel — content-addressable object database",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a new, empty repository
    Init(InitArgs),
    /// Provide content of a repository object
    CatFile(CatFileArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Where to create the repository
    #[arg(value_name = "directory")]
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct CatFileArgs {
    /// Expected object type
    #[arg(value_name = "type")]
    pub kind: CatKind,
    /// Hex id of the object to display
    pub object: String,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum CatKind {
    Blob,
    Commit,
    Tag,
    Tree,
}

impl From<CatKind> for ObjectKind {
    fn from(kind: CatKind) -> Self {
        match kind {
            CatKind::Blob => ObjectKind::Blob,
            CatKind::Commit => ObjectKind::Commit,
            CatKind::Tag => ObjectKind::Tag,
            CatKind::Tree => ObjectKind::Tree,
        }
    }
}
