use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use keel_repo::Repository;
use keel_store::{FsObjectStore, ObjectKind, ObjectStore};
use keel_types::ObjectId;

use crate::cli::{CatFileArgs, Cli, Command, InitArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => cmd_init(args),
        Command::CatFile(args) => cmd_cat_file(args),
    }
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let repo = Repository::create(&path)?;
    println!(
        "{} Initialized empty keel repository in {}",
        "✓".green().bold(),
        repo.meta_dir().display().to_string().bold()
    );
    Ok(())
}

fn cmd_cat_file(args: CatFileArgs) -> anyhow::Result<()> {
    let repo = Repository::discover(Path::new("."), true)?
        .context("no keel repository found")?;
    let id = ObjectId::from_hex(&args.object)
        .with_context(|| format!("invalid object id '{}'", args.object))?;

    let object = FsObjectStore::new(&repo).read(&id)?;
    let expected: ObjectKind = args.kind.into();
    anyhow::ensure!(
        object.kind() == expected,
        "object {} is a {}, not a {}",
        id.short_hex(),
        object.kind(),
        expected
    );

    io::stdout().write_all(object.payload())?;
    Ok(())
}
