//! `filedeck-cli`: inspect and validate the file catalog from a terminal.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filedeck_core::remote::{DEFAULT_BRANCH, DEFAULT_REPO, DEFAULT_USERNAME};

#[derive(Parser)]
#[command(name = "filedeck-cli", version, about = "Inspect the filedeck catalog")]
struct Cli {
    /// Catalog JSON to read instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report broken folder references and unreachable entries
    Check,
    /// List a directory the way the browser renders it
    Ls {
        /// Directory path ("" or omitted for root)
        #[arg(default_value = "")]
        path: String,
        /// Case-insensitive filter on name and description
        #[arg(long, short)]
        search: Option<String>,
        /// Print the rendered view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the whole catalog as a tree
    Tree,
    /// Print the download URL for a repository-relative path
    Url {
        path: String,
        #[arg(long, default_value = DEFAULT_USERNAME)]
        user: String,
        #[arg(long, default_value = DEFAULT_REPO)]
        repo: String,
        #[arg(long, default_value = DEFAULT_BRANCH)]
        branch: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = commands::CatalogSource::new(cli.catalog);

    match cli.command {
        Command::Check => commands::check(&source),
        Command::Ls { path, search, json } => commands::ls(&source, &path, search, json),
        Command::Tree => commands::tree(&source),
        Command::Url {
            path,
            user,
            repo,
            branch,
        } => {
            commands::url(&path, &user, &repo, &branch);
            Ok(())
        }
    }
}
