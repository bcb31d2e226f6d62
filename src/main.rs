//! # imgr
//!
//! **imgr** keeps an image collection in a git working tree and hands out
//! public raw-content URLs for it.
//!
//! Features:
//! - `imgr configure --local-base <dir>` remembers the working tree in `~/.imgr.json`
//! - `imgr mkdir <name>` creates a folder inside it
//! - `imgr add <src> <dst>` copies an image in
//! - `imgr ls [<path>]` lists a folder
//! - `imgr show [<path>]` prints raw URLs, flagged by reachability
//! - `imgr push --message <text>` commits everything and pushes to `origin/master`
//! - `imgr base` prints the configured local base
//!
//! This CLI is built with [clap](https://docs.rs/clap).

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgr::{
    ConfigStore, Settings, cmd_add, cmd_base, cmd_configure, cmd_ls, cmd_mkdir, cmd_push,
    cmd_show,
};
use std::path::PathBuf;

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "imgr",
    version,
    about = "imgr - image hosting on top of a git repository",
    arg_required_else_help = true
)]
struct Cli {
    /// Print debug logs (git invocations, probe results) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Set the local directory used for image hosting. Must be a git working tree.
    Configure {
        #[arg(long = "local-base", value_name = "DIR")]
        local_base: PathBuf,
    },
    /// Create a directory under the local base
    Mkdir { name: PathBuf },
    /// Copy an image into the local base
    Add {
        src: PathBuf,
        dst: PathBuf,
        /// Overwrite the destination if it already exists
        #[arg(short, long)]
        force: bool,
    },
    /// Commit all changes and push them to origin/master
    Push {
        #[arg(short, long)]
        message: String,
    },
    /// Print raw-content URLs for a file or the files of a directory
    Show { path: Option<PathBuf> },
    /// List a directory under the local base
    Ls { path: Option<PathBuf> },
    /// Print the configured local base
    Base,
}

/// Set up `env_logger`: `warn` by default, `debug` for imgr with `-v`,
/// `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default = if verbose { "imgr=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Load the configuration once and fail if it is absent.
fn settings(store: &ConfigStore) -> Result<Settings> {
    let loaded = store.load()?;
    if let Some(s) = &loaded {
        log::info!("Using local base: {}", s.local_base.display());
    }
    Ok(store.require_configured(loaded.as_ref())?.clone())
}

/// CLI entry point.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let store = ConfigStore::from_env();
    log::debug!("config file: {}", store.path().display());

    match cli.cmd {
        Cmd::Configure { local_base } => cmd_configure(&store, &local_base),
        Cmd::Mkdir { name } => cmd_mkdir(&settings(&store)?, &name),
        Cmd::Add { src, dst, force } => cmd_add(&settings(&store)?, &src, &dst, force),
        Cmd::Push { message } => cmd_push(&settings(&store)?, &message),
        Cmd::Show { path } => cmd_show(&settings(&store)?, &path.unwrap_or_default()),
        Cmd::Ls { path } => cmd_ls(&settings(&store)?, &path.unwrap_or_default()),
        Cmd::Base => cmd_base(&settings(&store)?),
    }
}
