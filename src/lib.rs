//! Crate entry point for **imgr**.
//!
//! This library provides the internal implementation for the `imgr` CLI, a
//! small manager for an image repository kept in a git working tree and
//! served through GitHub's raw-content host.
//! Each submodule encapsulates one responsibility (config, filesystem, git,
//! reachability checks) or one subcommand.
//!
//! Nothing here holds global state: the [`Settings`] loaded at start-up are
//! passed by reference into every command.

mod assets;
mod config;
mod error;
mod git;
mod list;
mod paths;
mod probe;
mod push;
mod show;

pub use assets::{Entry, EntryKind, add_asset, cmd_add, cmd_mkdir, list_children, make_subdirectory};
pub use config::{ConfigStore, Settings, cmd_base, cmd_configure};
pub use error::{Error, Result};
pub use git::{GitCli, RawBase, Vcs, parse_push_slug};
pub use list::cmd_ls;
pub use paths::config_path;
pub use probe::Prober;
pub use push::{PushReport, cmd_push, run_push};
pub use show::{UrlStatus, cmd_show, collect_targets, resolve_urls};
