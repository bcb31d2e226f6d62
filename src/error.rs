//! Error types shared by every imgr operation.
//!
//! Each variant maps to one failure class the CLI can report. All of them are
//! terminal for the current invocation; nothing is retried or rolled back.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by the library layer.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// No configuration file was found when a command needed one.
    #[error("local base is not configured ({}); run `imgr configure --local-base <dir>` first", path.display())]
    NotConfigured { path: PathBuf },

    /// The configuration file exists but could not be understood.
    #[error("invalid config {}: {message}", path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// A relative path was absolute or climbed out of the base directory.
    #[error("path must stay inside the local base: {}", .0.display())]
    OutsideBase(PathBuf),

    /// `git` ran but exited non-zero; `stderr` is passed through verbatim.
    #[error("git {command} failed: {stderr}")]
    GitCommand { command: String, stderr: String },

    /// `git` could not be started at all.
    #[error("failed to run git {command}: {source}")]
    GitSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no remote matching git@github.com:<owner>/<repo>.git found")]
    RemoteNotResolvable,

    #[error("working tree is clean, nothing to commit")]
    WorkingTreeClean,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
