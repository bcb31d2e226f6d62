//! Git integration layer.
//!
//! Commands talk to the repository only through the [`Vcs`] trait. The real
//! implementation ([`GitCli`]) shells out to the `git` binary; tests swap in
//! an in-memory fake so push sequencing can be checked without a repository.

mod cli_backend;
mod remote;

use crate::error::Result;

pub use cli_backend::GitCli;
pub use remote::{BRANCH, REMOTE, RawBase, parse_push_slug};

/// Capabilities imgr needs from version control.
pub trait Vcs {
    /// `true` when `git status --porcelain=v1` prints nothing.
    fn status_is_clean(&self) -> Result<bool>;

    /// Stage every change in the working tree.
    fn stage_all(&self) -> Result<()>;

    /// Commit staged changes. Returns the tool's stdout.
    fn commit(&self, message: &str) -> Result<String>;

    /// Push [`BRANCH`] to [`REMOTE`] with upstream tracking.
    fn push(&self) -> Result<()>;

    /// Raw output of `git remote -v`.
    fn remotes(&self) -> Result<String>;

    /// The `owner/repo` of the first GitHub SSH remote.
    ///
    /// # Errors
    /// `RemoteNotResolvable` if no remote line matches.
    fn remote_push_url(&self) -> Result<String> {
        parse_push_slug(&self.remotes()?)
    }
}
