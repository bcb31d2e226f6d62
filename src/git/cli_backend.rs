use std::path::PathBuf;
use std::process::Command;

use super::Vcs;
use super::remote::{BRANCH, REMOTE};
use crate::error::{Error, Result};

/// [`Vcs`] backed by the system `git` binary.
///
/// Every call runs `git` with the base directory as working directory and
/// blocks until it exits. There is no timeout. Using the system binary means
/// SSH keys, credential helpers and `~/.gitconfig` apply as usual.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run `git <args>` and return trimmed-right stdout.
    ///
    /// # Errors
    /// - `GitSpawn` if `git` cannot be executed.
    /// - `GitCommand` carrying stderr verbatim on a non-zero exit.
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        log::debug!("+ git {} (in {})", command, self.workdir.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| Error::GitSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            // some commands (commit with nothing staged) only talk on stdout
            let stderr = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(Error::GitCommand { command, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .trim_end()
            .to_string())
    }
}

impl Vcs for GitCli {
    fn status_is_clean(&self) -> Result<bool> {
        Ok(self.run(&["status", "--porcelain=v1"])?.trim().is_empty())
    }

    fn stage_all(&self) -> Result<()> {
        self.run(&["add", "."]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<String> {
        self.run(&["commit", "-m", message])
    }

    fn push(&self) -> Result<()> {
        self.run(&["push", "-u", REMOTE, BRANCH]).map(|_| ())
    }

    fn remotes(&self) -> Result<String> {
        self.run(&["remote", "-v"])
    }
}
