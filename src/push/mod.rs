mod progress;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::config::Settings;
use crate::error::Error;
use crate::git::{BRANCH, GitCli, REMOTE, Vcs};

use progress::{err_style, ok_style, step_spinner};

/// What a successful push did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    /// `owner/repo` the changes went to.
    pub slug: String,
    /// Stdout of `git commit`.
    pub commit_output: String,
}

/// Commit every change under the base directory and push it.
///
/// Steps, stopping at the first failure:
/// 1. the remote must resolve to a GitHub SSH URL
/// 2. the working tree must be dirty (a clean tree is an error, not a no-op)
/// 3. `git add .`
/// 4. `git commit -m <message>`
/// 5. `git push -u origin master`
///
/// Nothing is rolled back; a failed commit leaves the changes staged.
/// `pb` only receives progress messages.
pub fn run_push(vcs: &dyn Vcs, message: &str, pb: &ProgressBar) -> crate::Result<PushReport> {
    pb.set_message("resolving remote…");
    let slug = vcs.remote_push_url()?;

    pb.set_message("checking working tree…");
    if vcs.status_is_clean()? {
        return Err(Error::WorkingTreeClean);
    }

    pb.set_message("staging changes…");
    vcs.stage_all()?;

    pb.set_message("committing…");
    let commit_output = vcs.commit(message)?;

    pb.set_message(format!("pushing to {}/{} ({})…", REMOTE, BRANCH, slug));
    vcs.push()?;

    Ok(PushReport {
        slug,
        commit_output,
    })
}

/// CLI command: stage, commit and push everything in the local base.
///
/// Progress is shown as a spinner; the commit output is echoed once the
/// commit succeeds.
///
/// # Errors
/// See [`run_push`]; the spinner line shows the error before it is
/// returned.
pub fn cmd_push(settings: &Settings, message: &str) -> Result<()> {
    let vcs = GitCli::new(&settings.local_base);
    let pb = step_spinner("pushing…");

    match run_push(&vcs, message, &pb) {
        Ok(report) => {
            pb.set_style(ok_style());
            pb.finish_with_message(format!("pushed to {} ({})", report.slug, BRANCH));
            if !report.commit_output.is_empty() {
                println!("{}", report.commit_output);
            }
            Ok(())
        }
        Err(e) => {
            pb.set_style(err_style());
            pb.finish_with_message("push failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::fake::FakeVcs;

    #[test]
    fn clean_tree_fails_before_staging() {
        let vcs = FakeVcs::with_remote(true);
        let err = run_push(&vcs, "msg", &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(err, Error::WorkingTreeClean));
        assert_eq!(vcs.calls(), vec!["remote", "status"]);
    }

    #[test]
    fn unresolvable_remote_fails_first() {
        let vcs = FakeVcs {
            clean: false,
            remotes: "origin\thttps://example.com/x.git (push)\n".into(),
            ..FakeVcs::default()
        };
        let err = run_push(&vcs, "msg", &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(err, Error::RemoteNotResolvable));
        assert_eq!(vcs.calls(), vec!["remote"]);
    }

    #[test]
    fn dirty_tree_runs_full_sequence() {
        let vcs = FakeVcs::with_remote(false);
        let report = run_push(&vcs, "add cats", &ProgressBar::hidden()).unwrap();
        assert_eq!(report.slug, "alice/pics");
        assert!(report.commit_output.contains("add cats"));
        assert_eq!(
            vcs.calls(),
            vec!["remote", "status", "add", "commit add cats", "push"]
        );
    }

    #[test]
    fn failed_commit_stops_before_push() {
        let vcs = FakeVcs {
            fail_commit: true,
            ..FakeVcs::with_remote(false)
        };
        let err = run_push(&vcs, "m", &ProgressBar::hidden()).unwrap_err();
        assert!(matches!(err, Error::GitCommand { .. }));
        assert_eq!(vcs.calls(), vec!["remote", "status", "add", "commit m"]);
    }
}
