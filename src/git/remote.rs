use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Remote that `push` targets.
pub const REMOTE: &str = "origin";
/// The only branch imgr ever pushes or links to.
pub const BRANCH: &str = "master";
/// Host serving raw file contents of GitHub repositories.
pub const RAW_HOST: &str = "https://raw.githubusercontent.com";

/// One line of `git remote -v`, e.g.
/// `origin\tgit@github.com:owner/repo.git (push)`.
static REMOTE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\S+\s+git@github\.com:(?P<slug>[\w.-]+/[\w.-]+?)(?:\.git)?/?\s+\((?P<kind>push|fetch)\)\s*$",
    )
    .expect("remote pattern is valid")
});

/// Extract `owner/repo` from `git remote -v` output.
///
/// `(push)` lines win; a `(fetch)` line is used only when no push line
/// matches. Within a kind, the first matching line is taken.
///
/// # Errors
/// `RemoteNotResolvable` if nothing matches.
pub fn parse_push_slug(remotes: &str) -> Result<String> {
    let mut fetch = None;
    for line in remotes.lines() {
        let Some(caps) = REMOTE_LINE.captures(line.trim()) else {
            continue;
        };
        let slug = caps["slug"].to_string();
        if &caps["kind"] == "push" {
            return Ok(slug);
        }
        fetch.get_or_insert(slug);
    }
    fetch.ok_or(Error::RemoteNotResolvable)
}

/// Raw-content URL prefix for the configured repository, ending in `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBase(String);

impl RawBase {
    /// `https://raw.githubusercontent.com/<slug>/master/`
    pub fn from_slug(slug: &str) -> Self {
        Self::with_host(RAW_HOST, slug)
    }

    pub fn with_host(host: &str, slug: &str) -> Self {
        Self(format!("{}/{}/{}/", host.trim_end_matches('/'), slug, BRANCH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a path relative to the base directory.
    ///
    /// Plain concatenation: no percent-encoding. Platform separators are
    /// turned into `/`.
    pub fn join(&self, rel: &str) -> String {
        let rel = rel.replace('\\', "/");
        format!("{}{}", self.0, rel.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssh_remote_yields_raw_base() {
        let out = "origin\tgit@github.com:owner/repo.git (fetch)\n\
                   origin\tgit@github.com:owner/repo.git (push)\n";
        let slug = parse_push_slug(out).unwrap();
        assert_eq!(slug, "owner/repo");
        assert_eq!(
            RawBase::from_slug(&slug).as_str(),
            "https://raw.githubusercontent.com/owner/repo/master/"
        );
    }

    #[test]
    fn no_matching_remote_fails() {
        let out = "origin\thttps://gitlab.com/owner/repo.git (fetch)\n\
                   origin\thttps://gitlab.com/owner/repo.git (push)\n";
        assert!(matches!(
            parse_push_slug(out).unwrap_err(),
            Error::RemoteNotResolvable
        ));
        assert!(matches!(
            parse_push_slug("").unwrap_err(),
            Error::RemoteNotResolvable
        ));
    }

    #[test]
    fn push_line_preferred_over_fetch() {
        let out = "origin\tgit@github.com:me/mirror.git (fetch)\n\
                   origin\tgit@github.com:me/real.git (push)\n";
        assert_eq!(parse_push_slug(out).unwrap(), "me/real");
    }

    #[test]
    fn fetch_only_remote_is_accepted() {
        let out = "origin\tgit@github.com:me/pics.git (fetch)\n";
        assert_eq!(parse_push_slug(out).unwrap(), "me/pics");
    }

    #[test]
    fn suffix_and_dots_in_names() {
        let out = "up\tgit@github.com:some-org/my.images (push)\n";
        assert_eq!(parse_push_slug(out).unwrap(), "some-org/my.images");
    }

    #[test]
    fn join_concatenates_relative_path() {
        let base = RawBase::from_slug("o/r");
        assert_eq!(
            base.join("pets/dog 1.png"),
            "https://raw.githubusercontent.com/o/r/master/pets/dog 1.png"
        );
        assert_eq!(
            RawBase::with_host("http://127.0.0.1:9/", "o/r").join("/a.png"),
            "http://127.0.0.1:9/o/r/master/a.png"
        );
    }
}
