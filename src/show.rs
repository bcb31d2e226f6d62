use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Component, Path};

use crate::assets::{list_children, resolve};
use crate::config::Settings;
use crate::error::Error;
use crate::git::{GitCli, RawBase, Vcs};
use crate::probe::Prober;

/// A composed raw-content URL and whether it answered `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlStatus {
    pub url: String,
    pub reachable: bool,
}

/// Render a relative path with `/` separators, dropping `.` segments.
fn rel_string(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Relative paths of the files `show` reports for `rel`.
///
/// - A file target yields itself, hidden or not.
/// - A directory target yields its direct, non-hidden file children;
///   subdirectories are not descended into.
///
/// # Errors
/// `NotFound` if the target does not exist, `OutsideBase` if it escapes the
/// base directory.
pub fn collect_targets(settings: &Settings, rel: &Path) -> crate::Result<Vec<String>> {
    let abs = resolve(&settings.local_base, rel)?;
    let prefix = rel_string(rel);

    if abs.is_file() {
        return Ok(vec![prefix]);
    }
    if !abs.exists() {
        return Err(Error::NotFound(abs));
    }

    Ok(list_children(&abs)?
        .into_iter()
        .filter(|e| !e.is_dir())
        .map(|e| {
            if prefix.is_empty() {
                e.name
            } else {
                format!("{}/{}", prefix, e.name)
            }
        })
        .collect())
}

/// Compose each target with `base` and run `probe` on it, in order.
pub fn resolve_urls(
    base: &RawBase,
    targets: &[String],
    probe: impl Fn(&str) -> bool,
) -> Vec<UrlStatus> {
    targets
        .iter()
        .map(|t| {
            let url = base.join(t);
            let reachable = probe(&url);
            UrlStatus { url, reachable }
        })
        .collect()
}

fn render(status: &UrlStatus) -> String {
    if status.reachable {
        format!("{} {}", "✔".green(), status.url.green())
    } else {
        format!("{} {}", "✘".red(), status.url.red())
    }
}

/// CLI command: print the public raw URL of a file, or of every file in a
/// directory, flagged by reachability.
///
/// # Errors
/// Fails if the remote cannot be resolved or the target does not exist.
/// Unreachable URLs are not errors.
pub fn cmd_show(settings: &Settings, rel: &Path) -> Result<()> {
    let vcs = GitCli::new(&settings.local_base);
    let slug = vcs
        .remote_push_url()
        .context("cannot derive raw-content URL")?;
    let base = RawBase::from_slug(&slug);

    let targets = collect_targets(settings, rel)
        .with_context(|| format!("cannot show {}", rel.display()))?;

    let prober = Prober::new()?;
    for status in resolve_urls(&base, &targets, |u| prober.probe(u)) {
        println!("{}", render(&status));
    }
    Ok(())
}
