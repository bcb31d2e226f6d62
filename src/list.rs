use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::assets::{Entry, list_children, resolve};
use crate::config::Settings;

/// Render entries on a single line separated by two spaces.
///
/// Directories are bold blue with a trailing `/`, files are plain.
pub fn render_entries(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|e| {
            if e.is_dir() {
                format!("{}/", e.name).blue().bold().to_string()
            } else {
                e.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// CLI command: list the direct children of `rel` inside the local base.
///
/// Hidden entries are skipped and the rest are sorted by name.
///
/// Example output:
/// ```text
/// a.png  b.jpg  pets/
/// ```
///
/// # Errors
/// Fails if the path does not exist or is not a directory.
pub fn cmd_ls(settings: &Settings, rel: &Path) -> Result<()> {
    let dir = resolve(&settings.local_base, rel)?;
    let entries =
        list_children(&dir).with_context(|| format!("cannot list {}", rel.display()))?;
    println!("{}", render_entries(&entries));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::EntryKind;
    use serial_test::serial;

    #[test]
    #[serial]
    fn directories_are_marked() {
        colored::control::set_override(false);
        let entries = vec![
            Entry {
                name: "a.png".into(),
                kind: EntryKind::File,
            },
            Entry {
                name: "sub".into(),
                kind: EntryKind::Dir,
            },
        ];
        assert_eq!(render_entries(&entries), "a.png  sub/");
        colored::control::unset_override();
    }

    #[test]
    fn empty_directory_renders_empty_line() {
        assert_eq!(render_entries(&[]), "");
    }
}
