use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Kind of a direct child reported by [`list_children`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One direct child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Hidden entries (dotfiles, `.git`) are never listed.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List the direct children of `dir`, sorted by name.
///
/// - Hidden entries are skipped, files and directories alike.
/// - Symlinks are classified by their target; broken links and special
///   files (sockets, fifos, ...) are skipped.
/// - Names that are not valid UTF-8 are lossy-converted.
///
/// # Errors
/// - `NotFound` if `dir` does not exist.
/// - `NotADirectory` if `dir` is not a directory.
/// - I/O errors while reading the directory itself.
pub fn list_children(dir: &Path) -> Result<Vec<Entry>> {
    if !dir.exists() {
        return Err(Error::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut out = Vec::new();
    for ent in fs::read_dir(dir)? {
        let ent = match ent {
            Ok(e) => e,
            Err(_) => continue,
        };
        let name = ent.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            continue;
        }
        // fs::metadata follows symlinks
        let md = match fs::metadata(ent.path()) {
            Ok(md) => md,
            Err(_) => continue,
        };
        let kind = if md.is_dir() {
            EntryKind::Dir
        } else if md.is_file() {
            EntryKind::File
        } else {
            continue;
        };
        out.push(Entry { name, kind });
    }

    out.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(out)
}
