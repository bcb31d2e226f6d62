//! Filesystem operations on the configured base directory.
//!
//! Every path handed in from the command line is relative to
//! `Settings::local_base` and is resolved through [`resolve`], which refuses
//! anything that would land outside of it.

mod fs_scan;

use anyhow::Context;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::Settings;
use crate::error::{Error, Result};

pub use fs_scan::{Entry, EntryKind, list_children};

/// Join a relative path onto `base`.
///
/// `.` segments are dropped; absolute paths, `..` and drive prefixes are
/// rejected with [`Error::OutsideBase`]. An empty path resolves to `base`.
pub fn resolve(base: &Path, rel: &Path) -> Result<PathBuf> {
    let mut out = base.to_path_buf();
    for c in rel.components() {
        match c {
            Component::Normal(seg) => out.push(seg),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::OutsideBase(rel.to_path_buf()));
            }
        }
    }
    Ok(out)
}

/// Create `name` (and any missing intermediate directories) under the base.
///
/// # Errors
/// `AlreadyExists` if anything, file or directory, already sits at that
/// path; the filesystem is left unchanged in that case.
pub fn make_subdirectory(settings: &Settings, name: &Path) -> Result<PathBuf> {
    let target = resolve(&settings.local_base, name)?;
    if target == settings.local_base || fs::symlink_metadata(&target).is_ok() {
        return Err(Error::AlreadyExists(target));
    }
    fs::create_dir_all(&target)?;
    log::debug!("created {}", target.display());
    Ok(target)
}

/// Copy `source` into the base directory at `dest`.
///
/// - If `dest` names an existing directory, the file is copied into it under
///   the source file name. Symlinked directories are not entered.
/// - The parent directory of the final destination must already exist; it
///   is never created here.
/// - An existing destination file is only replaced when `force` is set.
/// - A symlink at the destination is never written through; with `force`
///   the link itself is removed and replaced by a regular file.
///
/// The copy is byte-for-byte. Returns the absolute path written.
///
/// # Errors
/// - `NotFound` if `source` or the destination parent is missing.
/// - `NotAFile` if `source` is not a regular file.
/// - `OutsideBase` if the destination parent resolves, through symlinks,
///   outside the base directory.
/// - `AlreadyExists` if the destination exists (dangling links included)
///   and `force` is not set, or the destination is a directory.
pub fn add_asset(settings: &Settings, source: &Path, dest: &Path, force: bool) -> Result<PathBuf> {
    if !source.exists() {
        return Err(Error::NotFound(source.to_path_buf()));
    }
    if !source.is_file() {
        return Err(Error::NotAFile(source.to_path_buf()));
    }

    let mut target = resolve(&settings.local_base, dest)?;
    if fs::symlink_metadata(&target).is_ok_and(|md| md.is_dir()) {
        let file_name = source
            .file_name()
            .ok_or_else(|| Error::NotAFile(source.to_path_buf()))?;
        target.push(file_name);
    }

    let parent = target
        .parent()
        .ok_or_else(|| Error::OutsideBase(dest.to_path_buf()))?;
    if !parent.is_dir() {
        return Err(Error::NotFound(parent.to_path_buf()));
    }
    if !fs::canonicalize(parent)?.starts_with(fs::canonicalize(&settings.local_base)?) {
        return Err(Error::OutsideBase(dest.to_path_buf()));
    }

    // lstat: a link must not be followed out of the base
    if let Ok(md) = fs::symlink_metadata(&target) {
        if md.is_dir() || !force {
            return Err(Error::AlreadyExists(target));
        }
        if md.file_type().is_symlink() {
            fs::remove_file(&target)?;
        }
    }

    let n = fs::copy(source, &target)?;
    log::debug!(
        "copied {} bytes {} -> {}",
        n,
        source.display(),
        target.display()
    );
    Ok(target)
}

/// CLI command: create a subdirectory under the local base.
pub fn cmd_mkdir(settings: &Settings, name: &Path) -> anyhow::Result<()> {
    let created = make_subdirectory(settings, name)
        .with_context(|| format!("cannot create directory {}", name.display()))?;
    println!("Created {}", created.display());
    Ok(())
}

/// CLI command: copy an image into the local base.
pub fn cmd_add(settings: &Settings, source: &Path, dest: &Path, force: bool) -> anyhow::Result<()> {
    let written = add_asset(settings, source, dest, force)
        .with_context(|| format!("cannot add {}", source.display()))?;
    println!("Added {} -> {}", source.display(), written.display());
    Ok(())
}
