//! Capability-based file helpers shared by the data and CLI crates.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate the file at `path`, opening its parent as a capability.
///
/// The parent directory must already exist; see [`ensure_parent_dir`].
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.create(name.as_str())
}

/// Whether `path` names an existing regular file.
///
/// A missing entry or parent directory surfaces as
/// [`io::ErrorKind::NotFound`] so callers can tell it apart from a directory.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (base, relative) = split_root(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a path into the ambient directory it is anchored at and the
/// relative remainder cap-std can walk.
///
/// Absolute paths anchor at their prefix and root; relative paths anchor at
/// the current directory. Leading `..` components move the anchor up, and
/// later ones cancel the preceding component lexically, because cap-std
/// refuses to walk `..`.
fn split_root(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut base = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => base.push(component),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                if !relative.pop() {
                    base.push(component);
                }
            }
            Utf8Component::Normal(_) => relative.push(component),
        }
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    (base, relative)
}
