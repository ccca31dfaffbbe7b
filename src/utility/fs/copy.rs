// wordma-rs: Scaffolding and theme management for wordma blogs
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::io;
use std::path::Path;

use crate::error::FsError;

/// Recursively copies `src` to `dst`, creating `dst` if needed.
///
/// File permission bits are carried over (`std::fs::copy` does this for
/// files; directories get theirs once their contents are in place).
/// Symbolic links are recreated on Unix and followed elsewhere.
///
/// # Example
/// ```no_run
/// use wordma_rs::utility::fs::copy::copy_dir_all;
/// use std::path::Path;
///
/// copy_dir_all(Path::new("themes/aurora/config"), Path::new("/tmp/config-copy"))?;
/// # Ok::<(), wordma_rs::error::FsError>(())
/// ```
///
/// # Errors
///
/// Returns an `FsError::IoError` naming the path an I/O operation failed on.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<(), FsError> {
    fs::create_dir_all(dst).map_err(|e| FsError::io(dst, e))?;

    for entry in fs::read_dir(src).map_err(|e| FsError::io(src, e))? {
        let entry = entry.map_err(|e| FsError::io(src, e))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        let file_type = entry.file_type().map_err(|e| FsError::io(&src_path, e))?;

        if file_type.is_dir() {
            copy_dir_all(&src_path, &dst_path)?;
        } else if file_type.is_symlink() {
            copy_symlink(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(|e| FsError::io(&src_path, e))?;
        }
    }

    let permissions = fs::metadata(src)
        .map_err(|e| FsError::io(src, e))?
        .permissions();
    fs::set_permissions(dst, permissions).map_err(|e| FsError::io(dst, e))?;

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), FsError> {
    let target = fs::read_link(src).map_err(|e| FsError::io(src, e))?;
    std::os::unix::fs::symlink(&target, dst).map_err(|e| FsError::io(dst, e))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<(), FsError> {
    if src.is_dir() {
        copy_dir_all(src, dst)
    } else {
        fs::copy(src, dst)
            .map(|_| ())
            .map_err(|e| FsError::io(src, e))
    }
}

/// Removes a directory tree. A path that does not exist is not an error.
///
/// # Errors
///
/// Returns the underlying I/O error for anything other than "not found".
pub fn remove_dir_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Removes whatever is at `path`: a directory tree, a file or a symlink.
/// A path that does not exist is not an error.
///
/// # Errors
///
/// Returns the underlying I/O error for anything other than "not found".
pub fn remove_path_if_exists(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        other => other?,
    };
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match removed {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
