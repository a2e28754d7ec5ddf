use anyhow::Context;
use anyhow::Result;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// deals with `~/` and `$HOME/` prefixes
pub fn expand_home(p: impl AsRef<Path>) -> Result<PathBuf> {
    let p = p.as_ref();
    let p = if p.starts_with("~/") {
        home()?.join(p.strip_prefix("~/")?)
    } else if p.starts_with("$HOME/") {
        home()?.join(p.strip_prefix("$HOME/")?)
    } else {
        p.to_path_buf()
    };
    Ok(p)
}

/// home path wrapper
pub fn home() -> Result<PathBuf> {
    home::home_dir().context("$HOME was not set")
}

/// Remove a file or a whole directory tree. A missing path is not an error.
pub fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(e).with_context(|| format!("cannot inspect `{}`", path.display()))
        }
    };
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match result {
        Ok(()) => {
            debug!("removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("cannot remove `{}`", path.display())),
    }
}

/// Copy the contents of `src` into `dst`.
/// Directories are merged, files already present in `dst` are overwritten.
pub fn copy_dir_merge(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).with_context(|| format!("cannot create `{}`", dst.display()))?;
    let mut file_list = vec![src.to_path_buf()];
    while let Some(dir) = file_list.pop() {
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("cannot read directory `{}`", dir.display()))?;
        for entry in entries {
            let entry_path = entry?.path();
            let dst_path = dst.join(entry_path.strip_prefix(src)?);
            if entry_path.is_dir() {
                fs::create_dir_all(&dst_path)
                    .with_context(|| format!("cannot create `{}`", dst_path.display()))?;
                file_list.push(entry_path);
            } else {
                fs::copy(&entry_path, &dst_path).with_context(|| {
                    format!(
                        "cannot copy `{}` to `{}`",
                        entry_path.display(),
                        dst_path.display()
                    )
                })?;
            }
        }
    }
    Ok(())
}

/// Every regular file below `root`, depth first. A missing root yields nothing.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !root.is_dir() {
        return Ok(files);
    }
    let mut dirs = vec![root.to_path_buf()];
    while let Some(dir) = dirs.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry_path = entry?.path();
            if entry_path.is_dir() {
                dirs.push(entry_path);
            } else {
                files.push(entry_path);
            }
        }
    }
    files.sort();
    Ok(files)
}
