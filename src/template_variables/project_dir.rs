use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use console::style;
use log::debug;

use crate::layout::{GENERATED_PATHS, INCLUDE_DIR, PLACEHOLDER};
use crate::template_variables::project_name::ProjectName;
use crate::utils::remove_path;

/// The directory a project is generated into.
#[derive(Debug, PartialEq)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl From<PathBuf> for ProjectDir {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl ProjectDir {
    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.0.join(path)
    }

    /// Delete everything a previous generate or reset may have produced.
    pub fn wipe_generated(&self) -> Result<()> {
        debug!(
            "{}",
            style(format!("Cleaning generated paths in {self}")).bold()
        );
        GENERATED_PATHS
            .iter()
            .try_for_each(|generated| remove_path(&self.0.join(generated)))
    }

    /// Rename `include/<placeholder>` to `include/<name>` when present.
    pub fn rename_include_dir(&self, name: &ProjectName) -> Result<Option<PathBuf>> {
        let include = self.0.join(INCLUDE_DIR);
        let from = include.join(PLACEHOLDER);
        if !from.is_dir() {
            return Ok(None);
        }
        let to = include.join(name.as_str());
        fs::rename(&from, &to).with_context(|| {
            format!("cannot rename `{}` to `{}`", from.display(), to.display())
        })?;
        Ok(Some(to))
    }
}
