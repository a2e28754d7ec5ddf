//! The directory tree templates are copied from.
//!
//! ```text
//! .templates/
//! ├── template.toml   (optional)
//! ├── common/
//! ├── reset/
//! ├── cxx_exe/
//! ├── cxx_lib/
//! ├── cuda_exe/
//! └── cuda_lib/
//! ```

use anyhow::Result;
use console::style;
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::layout::{COMMON_DIR, RESET_DIR};
use crate::template_config::{Config, CONFIG_FILE_NAME};
use crate::template_variables::ProjectType;
use crate::utils::remove_path;

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> Result<Config> {
        Config::from_path(self.root.join(CONFIG_FILE_NAME))
    }

    fn subdir(&self, name: &str) -> Result<PathBuf, ScaffoldError> {
        let dir = self.root.join(name);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(ScaffoldError::NotFound(dir))
        }
    }

    pub fn common(&self) -> Result<PathBuf, ScaffoldError> {
        self.subdir(COMMON_DIR)
    }

    pub fn reset(&self) -> Result<PathBuf, ScaffoldError> {
        self.subdir(RESET_DIR)
    }

    pub fn variant(&self, project_type: ProjectType) -> Result<PathBuf, ScaffoldError> {
        self.subdir(project_type.template_dir())
    }

    /// Arrange for the store to be deleted once the returned guard is dropped.
    pub fn remove_on_exit(self) -> TemplateRemoval {
        TemplateRemoval { store: Some(self) }
    }
}

/// Deletes the template store when dropped, unless the thread is unwinding.
#[derive(Debug)]
pub struct TemplateRemoval {
    store: Option<TemplateStore>,
}

impl TemplateRemoval {
    /// Delete the store now and report the outcome.
    pub fn finish(mut self) -> Result<()> {
        match self.store.take() {
            Some(store) => remove_store(&store),
            None => Ok(()),
        }
    }
}

fn remove_store(store: &TemplateStore) -> Result<()> {
    remove_path(store.root())?;
    info!(
        "🗑️ {} {}",
        style("Removed template store").bold(),
        style(store.root().display()).underlined()
    );
    Ok(())
}

impl Drop for TemplateRemoval {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Some(store) = self.store.take() {
            if let Err(e) = remove_store(&store) {
                warn!("cannot remove template store: {e:#}");
            }
        }
    }
}
