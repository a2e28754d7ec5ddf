use anyhow::Result;
use console::style;
use log::{debug, info, warn};

use crate::layout::{BUILD_CONFIG_FILE, CUDA_HOME_PLACEHOLDER, EDITOR_CONFIG_FILE, PLACEHOLDER};
use crate::project_config::{self, ProjectConfig, PROJECT_CONFIG_FILE_NAME};
use crate::template;
use crate::template_store::TemplateStore;
use crate::template_variables::{ProjectDir, ProjectName, ProjectType};
use crate::utils::copy_dir_merge;

/// Copies skeletons from a template store into a project directory.
#[derive(Debug)]
pub struct Materializer {
    store: TemplateStore,
    destination: ProjectDir,
    cuda_home: String,
}

impl Materializer {
    pub fn new(store: TemplateStore, destination: ProjectDir, cuda_home: impl Into<String>) -> Self {
        Self {
            store,
            destination,
            cuda_home: cuda_home.into(),
        }
    }

    pub fn destination(&self) -> &ProjectDir {
        &self.destination
    }

    /// Wipe the generated paths and restore the baseline from the store.
    pub fn reset(&self) -> Result<()> {
        let baseline = self.store.reset()?;
        self.log_previous_project();
        self.destination.wipe_generated()?;
        copy_dir_merge(&baseline, self.destination.as_ref())?;
        info!(
            "🔧 {}",
            style(format!("Restored baseline from {}", baseline.display()))
                .bold()
                .yellow()
        );
        Ok(())
    }

    fn log_previous_project(&self) {
        let record = self.destination.join(PROJECT_CONFIG_FILE_NAME);
        match ProjectConfig::from_path(&record) {
            Ok(config) => {
                if let Some(name) = config.project_name() {
                    info!("🔧 {}", style(format!("Resetting project {name} ...")).bold());
                }
            }
            Err(e) => warn!("ignoring unreadable {}: {e:#}", record.display()),
        }
    }

    /// Materialize `project_type` into the destination, named `name`.
    pub fn generate(&self, project_type: ProjectType, name: &ProjectName) -> Result<()> {
        // resolve both sources before anything is deleted
        let common = self.store.common()?;
        let variant = self.store.variant(project_type)?;

        self.destination.wipe_generated()?;

        info!(
            "🔧 {}",
            style(format!("Copying {} ...", common.display())).bold().yellow()
        );
        copy_dir_merge(&common, self.destination.as_ref())?;
        info!(
            "🔧 {}",
            style(format!("Copying {} ...", variant.display())).bold().yellow()
        );
        copy_dir_merge(&variant, self.destination.as_ref())?;

        if let Some(include) = self.destination.rename_include_dir(name)? {
            debug!("include directory is now {}", include.display());
        }

        info!("🔧 {}", style("Renaming project ...").bold().yellow());
        template::walk_dir(self.destination.as_ref(), name)?;

        let build_config = self.destination.join(BUILD_CONFIG_FILE);
        if build_config.is_file() {
            template::replace_in_file(&build_config, PLACEHOLDER, name.as_str())?;
        }

        if project_type.needs_cuda() {
            let editor_config = self.destination.join(EDITOR_CONFIG_FILE);
            if editor_config.is_file() {
                if self.cuda_home.is_empty() {
                    warn!("CUDA_HOME is not set, {EDITOR_CONFIG_FILE} gets an empty CUDA path");
                }
                template::replace_in_file(&editor_config, CUDA_HOME_PLACEHOLDER, &self.cuda_home)?;
            }
        }

        project_config::write_project_config_file(&self.destination, name, project_type)?;
        Ok(())
    }
}
