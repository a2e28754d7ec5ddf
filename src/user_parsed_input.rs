//! Input from user but after parse

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::args::AppArgs;
use crate::error::ScaffoldError;
use crate::layout::DEFAULT_TEMPLATE_DIR;
use crate::template_variables::{ProjectName, ProjectType};
use crate::utils::expand_home;

/// What a run does. Exactly one mode is picked per invocation.
#[derive(Debug, PartialEq, Clone)]
pub enum Mode {
    RemoveTemplate,
    Reset,
    Generate {
        project_type: ProjectType,
        name: ProjectName,
    },
}

// Contains parsed information from user.
#[derive(Debug)]
pub struct UserParsedInput {
    mode: Mode,
    destination: PathBuf,
    template_dir: PathBuf,
}

impl UserParsedInput {
    /// Resolve the mode and the directories from the command line.
    /// `--remove-template` wins over `--reset`, which wins over generation.
    pub fn try_from_args(args: &AppArgs) -> Result<Self> {
        let mode = if args.mode.remove_template {
            Mode::RemoveTemplate
        } else if args.mode.reset {
            Mode::Reset
        } else {
            match (args.project_type, args.project_name.clone()) {
                (Some(project_type), Some(name)) => Mode::Generate { project_type, name },
                _ => {
                    return Err(ScaffoldError::InvalidArgument(
                        "`--project-type` and `--project-name` are required together".into(),
                    )
                    .into())
                }
            }
        };

        let cwd = env::current_dir()?;
        let destination = match &args.destination {
            Some(p) => absolute(&cwd, expand_home(p)?),
            None => cwd.clone(),
        };
        let template_dir = match &args.template_dir {
            Some(p) => absolute(&cwd, expand_home(p)?),
            None => destination.join(DEFAULT_TEMPLATE_DIR),
        };

        Ok(Self {
            mode,
            destination,
            template_dir,
        })
    }

    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn destination(&self) -> &Path {
        self.destination.as_path()
    }

    pub fn template_dir(&self) -> &Path {
        self.template_dir.as_path()
    }
}

fn absolute(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
