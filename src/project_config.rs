use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::template_variables::{ProjectName, ProjectType};

pub const PROJECT_CONFIG_FILE_NAME: &str = ".cxxgen.toml";

/// Record of the last generated project, kept at the destination root.
#[derive(Deserialize, Serialize, Debug, PartialEq, Default, Clone)]
pub struct ProjectConfig {
    pub project: Option<HashMap<String, toml::Value>>,
}

impl TryFrom<String> for ProjectConfig {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl ProjectConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        Ok(config)
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project
            .as_ref()
            .and_then(|s| s.get("project_name"))
            .and_then(|s| s.as_str())
    }
}

pub fn write_project_config_file(
    project_path: impl AsRef<Path>,
    project_name: &ProjectName,
    project_type: ProjectType,
) -> Result<()> {
    let config = ProjectConfig {
        project: Some(HashMap::from([
            (
                "project_name".to_string(),
                toml::Value::String(project_name.to_string()),
            ),
            (
                "project_type".to_string(),
                toml::Value::String(project_type.to_string()),
            ),
        ])),
    };
    let config_file = project_path.as_ref().join(PROJECT_CONFIG_FILE_NAME);
    let toml_string = toml::to_string(&config)?;
    fs::write(config_file, toml_string)?;
    Ok(())
}
