use anyhow::Result;
use semver::VersionReq;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::{convert::TryFrom, io::ErrorKind};

use crate::error::ScaffoldError;

pub const CONFIG_FILE_NAME: &str = "template.toml";

/// Optional `template.toml` at the root of the template store.
#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
pub struct Config {
    pub template: Option<TemplateConfig>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
pub struct TemplateConfig {
    pub description: Option<String>,
    pub cxxgen_version: Option<VersionReq>,
}

impl TryFrom<String> for Config {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Config {
    /// A missing file yields the default configuration.
    pub(crate) fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        config.template.get_or_insert(Default::default());
        Ok(config)
    }

    pub fn description(&self) -> Option<&str> {
        self.template.as_ref()?.description.as_deref()
    }

    /// Fails when the store asks for a cxxgen version other than `version`.
    pub fn check_version(&self, version: &semver::Version) -> Result<(), ScaffoldError> {
        let requirement = self
            .template
            .as_ref()
            .and_then(|t| t.cxxgen_version.as_ref());
        match requirement {
            Some(requirement) if !requirement.matches(version) => {
                Err(ScaffoldError::VersionMismatch {
                    required: requirement.to_string(),
                    found: version.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
