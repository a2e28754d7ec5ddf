use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ScaffoldError;

static VALID_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static regex is valid"));

/// A project name that is safe to use as a C++ namespace and directory name.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> Result<Self, ScaffoldError> {
        if VALID_IDENT.is_match(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(ScaffoldError::InvalidArgument(format!(
                "project name `{name}` must be a bare identifier (letters, digits, `_`, not starting with a digit)"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The project skeletons the template store provides.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProjectType {
    CxxExecutable,
    CxxLibrary,
    CudaExecutable,
    CudaLibrary,
}

impl ProjectType {
    pub const ALL: [Self; 4] = [
        Self::CxxExecutable,
        Self::CxxLibrary,
        Self::CudaExecutable,
        Self::CudaLibrary,
    ];

    /// Subdirectory of the template store holding this skeleton
    pub const fn template_dir(&self) -> &'static str {
        match self {
            Self::CxxExecutable => "cxx_exe",
            Self::CxxLibrary => "cxx_lib",
            Self::CudaExecutable => "cuda_exe",
            Self::CudaLibrary => "cuda_lib",
        }
    }

    pub const fn id(&self) -> u8 {
        match self {
            Self::CxxExecutable => 1,
            Self::CxxLibrary => 2,
            Self::CudaExecutable => 3,
            Self::CudaLibrary => 4,
        }
    }

    pub const fn needs_cuda(&self) -> bool {
        matches!(self, Self::CudaExecutable | Self::CudaLibrary)
    }
}

impl TryFrom<u8> for ProjectType {
    type Error = ScaffoldError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| {
                ScaffoldError::InvalidArgument(format!("project type must be 1-4, got {id}"))
            })
    }
}

impl FromStr for ProjectType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().parse::<u8>().map_err(|_| {
            ScaffoldError::InvalidArgument(format!("project type must be 1-4, got `{s}`"))
        })?;
        Self::try_from(id)
    }
}

impl Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::CxxExecutable => "C++ executable",
            Self::CxxLibrary => "C++ library",
            Self::CudaExecutable => "CUDA executable",
            Self::CudaLibrary => "CUDA library",
        };
        write!(f, "{name}")
    }
}
