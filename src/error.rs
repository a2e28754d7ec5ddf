use std::path::PathBuf;

use thiserror::Error;

/// Failures with a meaning of their own; plain I/O errors travel as `anyhow::Error`.
#[derive(Error, Debug, PartialEq)]
pub enum ScaffoldError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("template directory `{}` not found", .0.display())]
    NotFound(PathBuf),
    #[error("required cxxgen version not met. Required: {required}, was: {found}")]
    VersionMismatch { required: String, found: String },
}
