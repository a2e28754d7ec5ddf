//! Fixed names the generator works with.

/// Token standing in for the project name in template file names and contents.
pub const PLACEHOLDER: &str = "_template_project_name_";

/// Token standing in for the CUDA toolkit root in the editor configuration.
pub const CUDA_HOME_PLACEHOLDER: &str = "<path-to-cuda>";

/// Environment variable holding the CUDA toolkit root.
pub const CUDA_HOME_ENV: &str = "CUDA_HOME";

/// Paths (relative to the destination) owned by generation.
/// Everything here is deleted before a generate or reset run.
pub const GENERATED_PATHS: &[&str] = &[
    "cmake",
    "include",
    "src",
    "lib",
    "test",
    "scripts",
    "CMakeLists.txt",
    ".clangd",
    ".clang-format",
    ".vscode/launch.json",
    ".github/workflows/ci-auto-format-and-commit.yml",
    ".github/workflows/ci-build-and-test.yml",
    crate::project_config::PROJECT_CONFIG_FILE_NAME,
];

/// Directories whose source files get the placeholder rewritten.
pub const SOURCE_DIRS: &[&str] = &["include", "lib", "test", "src"];

/// Extensions considered source or header files.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "hpp", "h", "cu", "cuh"];

pub const BUILD_CONFIG_FILE: &str = "CMakeLists.txt";
pub const EDITOR_CONFIG_FILE: &str = ".clangd";

/// Include directory holding the placeholder-named header folder.
pub const INCLUDE_DIR: &str = "include";

// Template store layout
pub const DEFAULT_TEMPLATE_DIR: &str = ".templates";
pub const COMMON_DIR: &str = "common";
pub const RESET_DIR: &str = "reset";

pub fn is_source_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
