use indoc::indoc;
use std::fs;
use std::io::Write;

use crate::helpers::project::Project;
use tempfile::TempDir;

pub struct ProjectBuilder {
    files: Vec<(String, String)>,
    root: TempDir,
}

pub fn tempdir() -> ProjectBuilder {
    ProjectBuilder {
        files: Vec::new(),
        root: tempfile::Builder::new().prefix("cxxgen").tempdir().unwrap(),
    }
}

impl ProjectBuilder {
    /// builds a template store in `.templates/` with
    /// - a `common` skeleton carrying `CMakeLists.txt`
    /// - one skeleton per project type
    /// - a `reset` baseline with a `README.md`
    pub fn with_default_store(self) -> Self {
        self.file(
            ".templates/common/CMakeLists.txt",
            indoc! {r#"
                cmake_minimum_required(VERSION 3.24)
                project(_template_project_name_ LANGUAGES CXX)
                add_subdirectory(src)
            "#},
        )
        .file(".templates/common/.clang-format", "BasedOnStyle: LLVM\n")
        .file(".templates/common/scripts/format.sh", "clang-format -i src/*.cpp\n")
        .file(".templates/common/.vscode/launch.json", "{ \"version\": \"0.2.0\" }\n")
        .file(
            ".templates/common/.github/workflows/ci-build-and-test.yml",
            "name: _template_project_name_\n",
        )
        .file(
            ".templates/cxx_exe/include/_template_project_name_/api.hpp",
            "namespace _template_project_name_ {}",
        )
        .file(
            ".templates/cxx_exe/src/main.cpp",
            indoc! {r#"
                #include <_template_project_name_/api.hpp>

                int main() { return 0; }
            "#},
        )
        .file(
            ".templates/cxx_lib/include/_template_project_name_/lib.hpp",
            "namespace _template_project_name_ { int answer(); }",
        )
        .file(
            ".templates/cxx_lib/lib/lib.cpp",
            "#include <_template_project_name_/lib.hpp>",
        )
        .file(
            ".templates/cxx_lib/test/test_lib.cpp",
            "using namespace _template_project_name_;",
        )
        .file(
            ".templates/cuda_exe/src/main.cu",
            "__global__ void _template_project_name__kernel() {}",
        )
        .file(
            ".templates/cuda_exe/.clangd",
            indoc! {r#"
                CompileFlags:
                  Add: [--cuda-path=<path-to-cuda>]
            "#},
        )
        .file(
            ".templates/cuda_lib/lib/kernels.cuh",
            "namespace _template_project_name_ {}",
        )
        .file(
            ".templates/cuda_lib/.clangd",
            indoc! {r#"
                CompileFlags:
                  Add: [--cuda-path=<path-to-cuda>]
            "#},
        )
        .file(
            ".templates/reset/README.md",
            "Run `cxxgen -t <type> -n <name>` to create a project.\n",
        )
    }

    pub fn file(mut self, name: &str, contents: impl AsRef<str>) -> Self {
        self.files.retain(|(f, _)| f != name);
        self.files
            .push((name.to_string(), contents.as_ref().to_string()));
        self
    }

    pub fn build(self) -> Project {
        let path = self.root.path();

        for (file, contents) in self.files.iter() {
            let path = path.join(file);
            let parent = path
                .parent()
                .unwrap_or_else(|| panic!("couldn't find parent dir of {path:?}"));

            fs::create_dir_all(parent)
                .unwrap_or_else(|_| panic!("couldn't create {parent:?} directory"));

            fs::File::create(&path)
                .unwrap_or_else(|_| panic!("couldn't create file {path:?}"))
                .write_all(contents.as_ref())
                .unwrap_or_else(|_| panic!("couldn't write to file {path:?}: {contents:?}"));
        }

        Project { root: self.root }
    }
}
