use assert_cmd::Command;
use std::path::Path;

pub fn binary() -> Command {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command.env_remove("CUDA_HOME").env_remove("RUST_LOG");
    command
}

pub trait ArgBuilderExt {
    fn arg_type(&mut self, project_type: &str) -> &mut Self;
    fn arg_name(&mut self, name: &str) -> &mut Self;
    fn arg_reset(&mut self) -> &mut Self;
    fn arg_remove_template(&mut self) -> &mut Self;
    fn arg_template_dir(&mut self, path: impl AsRef<Path>) -> &mut Self;
    fn arg_destination(&mut self, path: impl AsRef<Path>) -> &mut Self;
}

impl ArgBuilderExt for Command {
    fn arg_type(&mut self, project_type: &str) -> &mut Self {
        self.arg("--project-type").arg(project_type)
    }

    fn arg_name(&mut self, name: &str) -> &mut Self {
        self.arg("--project-name").arg(name)
    }

    fn arg_reset(&mut self) -> &mut Self {
        self.arg("--reset")
    }

    fn arg_remove_template(&mut self) -> &mut Self {
        self.arg("--remove-template")
    }

    fn arg_template_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.arg("--template-dir").arg(path.as_ref())
    }

    fn arg_destination(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.arg("--destination").arg(path.as_ref())
    }
}
