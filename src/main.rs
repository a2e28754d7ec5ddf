/// Main file
mod app_log;
mod args;
mod error;
mod layout;
mod materializer;
mod progressbar;
mod project_config;
mod template;
mod template_config;
mod template_store;
mod template_variables;
mod user_parsed_input;
mod utils;

use app_log::log_env_init;
use args::*;
use error::ScaffoldError;
use layout::CUDA_HOME_ENV;
use materializer::Materializer;
use template_store::TemplateStore;
use template_variables::ProjectDir;
use user_parsed_input::{Mode, UserParsedInput};

use anyhow::Result;
use console::style;
use log::info;
use std::env;

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    let user_parsed_input = UserParsedInput::try_from_args(&args)?;
    let store = TemplateStore::new(user_parsed_input.template_dir());

    match user_parsed_input.mode() {
        Mode::RemoveTemplate => {
            let removal = store.remove_on_exit();
            // nothing else runs in this mode, the store goes last
            removal.finish()
        }
        Mode::Reset => {
            let materializer = new_materializer(store, &user_parsed_input)?;
            materializer.reset()?;
            info!(
                "✨ {} {} {}",
                style("Done!").bold().green(),
                style("Project reset").bold(),
                style(materializer.destination()).underlined()
            );
            Ok(())
        }
        Mode::Generate { project_type, name } => {
            let materializer = new_materializer(store, &user_parsed_input)?;
            info!(
                "🔧 {}",
                style(format!("Destination: {} ...", materializer.destination()))
                    .bold()
                    .yellow()
            );
            info!(
                "🔧 {}",
                style(format!("project-name: {name} ...")).bold().yellow()
            );
            info!(
                "🔧 {}",
                style(format!("project-type: {project_type} ...")).bold().yellow()
            );
            materializer.generate(*project_type, name)?;
            info!(
                "✨ {} {} {}",
                style("Done!").bold().green(),
                style("New project created").bold(),
                style(materializer.destination()).underlined()
            );
            Ok(())
        }
    }
}

fn new_materializer(store: TemplateStore, user_parsed_input: &UserParsedInput) -> Result<Materializer> {
    check_cxxgen_version(&store)?;
    Ok(Materializer::new(
        store,
        ProjectDir::from(user_parsed_input.destination().to_path_buf()),
        env::var(CUDA_HOME_ENV).unwrap_or_default(),
    ))
}

fn check_cxxgen_version(store: &TemplateStore) -> Result<()> {
    let config = store.config()?;
    if let Some(description) = config.description() {
        info!("📦 {}", style(description).bold());
    }
    let version = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;
    config.check_version(&version).map_err(|e| match e {
        ScaffoldError::VersionMismatch { required, found } => anyhow::anyhow!(
            "⛔ {} {} {} {}",
            style("Required cxxgen version not met. Required:")
                .bold()
                .red(),
            style(required).yellow(),
            style(" was:").bold().red(),
            style(found).yellow(),
        ),
        other => other.into(),
    })
}
