use std::path::PathBuf;

use clap::{Args, Parser};
use std::env;

use crate::template_variables::{ProjectName, ProjectType};

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const MODES: &str = "Modes";
    pub const PROJECT_PARAMETERS: &str = "Project Parameters";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

#[derive(Parser, Clone, Debug)]
#[command(
    name = "cxxgen",
    arg_required_else_help(true),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    #[command(flatten)]
    pub mode: ModeFlags,

    /// Project skeleton: 1 = C++ executable, 2 = C++ library, 3 = CUDA executable,
    /// 4 = CUDA library
    #[arg(
        long,
        short = 't',
        value_name = "1|2|3|4",
        value_parser = clap::value_parser!(ProjectType),
        required_unless_present_any = ["remove_template", "reset"],
        help_heading = heading::PROJECT_PARAMETERS
    )]
    pub project_type: Option<ProjectType>,

    /// Project name, used as namespace and include directory; must be a bare identifier
    #[arg(
        long,
        short = 'n',
        value_name = "IDENTIFIER",
        value_parser = clap::value_parser!(ProjectName),
        required_unless_present_any = ["remove_template", "reset"],
        help_heading = heading::PROJECT_PARAMETERS
    )]
    pub project_name: Option<ProjectName>,

    /// Template store to copy skeletons from [default: <DESTINATION>/.templates]
    #[arg(long, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub template_dir: Option<PathBuf>,

    /// Directory to generate the project into [default: current directory]
    #[arg(long, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

#[derive(Default, Debug, Clone, Args)]
pub struct ModeFlags {
    /// Delete the template store once everything else is done
    #[arg(long, action, help_heading = heading::MODES)]
    pub remove_template: bool,

    /// Delete generated files and restore the baseline from the template store
    #[arg(long, action, help_heading = heading::MODES)]
    pub reset: bool,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    AppArgs::parse_from(env::args())
}
