use std::path::PathBuf;

use clap::Parser;
use std::env;

use crate::scaffold_config::DEFAULT_CPP_STANDARD;

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
    pub const PROJECT_PARAMETERS: &str = "Project Parameters";
    pub const DEPENDENCY_PARAMETERS: &str = "Dependency Parameters";
}

#[derive(Clone, Debug, Parser)]
#[command(
    name = "cppstart",
    arg_required_else_help(false),
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Project name; skips the interactive prompt. Illegal characters are
    /// folded into kebab-case.
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_PARAMETERS)]
    pub name: Option<String>,

    /// Author written into the generated source banners; skips the prompt
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_PARAMETERS)]
    pub author: Option<String>,

    /// Enable an optional dependency without being asked. E.g. `--with spdlog`
    #[arg(long = "with", value_name = "DEP", num_args = 1, value_parser, help_heading = heading::DEPENDENCY_PARAMETERS)]
    pub with: Vec<String>,

    /// C++ standard level for the generated build files
    #[arg(long = "std", value_name = "LEVEL", default_value_t = DEFAULT_CPP_STANDARD, help_heading = heading::PROJECT_PARAMETERS)]
    pub cpp_standard: u8,

    /// Generate the project directly at the given path instead of the
    /// current directory
    #[arg(long, short, value_parser, value_name = "PATH", help_heading = heading::PROJECT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Only register dependencies in an existing project, no scaffolding
    #[arg(long, action, help_heading = heading::DEPENDENCY_PARAMETERS)]
    pub deps_only: bool,

    /// Skip git repository initialization and submodule registration
    #[arg(long, action, help_heading = heading::DEPENDENCY_PARAMETERS)]
    pub no_fetch: bool,

    /// Overwrite an existing source tree without asking
    #[arg(short, long, action)]
    pub overwrite: bool,

    /// Never prompt; answers must come from the other arguments. New-project
    /// mode then requires --name and --author
    #[arg(short, long, action)]
    pub silent: bool,

    /// Enables more verbose output
    #[arg(long, short, action)]
    pub verbose: bool,
}

impl Default for AppArgs {
    fn default() -> Self {
        Self {
            name: None,
            author: None,
            with: Vec::default(),
            cpp_standard: DEFAULT_CPP_STANDARD,
            destination: None,
            deps_only: false,
            no_fetch: false,
            overwrite: false,
            silent: false,
            verbose: false,
        }
    }
}

/// To get the arguments list from terminal
pub fn resolve_args() -> AppArgs {
    AppArgs::parse_from(env::args())
}
