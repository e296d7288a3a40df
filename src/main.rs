/// Main file
mod app_log;
mod args;
mod dependency;
mod emitter;
mod fsops;
mod git_ops;
mod interactive;
mod layout;
mod progressbar;
mod scaffold_config;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use console::style;
use log::{info, warn};

use app_log::log_env_init;
use args::{resolve_args, AppArgs};
use dependency::DEPENDENCIES;
use fsops::{DiskWriter, FileWriter};
use git_ops::{CommandRunner, GitCli};
use interactive::{Mode, Prompter, TermPrompter};
use scaffold_config::{sanitize_project_name, ScaffoldConfig};

fn main() -> Result<()> {
    log_env_init();
    let args = resolve_args();

    let mut prompter = TermPrompter;
    let mut writer = DiskWriter;
    let runner = GitCli;
    run(&args, &mut prompter, &mut writer, &runner)
}

fn run(
    args: &AppArgs,
    prompter: &mut impl Prompter,
    writer: &mut impl FileWriter,
    runner: &impl CommandRunner,
) -> Result<()> {
    // reject typos before asking a single question
    for name in &args.with {
        dependency::find(name)?;
    }

    let destination = resolve_destination(args)?;

    match resolve_mode(args, prompter)? {
        Mode::NewProject => scaffold(args, prompter, writer, runner, &destination)?,
        Mode::DepsOnly => fetch_only(args, prompter, runner, &destination)?,
    }

    info!(
        "✨ {} {}",
        style("Done!").bold().green(),
        style("Run './run.sh' to get started!").bold()
    );
    Ok(())
}

fn resolve_destination(args: &AppArgs) -> Result<PathBuf> {
    Ok(match &args.destination {
        Some(path) => path.clone(),
        None => env::current_dir()?,
    })
}

fn resolve_mode(args: &AppArgs, prompter: &mut impl Prompter) -> Result<Mode> {
    if args.deps_only {
        return Ok(Mode::DepsOnly);
    }
    if args.silent {
        return Ok(Mode::NewProject);
    }
    interactive::mode(prompter)
}

/// New-project mode: collect the remaining answers, prepare the directory
/// tree, emit every template and hand over to git.
fn scaffold(
    args: &AppArgs,
    prompter: &mut impl Prompter,
    writer: &mut impl FileWriter,
    runner: &impl CommandRunner,
    destination: &Path,
) -> Result<()> {
    layout::guard_overwrite(&*writer, destination, args.overwrite, || {
        if args.silent {
            // nobody to ask
            Ok(false)
        } else {
            interactive::confirm_overwrite(prompter)
        }
    })?;

    let author = match &args.author {
        Some(author) => author.clone(),
        None if args.silent => bail!("--silent requires --author in new-project mode"),
        None => interactive::author(prompter)?,
    };

    let project_name = match &args.name {
        Some(name) => {
            let sanitized = sanitize_project_name(name);
            if &sanitized != name {
                warn!(
                    "{} `{}` {} `{}`{}",
                    style("Renaming project called").bold(),
                    style(name).bold().yellow(),
                    style("to").bold(),
                    style(&sanitized).bold().green(),
                    style("...").bold()
                );
            }
            sanitized
        }
        None if args.silent => bail!("--silent requires --name in new-project mode"),
        None => interactive::project_name(prompter)?,
    };

    let dependencies = if args.silent {
        DEPENDENCIES
            .iter()
            .map(|dep| {
                (
                    dep.name.to_string(),
                    args.with.iter().any(|name| name == dep.name),
                )
            })
            .collect()
    } else {
        interactive::dependency_flags(prompter, &args.with)?
    };

    let auto_fetch = if args.no_fetch {
        false
    } else if args.silent {
        true
    } else {
        interactive::confirm_auto_fetch(prompter)?
    };

    let config = ScaffoldConfig {
        project_name,
        author,
        cpp_standard: args.cpp_standard,
        dependencies,
        auto_fetch,
    };

    info!(
        "🔧 {}",
        style(format!("Destination: {} ...", destination.display()))
            .bold()
            .yellow()
    );
    info!(
        "🔧 {}",
        style(format!("project-name: {} ...", config.project_name))
            .bold()
            .yellow()
    );
    if args.verbose {
        info!("{config:?}");
    }

    layout::create_project_layout(writer, destination)?;

    info!("🔧 {}", style("Generating project files ...").bold().yellow());
    let files = emitter::render_project(&config)?;
    emitter::write_rendered(writer, destination, &files)?;
    scaffold_config::write_scaffold_record(writer, destination, &config)?;

    if !args.no_fetch {
        git_ops::init_repository(runner, destination);
    }
    if config.auto_fetch {
        git_ops::fetch_dependencies(runner, destination, config.enabled());
    }

    Ok(())
}

/// Dependency-only mode: no files are emitted, no repository is initialized.
fn fetch_only(
    args: &AppArgs,
    prompter: &mut impl Prompter,
    runner: &impl CommandRunner,
    destination: &Path,
) -> Result<()> {
    let flags = if args.silent {
        args.with.clone()
    } else {
        interactive::dependency_flags(prompter, &args.with)?
            .into_iter()
            .filter_map(|(name, enabled)| enabled.then_some(name))
            .collect()
    };

    let enabled = DEPENDENCIES
        .iter()
        .filter(|dep| flags.iter().any(|name| name == dep.name));
    git_ops::fetch_dependencies(runner, destination, enabled);
    Ok(())
}
