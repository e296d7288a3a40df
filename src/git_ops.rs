//! Dependency fetcher: repository initialization and submodule registration
//! through an external `git`, behind a narrow [`CommandRunner`] seam.
//!
//! Failures here are non-fatal by policy. The scaffolded files already exist,
//! so a missing or misbehaving `git` only produces warnings.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use console::style;
use log::{info, warn};

use crate::dependency::DependencySpec;

pub trait CommandRunner {
    /// `git init` in `workdir`. Returns whether the command succeeded.
    fn init_repository(&self, workdir: &Path) -> Result<bool>;

    /// `git submodule add --force <url> <path>` in `workdir`.
    fn add_tracked_subrepo(&self, workdir: &Path, url: &str, path: &str) -> Result<bool>;
}

/// Runner shelling out to the `git` binary, inheriting stdio so its own
/// output stays visible to the user.
#[derive(Debug, Default)]
pub struct GitCli;

impl CommandRunner for GitCli {
    fn init_repository(&self, workdir: &Path) -> Result<bool> {
        let status = Command::new("git")
            .arg("init")
            .current_dir(workdir)
            .status()
            .context("cannot invoke `git init`")?;
        Ok(status.success())
    }

    fn add_tracked_subrepo(&self, workdir: &Path, url: &str, path: &str) -> Result<bool> {
        let status = Command::new("git")
            .args(["submodule", "add", "--force"])
            .arg(url)
            .arg(path)
            .current_dir(workdir)
            .status()
            .context("cannot invoke `git submodule add`")?;
        Ok(status.success())
    }
}

pub fn init_repository(runner: &impl CommandRunner, destination: &Path) {
    match runner.init_repository(destination) {
        Ok(true) => {}
        Ok(false) => warn!("{}", style("`git init` failed, continuing").bold().yellow()),
        Err(e) => warn!("{} {e:#}", style("Skipping `git init`:").bold().yellow()),
    }
}

/// Register every dependency in `enabled` as a tracked subrepo. A failing
/// registration is reported and the remaining ones are still attempted.
pub fn fetch_dependencies<'a>(
    runner: &impl CommandRunner,
    destination: &Path,
    enabled: impl Iterator<Item = &'a DependencySpec>,
) {
    for dep in enabled {
        info!(
            "🔧 {}",
            style(format!("Fetching {} from {} ...", dep.name, dep.url)).bold()
        );
        match runner.add_tracked_subrepo(destination, dep.url, &dep.submodule_path()) {
            Ok(true) => {}
            Ok(false) => warn!(
                "{}",
                style(format!("Registering {} failed, continuing", dep.name))
                    .bold()
                    .yellow()
            ),
            Err(e) => warn!(
                "{} {e:#}",
                style(format!("Skipping {}:", dep.name)).bold().yellow()
            ),
        }
    }
}

#[cfg(test)]
pub use recording::RecordingRunner;
