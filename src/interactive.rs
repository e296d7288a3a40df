//! Prompt collector: every question the tool asks goes through the
//! [`Prompter`] seam so the whole interrogation can be scripted in tests.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;
use indexmap::IndexMap;
use log::warn;
use thiserror::Error;

use crate::dependency::DEPENDENCIES;

pub trait Prompter {
    /// Ask one question and return the trimmed answer line.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompter bound to the real terminal.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", style(prompt).bold())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    NewProject,
    DepsOnly,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid option `{0}`. Stopping.")]
pub struct InvalidMode(String);

pub fn mode(prompter: &mut impl Prompter) -> Result<Mode> {
    let answer = prompter.ask("New project (a) or fetch dependencies only (b)? (a/b):")?;
    match answer.to_lowercase().as_str() {
        "a" => Ok(Mode::NewProject),
        "b" => Ok(Mode::DepsOnly),
        other => Err(InvalidMode(other.to_string()).into()),
    }
}

/// Strict yes/no: only a case-insensitive `y` is affirmative.
pub fn confirm(prompter: &mut impl Prompter, prompt: &str) -> Result<bool> {
    Ok(prompter.ask(prompt)?.eq_ignore_ascii_case("y"))
}

/// The auto-fetch question defaults to yes: only an explicit `n` declines.
pub fn confirm_auto_fetch(prompter: &mut impl Prompter) -> Result<bool> {
    let answer = prompter.ask("Fetch external dependencies automatically (Y/n)?")?;
    Ok(!answer.eq_ignore_ascii_case("n"))
}

pub fn confirm_overwrite(prompter: &mut impl Prompter) -> Result<bool> {
    confirm(
        prompter,
        "src folder detected. Are you sure you want to overwrite your files? (y/N):",
    )
}

pub fn author(prompter: &mut impl Prompter) -> Result<String> {
    prompter.ask("Author:")
}

pub fn project_name(prompter: &mut impl Prompter) -> Result<String> {
    let valid_ident = regex::Regex::new(r"^([a-zA-Z][a-zA-Z0-9_-]+)$")?;
    loop {
        let answer = prompter.ask("Project name:")?;
        if valid_ident.is_match(&answer) {
            return Ok(answer);
        }
        warn!(
            "{} \"{}\" {}",
            style("Sorry,").bold().red(),
            style(&answer).bold().yellow(),
            style("is not a valid project name").bold().red()
        );
    }
}

/// One include flag per known dependency, in registry order. Names in
/// `preselected` are taken as enabled without asking.
pub fn dependency_flags(
    prompter: &mut impl Prompter,
    preselected: &[String],
) -> Result<IndexMap<String, bool>> {
    let mut flags = IndexMap::with_capacity(DEPENDENCIES.len());
    for dep in DEPENDENCIES {
        let enabled = if preselected.iter().any(|name| name == dep.name) {
            true
        } else {
            confirm(prompter, &format!("Install {} (y/n)?", dep.name))?
        };
        flags.insert(dep.name.to_string(), enabled);
    }
    Ok(flags)
}

#[cfg(test)]
pub use scripted::ScriptedPrompter;
