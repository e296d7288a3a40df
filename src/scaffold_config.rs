//! The single transient configuration record everything else reads from.

use std::path::Path;

use anyhow::Result;
use heck::ToKebabCase;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dependency::{DependencySpec, DEPENDENCIES};
use crate::fsops::FileWriter;

pub const DEFAULT_CPP_STANDARD: u8 = 20;

/// Record of the answers a scaffold run was generated from, written into the
/// project so later invocations (and humans) can see what was selected.
pub const SCAFFOLD_RECORD_FILE_NAME: &str = ".cppstart.toml";

#[derive(Debug)]
pub struct ScaffoldConfig {
    pub project_name: String,
    pub author: String,
    pub cpp_standard: u8,
    /// Dependency name -> include flag, in registry order.
    pub dependencies: IndexMap<String, bool>,
    pub auto_fetch: bool,
}

impl ScaffoldConfig {
    pub fn is_enabled(&self, name: &str) -> bool {
        self.dependencies.get(name).copied().unwrap_or(false)
    }

    /// Enabled dependencies in registry order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static DependencySpec> + '_ {
        DEPENDENCIES.iter().filter(|dep| self.is_enabled(dep.name))
    }

    pub fn wants_tests(&self) -> bool {
        self.enabled().any(|dep| dep.provides_test_harness)
    }
}

/// Keeps the leading alphanumeric structure of a name and folds everything
/// else into kebab-case, the same policy cargo-like generators apply.
pub fn sanitize_project_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .to_kebab_case()
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ScaffoldRecord {
    project: ProjectSection,
    dependencies: IndexMap<String, bool>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ProjectSection {
    name: String,
    author: String,
    cpp_standard: u8,
}

pub fn write_scaffold_record(
    writer: &mut impl FileWriter,
    destination: &Path,
    config: &ScaffoldConfig,
) -> Result<()> {
    let record = ScaffoldRecord {
        project: ProjectSection {
            name: config.project_name.clone(),
            author: config.author.clone(),
            cpp_standard: config.cpp_standard,
        },
        dependencies: config.dependencies.clone(),
    };
    let contents = toml::to_string(&record)?;
    writer.write_file(&destination.join(SCAFFOLD_RECORD_FILE_NAME), &contents)
}
